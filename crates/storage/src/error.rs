use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Unknown waste category: {0}")]
    UnknownCategory(String),

    #[error("Unknown bin status: {0}")]
    UnknownStatus(String),

    #[error("Unknown house: {0}")]
    UnknownHouse(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    /// Input was rejected before any mutation took place.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            StorageError::Validation(_)
                | StorageError::UnknownCategory(_)
                | StorageError::UnknownStatus(_)
                | StorageError::UnknownHouse(_)
        )
    }

    /// Names of the offending request fields, when the error carries them.
    pub fn invalid_fields(&self) -> Vec<String> {
        match self {
            StorageError::Validation(errors) => {
                let mut fields: Vec<String> = errors
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect();
                fields.sort();
                fields
            }
            StorageError::UnknownCategory(_) => vec!["waste_type".to_string()],
            StorageError::UnknownStatus(_) => vec!["status".to_string()],
            StorageError::UnknownHouse(_) => vec!["house".to_string()],
            _ => Vec::new(),
        }
    }
}
