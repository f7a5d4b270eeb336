use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{Result, StorageError};

/// Observed condition of a physical bin
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "bin_status", rename_all = "snake_case")]
pub enum BinStatus {
    Normal,
    Overflowing,
    WrongUsage,
}

impl BinStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Overflowing => "overflowing",
            Self::WrongUsage => "wrong_usage",
        }
    }

    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn all() -> &'static [BinStatus] {
        &[Self::Normal, Self::Overflowing, Self::WrongUsage]
    }
}

impl std::str::FromStr for BinStatus {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StorageError::UnknownStatus(s.to_string()))
    }
}

impl std::fmt::Display for BinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BinReport {
    pub report_id: Uuid,
    pub location: String,
    pub status: BinStatus,
    pub class_id: Option<Uuid>,
    pub reported_by: Uuid,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewBinReport {
    pub location: String,
    pub status: BinStatus,
    pub class_id: Option<Uuid>,
    pub reported_by: Uuid,
    pub description: Option<String>,
}

impl NewBinReport {
    pub fn into_report(self, report_id: Uuid, created_at: NaiveDateTime) -> BinReport {
        BinReport {
            report_id,
            location: self.location,
            status: self.status,
            class_id: self.class_id,
            reported_by: self.reported_by,
            description: self.description,
            created_at,
        }
    }
}
