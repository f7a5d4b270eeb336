use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::BinStatus;

/// Request payload for reporting the condition of a bin
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordBinReportRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Location must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub location: String,

    #[validate(custom(function = "validate_status"))]
    pub status: String,

    pub class_id: Option<Uuid>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub reported_by: Uuid,
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        Err(validator::ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    if status.parse::<BinStatus>().is_ok() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}
