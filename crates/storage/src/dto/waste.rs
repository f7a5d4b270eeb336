use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::DateRangeParams;
use crate::models::WasteCategory;

/// Request payload for reporting disposed waste
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordWasteRequest {
    #[validate(custom(function = "validate_waste_type"))]
    pub waste_type: String,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    pub class_id: Option<Uuid>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[serde(default = "default_segregated")]
    pub properly_segregated: bool,

    pub reported_by: Option<Uuid>,
}

fn default_segregated() -> bool {
    true
}

fn validate_waste_type(waste_type: &str) -> Result<(), validator::ValidationError> {
    if waste_type.parse::<WasteCategory>().is_ok() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("unknown_waste_type"))
    }
}

/// Filters for listing waste entries
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
pub struct WasteEntryFilter {
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub class_id: Option<Uuid>,
}

impl WasteEntryFilter {
    pub fn range(&self) -> DateRangeParams {
        DateRangeParams {
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}
