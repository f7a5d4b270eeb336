use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Class, House};

/// Request payload for creating a new class
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClassRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(range(min = 1, max = 12, message = "Grade must be between 1 and 12"))]
    pub grade: i32,

    #[validate(length(min = 1, max = 10))]
    pub section: String,

    #[validate(custom(function = "validate_house"))]
    pub house: String,
}

fn validate_house(house: &str) -> Result<(), validator::ValidationError> {
    if house.parse::<House>().is_ok() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_house"))
    }
}

/// A class with its position on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub class_id: Uuid,
    pub name: String,
    pub grade: i32,
    pub section: String,
    pub house: House,
    pub points: i32,
}

impl LeaderboardEntry {
    pub fn new(class: Class, rank: i64) -> Self {
        Self {
            rank,
            class_id: class.class_id,
            name: class.name,
            grade: class.grade,
            section: class.section,
            house: class.house,
            points: class.points,
        }
    }
}
