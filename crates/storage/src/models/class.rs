use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::House;

/// A competing group of students.
///
/// `points` is a running total kept for cheap leaderboard reads. It always
/// equals the sum of the point deltas of the activities that reference the
/// class, and is only ever changed together with such an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Class {
    pub class_id: Uuid,
    pub name: String,
    pub grade: i32,
    pub section: String,
    pub house: House,
    pub points: i32,
}

/// A class that has not been stored yet
#[derive(Debug, Clone)]
pub struct NewClass {
    pub name: String,
    pub grade: i32,
    pub section: String,
    pub house: House,
}

impl NewClass {
    pub fn new(name: impl Into<String>, grade: i32, section: impl Into<String>, house: House) -> Self {
        Self {
            name: name.into(),
            grade,
            section: section.into(),
            house,
        }
    }

    /// Classes every fresh installation starts with.
    pub fn defaults() -> Vec<NewClass> {
        vec![
            Self::new("X Fire", 10, "A", House::Red),
            Self::new("X Water", 10, "B", House::Blue),
            Self::new("X Air", 10, "C", House::Green),
            Self::new("X Sky", 10, "D", House::Blue),
            Self::new("X Light", 10, "E", House::Yellow),
        ]
    }
}
