use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "activity_type", rename_all = "snake_case")]
pub enum ActivityKind {
    WasteReport,
    BinStatus,
}

/// Feed entry explaining one change to a class's points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Activity {
    pub activity_id: Uuid,
    pub activity_type: ActivityKind,
    pub description: String,
    pub points: i32,
    pub class_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
}

/// A point delta waiting to be applied to a class.
///
/// The repository applies it in the same atomic unit as the record that
/// caused it, and only when `class_id` resolves to a stored class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreChange {
    pub class_id: Uuid,
    pub points: i32,
    pub activity_type: ActivityKind,
    pub description: String,
    pub user_id: Option<Uuid>,
}

impl ScoreChange {
    pub fn into_activity(self, activity_id: Uuid, created_at: NaiveDateTime) -> Activity {
        Activity {
            activity_id,
            activity_type: self.activity_type,
            description: self.description,
            points: self.points,
            class_id: Some(self.class_id),
            user_id: self.user_id,
            created_at,
        }
    }
}
