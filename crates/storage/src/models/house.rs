use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Result, StorageError};

/// Colour-named house a class belongs to, independent of its grade.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "house", rename_all = "lowercase")]
pub enum House {
    Green,
    Blue,
    Red,
    Yellow,
}

impl House {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }

    pub fn all() -> &'static [House] {
        &[Self::Green, Self::Blue, Self::Red, Self::Yellow]
    }
}

impl std::str::FromStr for House {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|house| house.as_str() == s)
            .ok_or_else(|| StorageError::UnknownHouse(s.to_string()))
    }
}

impl std::fmt::Display for House {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
