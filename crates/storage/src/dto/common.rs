use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Optional creation-time window for listing queries.
///
/// The window only applies when both bounds are given; both ends are inclusive.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, IntoParams, ToSchema)]
pub struct DateRangeParams {
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl DateRangeParams {
    pub fn new(start_date: NaiveDateTime, end_date: NaiveDateTime) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some((start, end)) = self.bounds()
            && start > end
        {
            return Err("start_date must not be after end_date".to_string());
        }
        Ok(())
    }

    pub fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.start_date.zip(self.end_date)
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        match self.bounds() {
            Some((start, end)) => start <= timestamp && timestamp <= end,
            None => true,
        }
    }
}
