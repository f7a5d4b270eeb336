use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::WasteCategory;

/// Waste totals for the current day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TodayStats {
    /// Kilograms of waste reported today
    pub total_waste: f64,
    /// Kilograms of properly segregated waste reported today
    pub recycled: f64,
    /// Kilograms of CO2 equivalent
    pub carbon_footprint: f64,
    /// Grams per category, for charts
    #[schema(value_type = Object)]
    pub waste_by_type: BTreeMap<WasteCategory, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    #[serde(flatten)]
    pub today: TodayStats,
    pub green_points: i64,
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct ActivityFeedParams {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

impl Default for ActivityFeedParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

impl ActivityFeedParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit < 1 || self.limit > 100 {
            return Err("limit must be between 1 and 100".to_string());
        }
        Ok(())
    }
}
