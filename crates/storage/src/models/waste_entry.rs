use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::WasteCategory;

/// One recorded disposal report. Never modified once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WasteEntry {
    pub entry_id: Uuid,
    pub waste_type: WasteCategory,
    pub quantity: i32,
    /// Total weight in grams
    pub weight: Decimal,
    /// Total footprint in grams of CO2 equivalent
    pub carbon_footprint: Decimal,
    pub class_id: Option<Uuid>,
    pub reported_by: Option<Uuid>,
    pub location: Option<String>,
    pub properly_segregated: bool,
    pub created_at: NaiveDateTime,
}

/// A validated disposal report with its derived figures, ready to be appended.
#[derive(Debug, Clone)]
pub struct NewWasteEntry {
    pub waste_type: WasteCategory,
    pub quantity: i32,
    pub weight: Decimal,
    pub carbon_footprint: Decimal,
    pub class_id: Option<Uuid>,
    pub reported_by: Option<Uuid>,
    pub location: Option<String>,
    pub properly_segregated: bool,
}

impl NewWasteEntry {
    /// Derives weight and carbon footprint from the category catalog.
    pub fn new(
        waste_type: WasteCategory,
        quantity: i32,
        class_id: Option<Uuid>,
        location: Option<String>,
        properly_segregated: bool,
        reported_by: Option<Uuid>,
    ) -> Self {
        let profile = waste_type.profile();
        let weight = profile.weight_for(quantity);
        let carbon_footprint = profile.carbon_for(weight);

        Self {
            waste_type,
            quantity,
            weight,
            carbon_footprint,
            class_id,
            reported_by,
            location,
            properly_segregated,
        }
    }

    pub fn into_entry(self, entry_id: Uuid, created_at: NaiveDateTime) -> WasteEntry {
        WasteEntry {
            entry_id,
            waste_type: self.waste_type,
            quantity: self.quantity,
            weight: self.weight,
            carbon_footprint: self.carbon_footprint,
            class_id: self.class_id,
            reported_by: self.reported_by,
            location: self.location,
            properly_segregated: self.properly_segregated,
            created_at,
        }
    }
}
