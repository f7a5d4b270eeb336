use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Result, StorageError};

/// Waste categories a disposal report can be filed under.
///
/// The set is closed: every category carries a [`CategoryProfile`] in the
/// catalog below, so weight, carbon and point lookups can never miss.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
    sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "waste_type", rename_all = "snake_case")]
pub enum WasteCategory {
    StockPaper,
    FoodWaste,
    PlasticBottles,
    PlasticCutlery,
    PlasticWrappers,
    PlasticPackets,
    ChartPaper,
    DisposableCups,
    Pens,
    PaperTissues,
}

/// Catalog entry for one waste category.
///
/// These are game-balance constants; tune them here, never in the scoring code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProfile {
    /// Average weight of a single item, in grams
    pub unit_weight_grams: u32,
    /// Grams of CO2 equivalent emitted per gram of waste
    pub carbon_multiplier: Decimal,
    /// Scales the points awarded for a properly segregated report
    pub point_multiplier: u32,
}

impl CategoryProfile {
    fn new(unit_weight_grams: u32, carbon_tenths: i64, point_multiplier: u32) -> Self {
        Self {
            unit_weight_grams,
            carbon_multiplier: Decimal::new(carbon_tenths, 1),
            point_multiplier,
        }
    }

    /// Total weight in grams of `quantity` items.
    pub fn weight_for(&self, quantity: i32) -> Decimal {
        Decimal::from(quantity) * Decimal::from(self.unit_weight_grams)
    }

    /// Carbon footprint in grams CO2e of `weight_grams` of this waste.
    pub fn carbon_for(&self, weight_grams: Decimal) -> Decimal {
        weight_grams * self.carbon_multiplier
    }
}

impl WasteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StockPaper => "stock_paper",
            Self::FoodWaste => "food_waste",
            Self::PlasticBottles => "plastic_bottles",
            Self::PlasticCutlery => "plastic_cutlery",
            Self::PlasticWrappers => "plastic_wrappers",
            Self::PlasticPackets => "plastic_packets",
            Self::ChartPaper => "chart_paper",
            Self::DisposableCups => "disposable_cups",
            Self::Pens => "pens",
            Self::PaperTissues => "paper_tissues",
        }
    }

    /// Human readable name used in activity descriptions
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn all() -> &'static [WasteCategory] {
        &[
            Self::StockPaper,
            Self::FoodWaste,
            Self::PlasticBottles,
            Self::PlasticCutlery,
            Self::PlasticWrappers,
            Self::PlasticPackets,
            Self::ChartPaper,
            Self::DisposableCups,
            Self::Pens,
            Self::PaperTissues,
        ]
    }

    pub fn profile(&self) -> CategoryProfile {
        match self {
            Self::StockPaper => CategoryProfile::new(5, 12, 7),
            Self::FoodWaste => CategoryProfile::new(532, 43, 5),
            Self::PlasticBottles => CategoryProfile::new(25, 60, 8),
            Self::PlasticCutlery => CategoryProfile::new(50, 60, 6),
            Self::PlasticWrappers => CategoryProfile::new(10, 60, 4),
            Self::PlasticPackets => CategoryProfile::new(20, 60, 5),
            Self::ChartPaper => CategoryProfile::new(120, 12, 6),
            Self::DisposableCups => CategoryProfile::new(60, 25, 4),
            Self::Pens => CategoryProfile::new(30, 80, 9),
            Self::PaperTissues => CategoryProfile::new(5, 12, 3),
        }
    }

    fn parse_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| StorageError::UnknownCategory(s.to_string()))
    }
}

/// Looks up the catalog entry for a raw category key.
pub fn lookup(key: &str) -> Result<CategoryProfile> {
    key.parse::<WasteCategory>().map(|category| category.profile())
}

impl TryFrom<&str> for WasteCategory {
    type Error = StorageError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for WasteCategory {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_round_trips_through_parse() {
        for category in WasteCategory::all() {
            assert_eq!(category.as_str().parse::<WasteCategory>().unwrap(), *category);
        }
        assert_eq!(WasteCategory::all().len(), 10);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = lookup("glass_jars").unwrap_err();
        assert!(matches!(err, StorageError::UnknownCategory(ref key) if key == "glass_jars"));
        assert!(WasteCategory::try_from("Plastic_Bottles").is_err());
    }

    #[test]
    fn test_plastic_bottle_profile() {
        let profile = lookup("plastic_bottles").unwrap();
        assert_eq!(profile.unit_weight_grams, 25);
        assert_eq!(profile.carbon_multiplier, Decimal::new(6, 0));
        assert_eq!(profile.point_multiplier, 8);

        let weight = profile.weight_for(4);
        assert_eq!(weight, Decimal::from(100));
        assert_eq!(profile.carbon_for(weight), Decimal::from(600));
    }

    #[test]
    fn test_fractional_carbon_multipliers() {
        let food = WasteCategory::FoodWaste.profile();
        assert_eq!(food.carbon_multiplier, Decimal::new(43, 1));
        assert_eq!(food.carbon_for(food.weight_for(1)), Decimal::new(22876, 1));

        let cups = WasteCategory::DisposableCups.profile();
        assert_eq!(cups.carbon_multiplier, Decimal::new(25, 1));
    }

    #[test]
    fn test_label_replaces_underscores() {
        assert_eq!(WasteCategory::PaperTissues.label(), "paper tissues");
        assert_eq!(WasteCategory::Pens.label(), "pens");
    }
}
