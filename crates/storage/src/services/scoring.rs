use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{ActivityKind, BinStatus, NewBinReport, NewWasteEntry, ScoreChange, WasteCategory};

/// Every qualifying waste report is worth at least this much.
pub const MIN_WASTE_POINTS: i32 = 3;

/// Item count bonus stops growing past this value.
pub const MAX_QUANTITY_BONUS: i32 = 20;

const WEIGHT_POINT_DIVISOR: f64 = 10.0;
const MULTIPLIER_BASELINE: f64 = 5.0;

/// Points earned by a properly segregated waste report.
///
/// points = max(3, round((sqrt(weight / 10) + min(quantity * 2, 20)) * multiplier / 5))
pub fn points_for_waste(category: WasteCategory, weight_grams: Decimal, quantity: i32) -> i32 {
    let multiplier = f64::from(category.profile().point_multiplier);

    let weight = weight_grams.to_f64().unwrap_or(0.0).max(0.0);
    let weight_points = (weight / WEIGHT_POINT_DIVISOR).sqrt();
    let quantity_bonus = quantity.saturating_mul(2).min(MAX_QUANTITY_BONUS);

    let base_points = (weight_points + f64::from(quantity_bonus)) * (multiplier / MULTIPLIER_BASELINE);

    (base_points.round() as i32).max(MIN_WASTE_POINTS)
}

/// Fixed deduction for a problematic bin, `None` when the bin is fine.
pub fn bin_penalty(status: BinStatus) -> Option<i32> {
    match status {
        BinStatus::Normal => None,
        BinStatus::Overflowing => Some(-20),
        BinStatus::WrongUsage => Some(-10),
    }
}

/// Award for a waste report, if it is segregated and attributed to a class.
pub fn waste_award(entry: &NewWasteEntry) -> Option<ScoreChange> {
    if !entry.properly_segregated {
        return None;
    }
    let class_id = entry.class_id?;

    let points = points_for_waste(entry.waste_type, entry.weight, entry.quantity);

    Some(ScoreChange {
        class_id,
        points,
        activity_type: ActivityKind::WasteReport,
        description: format!(
            "Properly segregated {} {} items (+{} points)",
            entry.quantity,
            entry.waste_type.label(),
            points
        ),
        user_id: entry.reported_by,
    })
}

/// Penalty for a bin report, if the bin is misused and a class is attributed.
pub fn bin_report_penalty(report: &NewBinReport) -> Option<ScoreChange> {
    let class_id = report.class_id?;
    let points = bin_penalty(report.status)?;

    Some(ScoreChange {
        class_id,
        points,
        activity_type: ActivityKind::BinStatus,
        description: format!(
            "Bin {} reported at {}",
            report.status.label(),
            report.location
        ),
        user_id: Some(report.reported_by),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn segregated(category: WasteCategory, quantity: i32, class_id: Option<Uuid>) -> NewWasteEntry {
        NewWasteEntry::new(category, quantity, class_id, None, true, None)
    }

    #[test]
    fn test_plastic_bottles_reference_value() {
        // (sqrt(10) + 8) * 8 / 5 = 17.86
        assert_eq!(
            points_for_waste(WasteCategory::PlasticBottles, Decimal::from(100), 4),
            18
        );
    }

    #[test]
    fn test_points_never_drop_below_floor() {
        assert_eq!(
            points_for_waste(WasteCategory::PaperTissues, Decimal::ZERO, 0),
            MIN_WASTE_POINTS
        );
        assert_eq!(
            points_for_waste(WasteCategory::PaperTissues, Decimal::from(5), 1),
            MIN_WASTE_POINTS
        );
    }

    #[test]
    fn test_quantity_bonus_is_capped() {
        let at_cap = points_for_waste(WasteCategory::Pens, Decimal::ZERO, 10);
        let past_cap = points_for_waste(WasteCategory::Pens, Decimal::ZERO, 500);
        assert_eq!(at_cap, past_cap);
        // 20 * 9 / 5
        assert_eq!(at_cap, 36);
    }

    #[test]
    fn test_points_monotonic_in_weight() {
        for category in WasteCategory::all() {
            for quantity in [1, 3, 10, 40] {
                let mut previous = 0;
                for grams in (0..5_000).step_by(37) {
                    let points = points_for_waste(*category, Decimal::from(grams), quantity);
                    assert!(points >= previous, "{category} q={quantity} g={grams}");
                    assert!(points >= MIN_WASTE_POINTS);
                    previous = points;
                }
            }
        }
    }

    #[test]
    fn test_bin_penalties() {
        assert_eq!(bin_penalty(BinStatus::Normal), None);
        assert_eq!(bin_penalty(BinStatus::Overflowing), Some(-20));
        assert_eq!(bin_penalty(BinStatus::WrongUsage), Some(-10));
    }

    #[test]
    fn test_waste_award_requires_segregation_and_class() {
        let class_id = Uuid::new_v4();

        let award = waste_award(&segregated(WasteCategory::PlasticBottles, 4, Some(class_id)))
            .expect("award for segregated class report");
        assert_eq!(award.class_id, class_id);
        assert_eq!(award.points, 18);
        assert_eq!(award.activity_type, ActivityKind::WasteReport);
        assert_eq!(
            award.description,
            "Properly segregated 4 plastic bottles items (+18 points)"
        );

        assert!(waste_award(&segregated(WasteCategory::PlasticBottles, 4, None)).is_none());

        let mut unsorted = segregated(WasteCategory::PlasticBottles, 4, Some(class_id));
        unsorted.properly_segregated = false;
        assert!(waste_award(&unsorted).is_none());
    }

    #[test]
    fn test_bin_report_penalty_description() {
        let report = NewBinReport {
            location: "Canteen".to_string(),
            status: BinStatus::WrongUsage,
            class_id: Some(Uuid::new_v4()),
            reported_by: Uuid::new_v4(),
            description: None,
        };

        let penalty = bin_report_penalty(&report).expect("penalty for misused bin");
        assert_eq!(penalty.points, -10);
        assert_eq!(penalty.description, "Bin wrong usage reported at Canteen");
        assert_eq!(penalty.user_id, Some(report.reported_by));

        let normal = NewBinReport {
            status: BinStatus::Normal,
            ..report.clone()
        };
        assert!(bin_report_penalty(&normal).is_none());

        let unattributed = NewBinReport {
            class_id: None,
            ..report
        };
        assert!(bin_report_penalty(&unattributed).is_none());
    }
}
