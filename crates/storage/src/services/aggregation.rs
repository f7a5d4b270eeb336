use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::dto::class::LeaderboardEntry;
use crate::dto::stats::{DashboardStats, TodayStats};
use crate::error::Result;
use crate::models::{Activity, Class, WasteCategory, WasteEntry};
use crate::repository::Repository;

const GRAMS_PER_KILOGRAM: i64 = 1000;

/// Gram sums for one day of waste entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayTotals {
    pub total_grams: Decimal,
    pub recycled_grams: Decimal,
    pub carbon_grams: Decimal,
    pub grams_by_type: BTreeMap<WasteCategory, Decimal>,
}

impl DayTotals {
    pub fn total_kg(&self) -> Decimal {
        to_kilograms(self.total_grams)
    }

    pub fn recycled_kg(&self) -> Decimal {
        to_kilograms(self.recycled_grams)
    }

    pub fn carbon_kg(&self) -> Decimal {
        to_kilograms(self.carbon_grams)
    }

    pub fn stats(&self) -> TodayStats {
        TodayStats {
            total_waste: decimal_to_f64(self.total_kg()),
            recycled: decimal_to_f64(self.recycled_kg()),
            carbon_footprint: decimal_to_f64(self.carbon_kg()),
            waste_by_type: self
                .grams_by_type
                .iter()
                .map(|(category, grams)| (*category, decimal_to_f64(*grams)))
                .collect(),
        }
    }

    /// Dashboard score: 100 per recycled kg, minus 50 per unsorted kg, never negative.
    pub fn green_points(&self) -> i64 {
        let recycled = self.recycled_kg();
        let unsorted = self.total_kg() - recycled;

        let earned = (recycled * Decimal::from(100)).floor();
        let lost = (unsorted * Decimal::from(-50)).floor();

        (earned + lost).to_i64().unwrap_or(0).max(0)
    }
}

/// Whole grams, rounded half up, expressed in kilograms
fn to_kilograms(grams: Decimal) -> Decimal {
    grams.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        / Decimal::from(GRAMS_PER_KILOGRAM)
}

fn decimal_to_f64(decimal: Decimal) -> f64 {
    decimal.to_f64().unwrap_or(0.0)
}

/// Half-open window `[midnight, next midnight)` covering `day`.
pub fn day_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = day.and_time(chrono::NaiveTime::MIN);
    let end = day
        .succ_opt()
        .map(|next| next.and_time(chrono::NaiveTime::MIN))
        .unwrap_or(NaiveDateTime::MAX);
    (start, end)
}

pub fn day_totals(entries: &[WasteEntry], day: NaiveDate) -> DayTotals {
    let (start, end) = day_bounds(day);

    entries
        .iter()
        .filter(|entry| entry.created_at >= start && entry.created_at < end)
        .fold(DayTotals::default(), |mut totals, entry| {
            totals.total_grams += entry.weight;
            if entry.properly_segregated {
                totals.recycled_grams += entry.weight;
            }
            totals.carbon_grams += entry.carbon_footprint;
            *totals
                .grams_by_type
                .entry(entry.waste_type)
                .or_insert(Decimal::ZERO) += entry.weight;
            totals
        })
}

/// Classes by points, highest first. Ties keep their store order.
pub fn leaderboard(mut classes: Vec<Class>) -> Vec<LeaderboardEntry> {
    classes.sort_by(|a, b| b.points.cmp(&a.points));

    classes
        .into_iter()
        .enumerate()
        .map(|(index, class)| LeaderboardEntry::new(class, index as i64 + 1))
        .collect()
}

/// Grams of waste per class grade, over all time. Unattributed entries and
/// entries pointing at unknown classes are left out.
pub fn waste_by_grade(entries: &[WasteEntry], classes: &[Class]) -> BTreeMap<i32, f64> {
    let grades: HashMap<Uuid, i32> = classes.iter().map(|c| (c.class_id, c.grade)).collect();

    let mut totals: BTreeMap<i32, Decimal> = BTreeMap::new();
    for entry in entries {
        let Some(grade) = entry.class_id.and_then(|id| grades.get(&id)) else {
            continue;
        };
        *totals.entry(*grade).or_insert(Decimal::ZERO) += entry.weight;
    }

    totals
        .into_iter()
        .map(|(grade, grams)| (grade, decimal_to_f64(grams)))
        .collect()
}

/// Grams of CO2 equivalent per category, over all time
pub fn carbon_by_category(entries: &[WasteEntry]) -> BTreeMap<WasteCategory, f64> {
    let mut totals: BTreeMap<WasteCategory, Decimal> = BTreeMap::new();
    for entry in entries {
        *totals.entry(entry.waste_type).or_insert(Decimal::ZERO) += entry.carbon_footprint;
    }

    totals
        .into_iter()
        .map(|(category, grams)| (category, decimal_to_f64(grams)))
        .collect()
}

/// Newest activities first. Activities sharing a timestamp are ordered
/// latest-appended first.
pub fn recent_activities(activities: Vec<Activity>, limit: usize) -> Vec<Activity> {
    let mut activities: Vec<Activity> = activities.into_iter().rev().collect();
    activities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    activities.truncate(limit);
    activities
}

pub async fn get_today_stats(repo: &dyn Repository) -> Result<TodayStats> {
    let entries = repo.waste_entries(None).await?;
    Ok(day_totals(&entries, Utc::now().date_naive()).stats())
}

pub async fn get_dashboard_stats(repo: &dyn Repository) -> Result<DashboardStats> {
    let entries = repo.waste_entries(None).await?;
    let totals = day_totals(&entries, Utc::now().date_naive());

    Ok(DashboardStats {
        today: totals.stats(),
        green_points: totals.green_points(),
    })
}

pub async fn get_leaderboard(repo: &dyn Repository) -> Result<Vec<LeaderboardEntry>> {
    Ok(leaderboard(repo.list_classes().await?))
}

pub async fn get_recent_activities(repo: &dyn Repository, limit: usize) -> Result<Vec<Activity>> {
    Ok(recent_activities(repo.activities().await?, limit))
}

pub async fn get_waste_trends_by_grade(repo: &dyn Repository) -> Result<BTreeMap<i32, f64>> {
    let classes = repo.list_classes().await?;
    let entries = repo.waste_entries(None).await?;
    Ok(waste_by_grade(&entries, &classes))
}

pub async fn get_carbon_by_category(repo: &dyn Repository) -> Result<BTreeMap<WasteCategory, f64>> {
    Ok(carbon_by_category(&repo.waste_entries(None).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityKind, House, NewWasteEntry};

    fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        day.and_hms_opt(hour, minute, 0).unwrap()
    }

    fn entry(
        category: WasteCategory,
        quantity: i32,
        class_id: Option<Uuid>,
        segregated: bool,
        created_at: NaiveDateTime,
    ) -> WasteEntry {
        NewWasteEntry::new(category, quantity, class_id, None, segregated, None)
            .into_entry(Uuid::new_v4(), created_at)
    }

    fn class(name: &str, grade: i32, points: i32) -> Class {
        Class {
            class_id: Uuid::new_v4(),
            name: name.to_string(),
            grade,
            section: "A".to_string(),
            house: House::Green,
            points,
        }
    }

    #[test]
    fn test_day_totals_only_count_the_day() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let next = day.succ_opt().unwrap();
        let entries = vec![
            entry(WasteCategory::FoodWaste, 1, None, true, at(day, 0, 0)),
            entry(WasteCategory::PlasticBottles, 4, None, false, at(day, 23, 59)),
            entry(WasteCategory::Pens, 10, None, true, at(next, 0, 0)),
            entry(WasteCategory::Pens, 10, None, true, at(day.pred_opt().unwrap(), 23, 59)),
        ];

        let totals = day_totals(&entries, day);
        assert_eq!(totals.total_grams, Decimal::from(632));
        assert_eq!(totals.recycled_grams, Decimal::from(532));
        assert_eq!(totals.carbon_grams, Decimal::new(28876, 1));

        assert_eq!(totals.total_kg(), Decimal::new(632, 3));
        assert_eq!(totals.recycled_kg(), Decimal::new(532, 3));
        // 2887.6 g rounds to 2888 g before conversion
        assert_eq!(totals.carbon_kg(), Decimal::new(2888, 3));

        let stats = totals.stats();
        assert!((stats.total_waste - 0.632).abs() < 1e-9);
        assert!((stats.carbon_footprint - 2.888).abs() < 1e-9);
        assert_eq!(stats.waste_by_type.get(&WasteCategory::FoodWaste), Some(&532.0));
        assert_eq!(stats.waste_by_type.get(&WasteCategory::PlasticBottles), Some(&100.0));
        assert!(!stats.waste_by_type.contains_key(&WasteCategory::Pens));
    }

    #[test]
    fn test_all_segregated_means_everything_recycled() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let entries: Vec<WasteEntry> = WasteCategory::all()
            .iter()
            .enumerate()
            .map(|(i, category)| entry(*category, i as i32 + 1, None, true, at(day, 9, i as u32)))
            .collect();

        let stats = day_totals(&entries, day).stats();
        assert_eq!(stats.total_waste, stats.recycled);
    }

    #[test]
    fn test_empty_day() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let totals = day_totals(&[], day);
        let stats = totals.stats();
        assert_eq!(stats.total_waste, 0.0);
        assert!(stats.waste_by_type.is_empty());
        assert_eq!(totals.green_points(), 0);
    }

    #[test]
    fn test_green_points() {
        let totals = DayTotals {
            total_grams: Decimal::from(3000),
            recycled_grams: Decimal::from(2500),
            ..Default::default()
        };
        // 250 - 25
        assert_eq!(totals.green_points(), 225);

        let mostly_unsorted = DayTotals {
            total_grams: Decimal::from(3000),
            recycled_grams: Decimal::from(100),
            ..Default::default()
        };
        assert_eq!(mostly_unsorted.green_points(), 0);
    }

    #[test]
    fn test_leaderboard_orders_by_points_and_keeps_ties_stable() {
        let classes = vec![
            class("first tie", 10, 5),
            class("negative", 10, -30),
            class("leader", 9, 40),
            class("second tie", 11, 5),
        ];

        let board = leaderboard(classes);
        let names: Vec<&str> = board.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["leader", "first tie", "second tie", "negative"]);

        let ranks: Vec<i64> = board.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert!(board.windows(2).all(|pair| pair[0].points >= pair[1].points));
    }

    #[test]
    fn test_waste_by_grade_skips_unresolved_classes() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let ninth = class("9A", 9, 0);
        let tenth = class("10A", 10, 0);
        let entries = vec![
            entry(WasteCategory::ChartPaper, 2, Some(ninth.class_id), true, at(day, 8, 0)),
            entry(WasteCategory::ChartPaper, 1, Some(ninth.class_id), false, at(day, 9, 0)),
            entry(WasteCategory::Pens, 1, Some(tenth.class_id), true, at(day, 10, 0)),
            entry(WasteCategory::Pens, 1, Some(Uuid::new_v4()), true, at(day, 10, 0)),
            entry(WasteCategory::Pens, 1, None, true, at(day, 10, 0)),
        ];

        let trends = waste_by_grade(&entries, &[ninth, tenth]);
        assert_eq!(trends.len(), 2);
        assert_eq!(trends[&9], 360.0);
        assert_eq!(trends[&10], 30.0);
    }

    #[test]
    fn test_carbon_by_category_spans_all_days() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let entries = vec![
            entry(WasteCategory::PlasticBottles, 4, None, true, at(day, 8, 0)),
            entry(WasteCategory::PlasticBottles, 1, None, false, at(day.succ_opt().unwrap(), 8, 0)),
            entry(WasteCategory::StockPaper, 10, None, true, at(day, 8, 0)),
        ];

        let carbon = carbon_by_category(&entries);
        assert_eq!(carbon[&WasteCategory::PlasticBottles], 750.0);
        assert_eq!(carbon[&WasteCategory::StockPaper], 60.0);
        assert_eq!(carbon.len(), 2);
    }

    #[test]
    fn test_recent_activities_newest_first_and_limited() {
        let day = NaiveDate::from_ymd_opt(2025, 2, 2).unwrap();
        let activities: Vec<Activity> = (0..15)
            .map(|minute| Activity {
                activity_id: Uuid::new_v4(),
                activity_type: ActivityKind::WasteReport,
                description: format!("activity {minute}"),
                points: minute,
                class_id: None,
                user_id: None,
                created_at: at(day, 12, minute as u32),
            })
            .collect();

        let recent = recent_activities(activities, 10);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].description, "activity 14");
        assert_eq!(recent[9].description, "activity 5");
    }
}
