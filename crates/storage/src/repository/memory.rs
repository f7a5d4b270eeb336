use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Recorded, Repository};
use crate::error::{Result, StorageError};
use crate::models::{
    Activity, BinReport, Class, NewBinReport, NewClass, NewWasteEntry, ScoreChange, WasteEntry,
};

#[derive(Default)]
struct Tables {
    classes: Vec<Class>,
    waste_entries: Vec<WasteEntry>,
    bin_reports: Vec<BinReport>,
    activities: Vec<Activity>,
    last_timestamp: Option<NaiveDateTime>,
}

impl Tables {
    /// Wall clock time, nudged forward so that timestamps strictly increase.
    fn next_timestamp(&mut self) -> NaiveDateTime {
        let now = Utc::now().naive_utc();
        let timestamp = match self.last_timestamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_timestamp = Some(timestamp);
        timestamp
    }

    fn apply_score(&mut self, score: ScoreChange, created_at: NaiveDateTime) -> Option<Activity> {
        let Some(class) = self
            .classes
            .iter_mut()
            .find(|class| class.class_id == score.class_id)
        else {
            tracing::debug!(class_id = %score.class_id, "Skipping score change for unknown class");
            return None;
        };

        class.points += score.points;

        let activity = score.into_activity(Uuid::new_v4(), created_at);
        self.activities.push(activity.clone());
        Some(activity)
    }
}

/// In-process store. A single lock guards all collections, so each recording
/// is atomic with respect to every reader.
#[derive(Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn list_classes(&self) -> Result<Vec<Class>> {
        Ok(self.tables.read().await.classes.clone())
    }

    async fn find_class(&self, class_id: Uuid) -> Result<Option<Class>> {
        let tables = self.tables.read().await;
        Ok(tables
            .classes
            .iter()
            .find(|class| class.class_id == class_id)
            .cloned())
    }

    async fn create_class(&self, class: NewClass) -> Result<Class> {
        let mut tables = self.tables.write().await;

        if tables.classes.iter().any(|existing| existing.name == class.name) {
            return Err(StorageError::ConstraintViolation(format!(
                "Class '{}' already exists",
                class.name
            )));
        }

        let created = Class {
            class_id: Uuid::new_v4(),
            name: class.name,
            grade: class.grade,
            section: class.section,
            house: class.house,
            points: 0,
        };
        tables.classes.push(created.clone());

        Ok(created)
    }

    async fn append_waste_entry(
        &self,
        entry: NewWasteEntry,
        score: Option<ScoreChange>,
    ) -> Result<Recorded<WasteEntry>> {
        let mut tables = self.tables.write().await;

        let created_at = tables.next_timestamp();
        let record = entry.into_entry(Uuid::new_v4(), created_at);
        tables.waste_entries.push(record.clone());

        let activity = match score {
            Some(score) => {
                let created_at = tables.next_timestamp();
                tables.apply_score(score, created_at)
            }
            None => None,
        };

        Ok(Recorded { record, activity })
    }

    async fn append_bin_report(
        &self,
        report: NewBinReport,
        score: Option<ScoreChange>,
    ) -> Result<Recorded<BinReport>> {
        let mut tables = self.tables.write().await;

        let created_at = tables.next_timestamp();
        let record = report.into_report(Uuid::new_v4(), created_at);
        tables.bin_reports.push(record.clone());

        let activity = match score {
            Some(score) => {
                let created_at = tables.next_timestamp();
                tables.apply_score(score, created_at)
            }
            None => None,
        };

        Ok(Recorded { record, activity })
    }

    async fn waste_entries(&self, class_id: Option<Uuid>) -> Result<Vec<WasteEntry>> {
        let tables = self.tables.read().await;
        Ok(tables
            .waste_entries
            .iter()
            .filter(|entry| class_id.is_none() || entry.class_id == class_id)
            .cloned()
            .collect())
    }

    async fn bin_reports(&self) -> Result<Vec<BinReport>> {
        Ok(self.tables.read().await.bin_reports.clone())
    }

    async fn activities(&self) -> Result<Vec<Activity>> {
        Ok(self.tables.read().await.activities.clone())
    }
}
