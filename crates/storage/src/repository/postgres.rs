use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, QueryBuilder};
use uuid::Uuid;

use super::{Recorded, Repository};
use crate::error::{Result, StorageError};
use crate::models::{
    Activity, BinReport, Class, NewBinReport, NewClass, NewWasteEntry, ScoreChange, WasteEntry,
};

const CLASS_COLUMNS: &str = "class_id, name, grade, section, house, points";
const WASTE_ENTRY_COLUMNS: &str = "entry_id, waste_type, quantity, weight, carbon_footprint, \
     class_id, reported_by, location, properly_segregated, created_at";
const BIN_REPORT_COLUMNS: &str =
    "report_id, location, status, class_id, reported_by, description, created_at";
const ACTIVITY_COLUMNS: &str =
    "activity_id, activity_type, description, points, class_id, user_id, created_at";

/// Postgres store. Each recording runs in one transaction and locks the
/// affected class row before touching its points.
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn apply_score(conn: &mut PgConnection, score: ScoreChange) -> Result<Option<Activity>> {
        let locked: Option<Uuid> =
            sqlx::query_scalar("SELECT class_id FROM classes WHERE class_id = $1 FOR UPDATE")
                .bind(score.class_id)
                .fetch_optional(&mut *conn)
                .await?;

        if locked.is_none() {
            tracing::debug!(class_id = %score.class_id, "Skipping score change for unknown class");
            return Ok(None);
        }

        sqlx::query("UPDATE classes SET points = points + $1 WHERE class_id = $2")
            .bind(score.points)
            .bind(score.class_id)
            .execute(&mut *conn)
            .await?;

        let activity = sqlx::query_as::<_, Activity>(&format!(
            r#"
            INSERT INTO activities (activity_type, description, points, class_id, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ACTIVITY_COLUMNS}
            "#
        ))
        .bind(score.activity_type)
        .bind(&score.description)
        .bind(score.points)
        .bind(score.class_id)
        .bind(score.user_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(Some(activity))
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn list_classes(&self) -> Result<Vec<Class>> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes ORDER BY seq"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(classes)
    }

    async fn find_class(&self, class_id: Uuid) -> Result<Option<Class>> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE class_id = $1"
        ))
        .bind(class_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(class)
    }

    async fn create_class(&self, class: NewClass) -> Result<Class> {
        let result = sqlx::query_as::<_, Class>(&format!(
            r#"
            INSERT INTO classes (name, grade, section, house)
            VALUES ($1, $2, $3, $4)
            RETURNING {CLASS_COLUMNS}
            "#
        ))
        .bind(&class.name)
        .bind(class.grade)
        .bind(&class.section)
        .bind(class.house)
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::from);

        match result {
            Err(e) if e.is_unique_violation() => Err(StorageError::ConstraintViolation(format!(
                "Class '{}' already exists",
                class.name
            ))),
            other => other,
        }
    }

    async fn append_waste_entry(
        &self,
        entry: NewWasteEntry,
        score: Option<ScoreChange>,
    ) -> Result<Recorded<WasteEntry>> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, WasteEntry>(&format!(
            r#"
            INSERT INTO waste_entries
                (waste_type, quantity, weight, carbon_footprint, class_id, reported_by,
                 location, properly_segregated)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {WASTE_ENTRY_COLUMNS}
            "#
        ))
        .bind(entry.waste_type)
        .bind(entry.quantity)
        .bind(entry.weight)
        .bind(entry.carbon_footprint)
        .bind(entry.class_id)
        .bind(entry.reported_by)
        .bind(&entry.location)
        .bind(entry.properly_segregated)
        .fetch_one(&mut *tx)
        .await?;

        let activity = match score {
            Some(score) => Self::apply_score(&mut *tx, score).await?,
            None => None,
        };

        tx.commit().await?;

        Ok(Recorded { record, activity })
    }

    async fn append_bin_report(
        &self,
        report: NewBinReport,
        score: Option<ScoreChange>,
    ) -> Result<Recorded<BinReport>> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, BinReport>(&format!(
            r#"
            INSERT INTO bin_reports (location, status, class_id, reported_by, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {BIN_REPORT_COLUMNS}
            "#
        ))
        .bind(&report.location)
        .bind(report.status)
        .bind(report.class_id)
        .bind(report.reported_by)
        .bind(&report.description)
        .fetch_one(&mut *tx)
        .await?;

        let activity = match score {
            Some(score) => Self::apply_score(&mut *tx, score).await?,
            None => None,
        };

        tx.commit().await?;

        Ok(Recorded { record, activity })
    }

    async fn waste_entries(&self, class_id: Option<Uuid>) -> Result<Vec<WasteEntry>> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {WASTE_ENTRY_COLUMNS} FROM waste_entries WHERE 1=1"
        ));

        if let Some(class_id) = class_id {
            query.push(" AND class_id = ");
            query.push_bind(class_id);
        }

        query.push(" ORDER BY seq");

        let entries = query
            .build_query_as::<WasteEntry>()
            .fetch_all(&self.pool)
            .await?;

        Ok(entries)
    }

    async fn bin_reports(&self) -> Result<Vec<BinReport>> {
        let reports = sqlx::query_as::<_, BinReport>(&format!(
            "SELECT {BIN_REPORT_COLUMNS} FROM bin_reports ORDER BY seq"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    async fn activities(&self) -> Result<Vec<Activity>> {
        let activities = sqlx::query_as::<_, Activity>(&format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities ORDER BY seq"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }
}
