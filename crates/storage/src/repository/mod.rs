use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    Activity, BinReport, Class, NewBinReport, NewClass, NewWasteEntry, ScoreChange, WasteEntry,
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

/// Result of one atomic recording: the stored record, plus the activity
/// produced by its score change when the class could be resolved.
#[derive(Debug, Clone)]
pub struct Recorded<T> {
    pub record: T,
    pub activity: Option<Activity>,
}

/// Storage for classes and the append-only event history.
///
/// Consistency boundary: `append_waste_entry` and `append_bin_report` each run
/// as one atomic unit covering the append, the class point update and the
/// activity insert. Readers never observe one of these without the others.
/// A score change whose class does not exist is dropped; the record is kept.
///
/// Collections are returned in append order.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn list_classes(&self) -> Result<Vec<Class>>;

    async fn find_class(&self, class_id: Uuid) -> Result<Option<Class>>;

    async fn create_class(&self, class: NewClass) -> Result<Class>;

    async fn append_waste_entry(
        &self,
        entry: NewWasteEntry,
        score: Option<ScoreChange>,
    ) -> Result<Recorded<WasteEntry>>;

    async fn append_bin_report(
        &self,
        report: NewBinReport,
        score: Option<ScoreChange>,
    ) -> Result<Recorded<BinReport>>;

    /// Waste entries, optionally restricted to one class
    async fn waste_entries(&self, class_id: Option<Uuid>) -> Result<Vec<WasteEntry>>;

    async fn bin_reports(&self) -> Result<Vec<BinReport>>;

    async fn activities(&self) -> Result<Vec<Activity>>;
}
