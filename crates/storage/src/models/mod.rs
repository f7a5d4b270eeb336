pub mod activity;
pub mod bin_report;
pub mod class;
pub mod house;
pub mod waste_category;
pub mod waste_entry;

pub use activity::{Activity, ActivityKind, ScoreChange};
pub use bin_report::{BinReport, BinStatus, NewBinReport};
pub use class::{Class, NewClass};
pub use house::House;
pub use waste_category::{CategoryProfile, WasteCategory};
pub use waste_entry::{NewWasteEntry, WasteEntry};
