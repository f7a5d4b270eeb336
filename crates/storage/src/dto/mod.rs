pub mod bin_report;
pub mod class;
pub mod common;
pub mod stats;
pub mod waste;
