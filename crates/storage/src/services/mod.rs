pub mod aggregation;
pub mod recording;
pub mod scoring;
