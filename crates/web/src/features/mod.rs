pub mod activities;
pub mod analytics;
pub mod bins;
pub mod classes;
pub mod dashboard;
pub mod leaderboard;
pub mod waste;
