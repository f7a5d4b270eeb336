use axum::{Router, routing::get};
use storage::Database;

use super::handlers::list_recent_activities;

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(list_recent_activities))
}
