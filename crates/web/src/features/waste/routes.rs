use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{list_waste_entries, report_waste};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_waste_entries))
        .route("/report", post(report_waste))
}
