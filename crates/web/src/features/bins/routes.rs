use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{list_bin_reports, report_bin};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_bin_reports))
        .route("/report", post(report_bin))
}
