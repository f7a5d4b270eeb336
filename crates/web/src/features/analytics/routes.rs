use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_carbon_footprint, get_waste_trends};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/waste-trends", get(get_waste_trends))
        .route("/carbon-footprint", get(get_carbon_footprint))
}
