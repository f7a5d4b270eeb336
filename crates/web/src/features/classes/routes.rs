use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_class, get_class, list_classes};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_classes).post(create_class))
        .route("/:class_id", get(get_class))
}
