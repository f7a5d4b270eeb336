use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::stats::DashboardStats, services::aggregation};

use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Today's waste totals and green points", body = DashboardStats)
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard_stats(State(db): State<Database>) -> Result<Response, WebError> {
    let stats = aggregation::get_dashboard_stats(db.repo()).await?;

    Ok(Json(stats).into_response())
}
