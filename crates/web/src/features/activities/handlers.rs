use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database, dto::stats::ActivityFeedParams, models::Activity, services::aggregation,
};

use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/api/activities",
    params(ActivityFeedParams),
    responses(
        (status = 200, description = "Most recent point-changing activities", body = Vec<Activity>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "activities"
)]
pub async fn list_recent_activities(
    State(db): State<Database>,
    Query(params): Query<ActivityFeedParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let activities = aggregation::get_recent_activities(db.repo(), params.limit).await?;

    Ok(Json(activities).into_response())
}
