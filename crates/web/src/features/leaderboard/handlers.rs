use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::class::LeaderboardEntry, services::aggregation};

use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Classes ranked by green points", body = Vec<LeaderboardEntry>)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(State(db): State<Database>) -> Result<Response, WebError> {
    let leaderboard = aggregation::get_leaderboard(db.repo()).await?;

    Ok(Json(leaderboard).into_response())
}
