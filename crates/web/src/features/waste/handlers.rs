use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::waste::{RecordWasteRequest, WasteEntryFilter},
    models::WasteEntry,
    services::recording,
};

use crate::error::WebError;

#[utoipa::path(
    post,
    path = "/api/waste/report",
    request_body = RecordWasteRequest,
    responses(
        (status = 201, description = "Waste entry recorded", body = WasteEntry),
        (status = 400, description = "Unknown waste type or invalid quantity")
    ),
    tag = "waste"
)]
pub async fn report_waste(
    State(db): State<Database>,
    Json(req): Json<RecordWasteRequest>,
) -> Result<Response, WebError> {
    let entry = recording::record_waste(db.repo(), &req).await?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/waste",
    params(WasteEntryFilter),
    responses(
        (status = 200, description = "Waste entries, newest first", body = Vec<WasteEntry>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "waste"
)]
pub async fn list_waste_entries(
    State(db): State<Database>,
    Query(filter): Query<WasteEntryFilter>,
) -> Result<Response, WebError> {
    filter.range().validate().map_err(WebError::BadRequest)?;

    let entries = recording::list_waste_entries(db.repo(), &filter).await?;

    Ok(Json(entries).into_response())
}
