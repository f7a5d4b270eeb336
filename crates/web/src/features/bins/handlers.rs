use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{bin_report::RecordBinReportRequest, common::DateRangeParams},
    models::BinReport,
    services::recording,
};

use crate::error::WebError;

#[utoipa::path(
    post,
    path = "/api/bins/report",
    request_body = RecordBinReportRequest,
    responses(
        (status = 201, description = "Bin report recorded", body = BinReport),
        (status = 400, description = "Unknown status or missing location")
    ),
    tag = "bins"
)]
pub async fn report_bin(
    State(db): State<Database>,
    Json(req): Json<RecordBinReportRequest>,
) -> Result<Response, WebError> {
    let report = recording::record_bin_report(db.repo(), &req).await?;

    Ok((StatusCode::CREATED, Json(report)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/bins",
    params(DateRangeParams),
    responses(
        (status = 200, description = "Bin reports, newest first", body = Vec<BinReport>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "bins"
)]
pub async fn list_bin_reports(
    State(db): State<Database>,
    Query(range): Query<DateRangeParams>,
) -> Result<Response, WebError> {
    range.validate().map_err(WebError::BadRequest)?;

    let reports = recording::list_bin_reports(db.repo(), &range).await?;

    Ok(Json(reports).into_response())
}
