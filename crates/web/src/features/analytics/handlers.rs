use std::collections::BTreeMap;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, services::aggregation};

use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/api/analytics/waste-trends",
    responses(
        (status = 200, description = "Grams of waste per class grade", body = BTreeMap<String, f64>)
    ),
    tag = "analytics"
)]
pub async fn get_waste_trends(State(db): State<Database>) -> Result<Response, WebError> {
    let trends = aggregation::get_waste_trends_by_grade(db.repo()).await?;

    Ok(Json(trends).into_response())
}

#[utoipa::path(
    get,
    path = "/api/analytics/carbon-footprint",
    responses(
        (status = 200, description = "Grams of CO2 equivalent per waste type", body = BTreeMap<String, f64>)
    ),
    tag = "analytics"
)]
pub async fn get_carbon_footprint(State(db): State<Database>) -> Result<Response, WebError> {
    let footprint = aggregation::get_carbon_by_category(db.repo()).await?;

    Ok(Json(footprint).into_response())
}
