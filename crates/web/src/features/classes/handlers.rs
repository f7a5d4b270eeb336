use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database, dto::class::CreateClassRequest, models::Class, services::recording,
};
use uuid::Uuid;

use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "All classes ordered by grade and section", body = Vec<Class>)
    ),
    tag = "classes"
)]
pub async fn list_classes(State(db): State<Database>) -> Result<Response, WebError> {
    let classes = recording::list_classes(db.repo()).await?;

    Ok(Json(classes).into_response())
}

#[utoipa::path(
    get,
    path = "/api/classes/{class_id}",
    params(
        ("class_id" = Uuid, Path, description = "Class identifier")
    ),
    responses(
        (status = 200, description = "Class found", body = Class),
        (status = 404, description = "Class not found")
    ),
    tag = "classes"
)]
pub async fn get_class(
    State(db): State<Database>,
    Path(class_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let class = recording::get_class(db.repo(), class_id).await?;

    Ok(Json(class).into_response())
}

#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassRequest,
    responses(
        (status = 201, description = "Class created successfully", body = Class),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A class with this name already exists")
    ),
    tag = "classes"
)]
pub async fn create_class(
    State(db): State<Database>,
    Json(req): Json<CreateClassRequest>,
) -> Result<Response, WebError> {
    let class = recording::create_class(db.repo(), &req).await?;

    Ok((StatusCode::CREATED, Json(class)).into_response())
}
