use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::category::{CategoryResponse, CreateCategoryRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 303, description = "A category with the same name is already registered")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(db): State<Database>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = services::create_category(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List all categories successfully", body = Vec<CategoryResponse>)
    ),
    tag = "categories"
)]
pub async fn list_categories(State(db): State<Database>) -> Result<Response, WebError> {
    let categories = services::list_categories(db.pool()).await?;

    let response: Vec<CategoryResponse> = categories
        .into_iter()
        .map(CategoryResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let category = services::get_category(db.pool(), id).await?;

    Ok(Json(CategoryResponse::from(category)).into_response())
}
