use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CreateCategoryDto},
    },
    server::{
        error::AppError,
        extract::ApiJson,
        middleware::auth::{AuthGuard, Permission},
        model::category::{Category, CreateCategoryParams},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List all categories alphabetically.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Every category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories/",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(Category::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a category.
///
/// # Access Control
/// - `Admin` - Only staff can create categories
///
/// # Returns
/// - `201 Created` - The new category
/// - `400 Bad Request` - Blank or oversized name
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not staff
/// - `409 Conflict` - Name already taken
#[utoipa::path(
    post,
    path = "/api/categories/",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 409, description = "Category already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateCategoryParams::from_dto(payload)?;

    let category = CategoryService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Delete a category and every dish in it.
///
/// # Access Control
/// - `Admin` - Only staff can delete categories
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not staff
/// - `404 Not Found` - No such category
#[utoipa::path(
    delete,
    path = "/api/categories/{id}/",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
