use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        dish::{DishDetailDto, DishListItemDto, DishPayloadDto, DishQueryDto, PatchDishDto},
    },
    server::{
        error::AppError,
        extract::ApiJson,
        middleware::auth::{AuthGuard, Permission},
        model::dish::{Dish, DishFilter, DishParams, PatchDishParams},
        service::dish::DishService,
        state::AppState,
    },
};

/// Tag for grouping dish endpoints in OpenAPI documentation
pub static DISH_TAG: &str = "dish";

/// List available dishes.
///
/// Filters combine with AND. A `max_price` that is not a number is ignored rather than
/// rejected, and unknown `ordering` values fall back to ordering by id.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `category`, `max_price`, `tags` and `ordering` filters
///
/// # Returns
/// - `200 OK` - Abbreviated dishes without description or reviews
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dishes/",
    tag = DISH_TAG,
    params(DishQueryDto),
    responses(
        (status = 200, description = "Available dishes", body = Vec<DishListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dishes(
    State(state): State<AppState>,
    Query(query): Query<DishQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let filter = DishFilter::from_query(query);

    let dishes = DishService::new(&state.db).list(filter).await?;

    let dtos: Vec<DishListItemDto> = dishes.into_iter().map(Dish::into_list_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an available dish with its description and reviews.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Full dish with nested category and reviews, newest first
/// - `404 Not Found` - Unknown or unavailable dish
#[utoipa::path(
    get,
    path = "/api/dishes/{id}/",
    tag = DISH_TAG,
    params(
        ("id" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 200, description = "Dish detail", body = DishDetailDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dish(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = DishService::new(&state.db).get_detail(id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Create a dish.
///
/// A `category` given by name is created when it does not exist yet; one given by id must
/// exist.
///
/// # Access Control
/// - `Admin` - Only staff can manage the menu
///
/// # Returns
/// - `201 Created` - The new dish
/// - `400 Bad Request` - Invalid field values
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not staff
/// - `404 Not Found` - Category id does not exist
/// - `409 Conflict` - Dish name already taken
#[utoipa::path(
    post,
    path = "/api/dishes/",
    tag = DISH_TAG,
    request_body = DishPayloadDto,
    responses(
        (status = 201, description = "Dish created", body = DishListItemDto),
        (status = 400, description = "Invalid dish data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Dish name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<DishPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = DishParams::from_dto(payload)?;

    let dish = DishService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(dish.into_list_dto())))
}

/// Replace every field of a dish.
///
/// Works on unavailable dishes too.
///
/// # Access Control
/// - `Admin` - Only staff can manage the menu
///
/// # Returns
/// - `200 OK` - The updated dish
/// - `400 Bad Request` - Invalid field values
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not staff
/// - `404 Not Found` - Unknown dish or category id
/// - `409 Conflict` - Dish name already taken
#[utoipa::path(
    put,
    path = "/api/dishes/{id}/",
    tag = DISH_TAG,
    params(
        ("id" = i32, Path, description = "Dish ID")
    ),
    request_body = DishPayloadDto,
    responses(
        (status = 200, description = "Dish updated", body = DishListItemDto),
        (status = 400, description = "Invalid dish data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Dish or category not found", body = ErrorDto),
        (status = 409, description = "Dish name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<DishPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = DishParams::from_dto(payload)?;

    let dish = DishService::new(&state.db).replace(id, params).await?;

    Ok((StatusCode::OK, Json(dish.into_list_dto())))
}

/// Update some fields of a dish.
///
/// # Access Control
/// - `Admin` - Only staff can manage the menu
///
/// # Returns
/// - `200 OK` - The updated dish
/// - `400 Bad Request` - Invalid field values
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not staff
/// - `404 Not Found` - Unknown dish or category id
/// - `409 Conflict` - Dish name already taken
#[utoipa::path(
    patch,
    path = "/api/dishes/{id}/",
    tag = DISH_TAG,
    params(
        ("id" = i32, Path, description = "Dish ID")
    ),
    request_body = PatchDishDto,
    responses(
        (status = 200, description = "Dish updated", body = DishListItemDto),
        (status = 400, description = "Invalid dish data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Dish or category not found", body = ErrorDto),
        (status = 409, description = "Dish name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<PatchDishDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = PatchDishParams::from_dto(payload)?;

    let dish = DishService::new(&state.db).patch(id, params).await?;

    Ok((StatusCode::OK, Json(dish.into_list_dto())))
}

/// Delete a dish.
///
/// # Access Control
/// - `Admin` - Only staff can manage the menu
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not staff
/// - `404 Not Found` - No such dish
#[utoipa::path(
    delete,
    path = "/api/dishes/{id}/",
    tag = DISH_TAG,
    params(
        ("id" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 204, description = "Dish deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    DishService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
