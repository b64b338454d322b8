use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, ReviewDto},
    },
    server::{
        error::AppError,
        extract::ApiJson,
        middleware::auth::AuthGuard,
        model::review::{CreateReviewParams, Review},
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Review a dish.
///
/// The caller must own a completed order containing the dish and may review each dish
/// once. The review is always attributed to the caller.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `201 Created` - The stored review
/// - `400 Bad Request` - Rating out of range, dish never purchased, or already reviewed
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No such dish
#[utoipa::path(
    post,
    path = "/api/reviews/",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Review not allowed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = CreateReviewParams::from_dto(user.id, payload)?;

    let review = ReviewService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

/// List the reviews of a dish, newest first.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Reviews
/// - `404 Not Found` - No such dish
#[utoipa::path(
    get,
    path = "/api/dishes/{id}/reviews/",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 200, description = "Reviews of the dish", body = Vec<ReviewDto>),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dish_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db).list_for_dish(id).await?;

    let dtos: Vec<ReviewDto> = reviews.into_iter().map(Review::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
