use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderDto, UpdateOrderStatusDto},
    },
    server::{
        error::AppError,
        extract::ApiJson,
        middleware::auth::{AuthGuard, Permission},
        model::order::{CreateOrderParams, Order},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// List orders.
///
/// Staff see every order, other users their own, anonymous callers an empty list.
///
/// # Access Control
/// - Public, result depends on the caller
///
/// # Returns
/// - `200 OK` - Orders newest first
/// - `401 Unauthorized` - Token present but invalid
#[utoipa::path(
    get,
    path = "/api/orders/",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Orders visible to the caller", body = Vec<OrderDto>),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &headers).optional().await?;

    let orders = OrderService::new(&state.db).list(viewer.as_ref()).await?;

    let dtos: Vec<OrderDto> = orders.into_iter().map(Order::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Place an order.
///
/// Items referencing unknown dishes are dropped, quantities below 1 are raised to 1 and
/// every line snapshots the dish's current price.
///
/// # Access Control
/// - Authenticated, or public when anonymous orders are enabled
///
/// # Returns
/// - `201 Created` - The order with its lines and total
/// - `400 Bad Request` - `items` missing, not a list, or empty
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/orders/",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order created", body = OrderDto),
        (status = 400, description = "Invalid items", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &headers);
    let user = if state.allow_anonymous_orders {
        guard.optional().await?
    } else {
        Some(guard.require(&[]).await?)
    };

    let params = CreateOrderParams::from_dto(user.map(|u| u.id), payload)?;

    let order = OrderService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Get one order.
///
/// # Access Control
/// - Owner or staff; anyone else gets 404
///
/// # Returns
/// - `200 OK` - The order
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No such order visible to the caller
#[utoipa::path(
    get,
    path = "/api/orders/{id}/",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order", body = OrderDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let order = OrderService::new(&state.db).get(id, &user).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Delete an order and its lines.
///
/// # Access Control
/// - Owner or staff; anyone else gets 404
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No such order visible to the caller
#[utoipa::path(
    delete,
    path = "/api/orders/{id}/",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    OrderService::new(&state.db).delete(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Set the status of an order.
///
/// Accepts NEW, IN_PROGRESS or COMPLETED in any sequence. Only the status is written.
///
/// # Access Control
/// - `Admin` - Only staff can change order status
///
/// # Returns
/// - `200 OK` - The updated order
/// - `400 Bad Request` - Status missing or not one of the valid values
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not staff
/// - `404 Not Found` - No such order
#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status/",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Status updated", body = OrderDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let order = OrderService::new(&state.db)
        .update_status(id, payload.status.as_ref().and_then(|s| s.as_str()))
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
