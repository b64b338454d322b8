use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatusDto {
    New,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub dish: i32,
    pub dish_name: String,
    pub quantity: i32,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub user: Option<i32>,
    pub user_info: Option<UserDto>,
    pub date: DateTime<Utc>,
    pub sums: Decimal,
    pub status: OrderStatusDto,
    pub items: Vec<OrderItemDto>,
}

/// Order submission.
///
/// `items` is kept as raw JSON: entries without a resolvable dish are skipped and
/// quantities are coerced rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderDto {
    #[serde(default)]
    #[schema(value_type = Option<Vec<CreateOrderItemDto>>)]
    pub items: Option<serde_json::Value>,
}

/// Documented shape of one `items` entry; `dish` is accepted as an alias of `dish_id`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderItemDto {
    pub dish_id: i32,
    pub quantity: i32,
}

/// Status change. Kept as raw JSON so that a non-string value gets the same error as an
/// unknown status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderStatusDto {
    #[serde(default)]
    #[schema(value_type = Option<OrderStatusDto>)]
    pub status: Option<serde_json::Value>,
}
