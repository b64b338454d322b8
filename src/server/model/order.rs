//! Order domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::OrderStatus;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::{
    model::order::{CreateOrderDto, OrderDto, OrderItemDto, OrderStatusDto},
    server::{
        error::AppError,
        model::user::User,
        util::{
            money::to_cents,
            parse::{coerce_id, coerce_integer},
        },
    },
};

pub const VALID_STATUSES: &str = "NEW, IN_PROGRESS, COMPLETED";

/// Largest quantity of one dish in a single order, after repeated entries are merged.
pub const MAX_LINE_QUANTITY: i32 = 1000;

/// Largest total the `order.sums` column can hold.
pub const MAX_ORDER_TOTAL: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

/// Parses a status code. Matching is exact.
pub fn parse_status(value: &str) -> Option<OrderStatus> {
    match value {
        "NEW" => Some(OrderStatus::New),
        "IN_PROGRESS" => Some(OrderStatus::InProgress),
        "COMPLETED" => Some(OrderStatus::Completed),
        _ => None,
    }
}

pub fn status_into_dto(status: OrderStatus) -> OrderStatusDto {
    match status {
        OrderStatus::New => OrderStatusDto::New,
        OrderStatus::InProgress => OrderStatusDto::InProgress,
        OrderStatus::Completed => OrderStatusDto::Completed,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub dish_id: i32,
    pub dish_name: String,
    pub quantity: i32,
    /// Dish price when the order was placed.
    pub price: Decimal,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model, dish: entity::dish::Model) -> Self {
        Self {
            dish_id: entity.dish_id,
            dish_name: dish.name,
            quantity: entity.quantity,
            price: entity.price,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            dish: self.dish_id,
            dish_name: self.dish_name,
            quantity: self.quantity,
            price: to_cents(self.price),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user: Option<User>,
    pub date: DateTime<Utc>,
    pub sums: Decimal,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn from_entity(
        entity: entity::order::Model,
        user: Option<entity::user::Model>,
        items: Vec<OrderItem>,
    ) -> Self {
        Self {
            id: entity.id,
            user: user.map(User::from_entity),
            date: entity.date,
            sums: entity.sums,
            status: entity.status,
            items,
        }
    }

    /// Whether `viewer` may read or delete this order.
    pub fn visible_to(&self, viewer: &User) -> bool {
        viewer.is_staff || self.user.as_ref().is_some_and(|u| u.id == viewer.id)
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user: self.user.as_ref().map(|u| u.id),
            user_info: self.user.map(User::into_dto),
            date: self.date,
            sums: to_cents(self.sums),
            status: status_into_dto(self.status),
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
        }
    }
}

/// One requested line after coercion. The dish may still turn out not to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub dish_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub user_id: Option<i32>,
    pub lines: Vec<OrderLine>,
}

impl CreateOrderParams {
    /// Normalizes an order submission.
    ///
    /// `items` must be a non-empty JSON array. Entries without an integer `dish_id`
    /// (or `dish`) are dropped, quantities below 1 or unreadable become 1, and repeated
    /// dishes are merged into one line with summed quantities, keeping first-seen order.
    ///
    /// # Returns
    /// - `Ok(CreateOrderParams)` - Normalized lines, possibly empty
    /// - `Err(AppError::Validation)` - `items` missing, not a list, or empty, or a merged
    ///   quantity above `MAX_LINE_QUANTITY`
    pub fn from_dto(user_id: Option<i32>, dto: CreateOrderDto) -> Result<Self, AppError> {
        let entries = match dto.items {
            Some(Value::Array(entries)) if !entries.is_empty() => entries,
            Some(Value::Array(_)) => {
                return Err(AppError::Validation(
                    "Order must contain at least one item".to_string(),
                ))
            }
            Some(_) => {
                return Err(AppError::Validation(
                    "Field 'items' must be a list".to_string(),
                ))
            }
            None => {
                return Err(AppError::Validation(
                    "Field 'items' is required".to_string(),
                ))
            }
        };

        let mut lines: Vec<OrderLine> = Vec::new();

        for entry in &entries {
            let Some(dish_id) = entry
                .get("dish_id")
                .or_else(|| entry.get("dish"))
                .and_then(coerce_id)
            else {
                continue;
            };

            let quantity = entry
                .get("quantity")
                .and_then(coerce_integer)
                .unwrap_or(1)
                .clamp(1, i32::MAX as i64) as i32;

            match lines.iter_mut().find(|l| l.dish_id == dish_id) {
                Some(line) => line.quantity = line.quantity.saturating_add(quantity),
                None => lines.push(OrderLine { dish_id, quantity }),
            }
        }

        if let Some(line) = lines.iter().find(|l| l.quantity > MAX_LINE_QUANTITY) {
            return Err(AppError::Validation(format!(
                "Quantity for dish {} may not exceed {}",
                line.dish_id, MAX_LINE_QUANTITY
            )));
        }

        Ok(Self { user_id, lines })
    }
}
