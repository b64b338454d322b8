//! Order factory that inserts an order together with its line items.

use chrono::Utc;
use entity::sea_orm_active_enums::OrderStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating orders with line items.
///
/// `sums` is always derived from the configured items so factory-built orders satisfy
/// the same total invariant as service-built ones.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db)
///     .user_id(Some(user.id))
///     .status(OrderStatus::Completed)
///     .item(dish.id, 2, dish.price)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    status: OrderStatus,
    items: Vec<(i32, i32, Decimal)>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new anonymous order factory with status `NEW` and no items.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: None,
            status: OrderStatus::New,
            items: Vec::new(),
        }
    }

    pub fn user_id(mut self, user_id: Option<i32>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds a line for `dish_id` with the given quantity and frozen price.
    pub fn item(mut self, dish_id: i32, quantity: i32, price: Decimal) -> Self {
        self.items.push((dish_id, quantity, price));
        self
    }

    /// Builds and inserts the order and its items.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order with `sums` matching its items
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let sums = self
            .items
            .iter()
            .map(|(_, quantity, price)| *price * Decimal::from(*quantity))
            .sum();

        let order = entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            date: ActiveValue::Set(Utc::now()),
            sums: ActiveValue::Set(sums),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (dish_id, quantity, price) in self.items {
            entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                dish_id: ActiveValue::Set(dish_id),
                quantity: ActiveValue::Set(quantity),
                price: ActiveValue::Set(price),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(order)
    }
}

/// Creates an empty `NEW` order for the given user.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: Option<i32>,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db).user_id(user_id).build().await
}
