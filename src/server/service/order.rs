use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{dish::DishRepository, order::OrderRepository},
    error::AppError,
    model::{
        order::{parse_status, CreateOrderParams, Order, MAX_ORDER_TOTAL, VALID_STATUSES},
        user::User,
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order.
    ///
    /// Lines whose dish does not exist are dropped. Each remaining line freezes the dish's
    /// current price, and the order total is written before the transaction commits, so the
    /// stored total always equals the sum of its lines. A total above `MAX_ORDER_TOTAL`
    /// aborts the transaction. Availability is not checked.
    ///
    /// # Returns
    /// - `Ok(Order)` - The persisted order with its lines
    /// - `Err(AppError)` - Database failure, nothing is persisted
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;

        let dish_ids: Vec<i32> = params.lines.iter().map(|l| l.dish_id).collect();
        let prices: HashMap<i32, Decimal> = DishRepository::new(&txn)
            .get_by_ids(&dish_ids)
            .await?
            .into_iter()
            .map(|d| (d.id, d.price))
            .collect();

        let orders = OrderRepository::new(&txn);
        let order = orders.create(params.user_id, Utc::now()).await?;

        let mut total = Decimal::ZERO;
        for line in &params.lines {
            let Some(price) = prices.get(&line.dish_id).copied() else {
                tracing::debug!(
                    "Skipping unknown dish {} in order {}",
                    line.dish_id,
                    order.id
                );
                continue;
            };

            orders
                .add_item(order.id, line.dish_id, line.quantity, price)
                .await?;
            total += price * Decimal::from(line.quantity);
        }

        if total > MAX_ORDER_TOTAL {
            return Err(AppError::Validation(format!(
                "Order total may not exceed {}",
                MAX_ORDER_TOTAL
            )));
        }

        orders.set_sums(order.id, total).await?;

        let created = orders
            .find_by_id(order.id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Order {} vanished", order.id)))?;

        txn.commit().await?;

        tracing::info!(
            "Created order {} with {} line(s), total {}",
            created.id,
            created.items.len(),
            created.sums
        );

        Ok(created)
    }

    /// Lists orders visible to `viewer`, newest first.
    ///
    /// Anonymous callers get an empty list, staff see every order, everyone else sees
    /// their own.
    pub async fn list(&self, viewer: Option<&User>) -> Result<Vec<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        match viewer {
            None => Ok(Vec::new()),
            Some(user) if user.is_staff => Ok(repo.list(None).await?),
            Some(user) => Ok(repo.list(Some(user.id)).await?),
        }
    }

    /// Gets an order its owner or staff may see. Others get NotFound.
    pub async fn get(&self, id: i32, viewer: &User) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|order| order.visible_to(viewer))
            .ok_or_else(order_not_found)
    }

    /// Deletes an order its owner or staff may see
    pub async fn delete(&self, id: i32, viewer: &User) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let repo = OrderRepository::new(&txn);
        let visible = repo
            .find_by_id(id)
            .await?
            .is_some_and(|order| order.visible_to(viewer));
        if !visible {
            return Err(order_not_found());
        }

        repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!("Order {} deleted by user {}", id, viewer.id);

        Ok(())
    }

    /// Sets an order's status.
    ///
    /// Any of NEW, IN_PROGRESS, COMPLETED may follow any other. Only the status column is
    /// written.
    ///
    /// # Returns
    /// - `Ok(Order)` - The updated order
    /// - `Err(AppError::NotFound)` - No order with that id
    /// - `Err(AppError::Validation)` - Status missing or outside the valid set
    pub async fn update_status(&self, id: i32, status: Option<&str>) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(order_not_found());
        }

        let Some(status) = status.and_then(parse_status) else {
            return Err(AppError::Validation(format!(
                "A valid status is required. Valid values: {}",
                VALID_STATUSES
            )));
        };

        repo.set_status(id, status).await?;

        tracing::info!("Order {} status set to {:?}", id, status);

        repo.find_by_id(id).await?.ok_or_else(order_not_found)
    }
}

fn order_not_found() -> AppError {
    AppError::NotFound("Order not found".to_string())
}
