//! Order and order line data repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::OrderStatus;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::order::{Order, OrderItem};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an order with status NEW and a zero total.
    ///
    /// # Arguments
    /// - `user_id` - Owner, `None` for an anonymous order
    /// - `date` - Creation time, never changed afterwards
    pub async fn create(
        &self,
        user_id: Option<i32>,
        date: DateTime<Utc>,
    ) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            date: ActiveValue::Set(date),
            sums: ActiveValue::Set(Decimal::ZERO),
            status: ActiveValue::Set(OrderStatus::New),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Adds a line to an order.
    ///
    /// # Arguments
    /// - `price` - Unit price to freeze on the line
    ///
    /// # Returns
    /// - `Ok(Model)` - Created line
    /// - `Err(DbErr)` - Database error, including a unique violation when the order
    ///   already has a line for the dish
    pub async fn add_item(
        &self,
        order_id: i32,
        dish_id: i32,
        quantity: i32,
        price: Decimal,
    ) -> Result<entity::order_item::Model, DbErr> {
        entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            dish_id: ActiveValue::Set(dish_id),
            quantity: ActiveValue::Set(quantity),
            price: ActiveValue::Set(price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn set_sums(&self, order_id: i32, sums: Decimal) -> Result<(), DbErr> {
        entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::Sums, Expr::value(sums))
            .filter(entity::order::Column::Id.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Writes only the status column.
    ///
    /// # Returns
    /// - `Ok(true)` - Order updated
    /// - `Ok(false)` - No order with that id
    pub async fn set_status(&self, order_id: i32, status: OrderStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::Status, Expr::value(status))
            .filter(entity::order::Column::Id.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds an order with its owner and lines.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some((order, user)) = entity::prelude::Order::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut items = self.load_items(&[order.id]).await?;
        let items = items.remove(&order.id).unwrap_or_default();

        Ok(Some(Order::from_entity(order, user, items)))
    }

    /// Lists orders newest first.
    ///
    /// # Arguments
    /// - `user_id` - Restrict to this owner, or `None` for every order
    pub async fn list(&self, user_id: Option<i32>) -> Result<Vec<Order>, DbErr> {
        let mut query = entity::prelude::Order::find();
        if let Some(user_id) = user_id {
            query = query.filter(entity::order::Column::UserId.eq(user_id));
        }

        let rows = query
            .order_by_desc(entity::order::Column::Date)
            .order_by_desc(entity::order::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|(order, _)| order.id).collect();
        let mut items = self.load_items(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|(order, user)| {
                let order_items = items.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, user, order_items)
            })
            .collect())
    }

    /// Deletes an order and its lines.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::OrderItem::delete_many()
            .filter(entity::order_item::Column::OrderId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Order::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Whether `user_id` owns a COMPLETED order that contains `dish_id`.
    pub async fn has_completed_order_with_dish(
        &self,
        user_id: i32,
        dish_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::OrderItem::find()
            .inner_join(entity::prelude::Order)
            .filter(entity::order_item::Column::DishId.eq(dish_id))
            .filter(entity::order::Column::UserId.eq(user_id))
            .filter(entity::order::Column::Status.eq(OrderStatus::Completed))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Loads the lines of the given orders keyed by order id, each in insertion order.
    async fn load_items(&self, order_ids: &[i32]) -> Result<HashMap<i32, Vec<OrderItem>>, DbErr> {
        let mut items: HashMap<i32, Vec<OrderItem>> = HashMap::new();
        if order_ids.is_empty() {
            return Ok(items);
        }

        let rows = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids.iter().copied()))
            .order_by_asc(entity::order_item::Column::Id)
            .find_also_related(entity::prelude::Dish)
            .all(self.db)
            .await?;

        for (item, dish) in rows {
            let dish = dish.ok_or_else(|| {
                DbErr::RecordNotFound(format!("Dish {} of order line {} missing", item.dish_id, item.id))
            })?;
            items
                .entry(item.order_id)
                .or_default()
                .push(OrderItem::from_entity(item, dish));
        }

        Ok(items)
    }
}
