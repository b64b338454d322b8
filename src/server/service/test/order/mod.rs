use crate::server::{
    error::AppError,
    model::{
        order::{CreateOrderParams, OrderLine},
        user::User,
    },
    service::order::OrderService,
};
use entity::sea_orm_active_enums::OrderStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, dish::DishFactory, order::OrderFactory},
};

mod create;
mod delete;
mod update_status;

fn line(dish_id: i32, quantity: i32) -> OrderLine {
    OrderLine { dish_id, quantity }
}
