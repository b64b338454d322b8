use crate::server::data::order::OrderRepository;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::OrderStatus;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, order::OrderFactory},
};

mod has_completed_order_with_dish;
mod list;
