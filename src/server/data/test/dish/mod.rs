use crate::server::{
    data::dish::DishRepository,
    model::dish::{DishFilter, DishOrdering},
};
use entity::sea_orm_active_enums::DishTag;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, dish::DishFactory},
};

mod find_by_id;
