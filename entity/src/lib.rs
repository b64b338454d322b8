//! SeaORM entity definitions for the menu database.

pub mod prelude;

pub mod auth_token;
pub mod category;
pub mod dish;
pub mod order;
pub mod order_item;
pub mod review;
pub mod sea_orm_active_enums;
pub mod user;
