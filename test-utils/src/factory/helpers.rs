//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category and one available dish inside it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((category, dish))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_dish_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::dish::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let dish = crate::factory::dish::create_dish(db, category.id).await?;

    Ok((category, dish))
}

/// Creates a user with a completed order for the given dish.
///
/// This is the precondition for leaving a review on that dish.
///
/// # Arguments
/// - `db` - Database connection
/// - `dish` - Dish that the order should contain
///
/// # Returns
/// - `Ok((user, order))` - The purchasing user and their completed order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_completed_purchase(
    db: &DatabaseConnection,
    dish: &entity::dish::Model,
) -> Result<(entity::user::Model, entity::order::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let order = crate::factory::order::OrderFactory::new(db)
        .user_id(Some(user.id))
        .status(OrderStatus::Completed)
        .item(dish.id, 1, dish.price)
        .build()
        .await?;

    Ok((user, order))
}
