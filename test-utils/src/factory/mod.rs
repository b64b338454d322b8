//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they depend on, and
//! `helpers` offers shortcuts that create a whole dependency chain at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let category = factory::category::create_category(&db).await?;
//!
//!     // Create with all dependencies
//!     let (category, dish) = factory::helpers::create_dish_with_category(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let dish = factory::dish::DishFactory::new(&db, category.id)
//!     .name("Diavola")
//!     .price(Decimal::new(1450, 2))
//!     .tags(Some(DishTag::Spicy))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `auth_token` - Create bearer tokens bound to a user
//! - `category` - Create category entities
//! - `dish` - Create dish entities
//! - `order` - Create orders together with their line items
//! - `review` - Create review entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod auth_token;
pub mod category;
pub mod dish;
pub mod helpers;
pub mod order;
pub mod review;
pub mod user;

pub use auth_token::create_token;
pub use category::create_category;
pub use dish::create_dish;
pub use order::create_order;
pub use review::create_review;
pub use user::{create_staff_user, create_user};
