//! Menu API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the menu
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Entity factories that insert rows with sensible defaults
//! - **fixture**: In-memory entity models that never touch the database
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_dish_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (category, dish) = factory::helpers::create_dish_with_category(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
