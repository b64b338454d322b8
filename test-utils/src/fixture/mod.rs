//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of entity to domain conversions and for DTO shaping tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let dish = fixture::dish::entity_builder().price(Decimal::new(1250, 2)).build();
//! ```

pub mod category;
pub mod dish;
pub mod review;
pub mod user;
