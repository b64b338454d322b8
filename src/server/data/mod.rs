//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models. Every
//! repository is generic over `ConnectionTrait`, so services can run the same queries on
//! the pool or inside a transaction.

pub mod auth_token;
pub mod category;
pub mod dish;
pub mod order;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
