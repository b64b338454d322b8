//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the business
//! rules, convert storage errors into `AppError` variants the client can act on, and own
//! the transaction boundary: every write runs inside one transaction that is committed only
//! when all of its steps succeed.

pub mod auth;
pub mod category;
pub mod dish;
pub mod order;
pub mod review;

#[cfg(test)]
mod test;
