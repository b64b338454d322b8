//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from request
//! DTOs and carry already validated values into the service layer.

pub mod category;
pub mod dish;
pub mod order;
pub mod review;
pub mod user;
