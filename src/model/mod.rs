//! Request and response payloads exchanged with API clients.

pub mod api;
pub mod category;
pub mod dish;
pub mod order;
pub mod review;
pub mod user;
