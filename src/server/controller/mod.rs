//! HTTP request handlers.
//!
//! Handlers apply the auth gate, convert request DTOs into validated parameters, call a
//! service and convert the result back into a DTO.

pub mod auth;
pub mod category;
pub mod dish;
pub mod order;
pub mod review;

#[cfg(test)]
mod test;
