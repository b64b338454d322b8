//! Request guards applied by controllers before touching a service.

pub mod auth;

#[cfg(test)]
mod test;
