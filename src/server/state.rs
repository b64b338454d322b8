//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through Axum's
//! state extraction. `DatabaseConnection` is a pool handle, so clones share connections.

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Whether `POST /api/orders/` accepts callers without a token.
    pub allow_anonymous_orders: bool,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `allow_anonymous_orders` - Order creation auth toggle from configuration
    pub fn new(db: DatabaseConnection, allow_anonymous_orders: bool) -> Self {
        Self {
            db,
            allow_anonymous_orders,
        }
    }
}
