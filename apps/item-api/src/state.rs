//! Application state management.
//!
//! The state is built once at start-up and handed to the route builders.

use sea_orm::DatabaseConnection;

/// Shared application state.
///
/// Cloning is cheap: the connection is a handle on a shared pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Process-wide connection pool
    pub db: DatabaseConnection,
}
