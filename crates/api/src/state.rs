use std::sync::Arc;

use questlog_core::clock::Clock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: questlog_db::DbPool,
    /// Server configuration (plan policy, JWT secret, CORS).
    pub config: Arc<ServerConfig>,
    /// Time source; injected so tests can simulate day transitions.
    pub clock: Arc<dyn Clock>,
}
