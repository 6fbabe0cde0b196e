use std::sync::Arc;

use actionfeed_db::store::ActionStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Action record storage.
    pub store: Arc<dyn ActionStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
