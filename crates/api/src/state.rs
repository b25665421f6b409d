use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Lead and booking-draft store.
    pub pool: alps_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Event bus for `lead.created` and friends.
    pub event_bus: Arc<alps_events::EventBus>,
}
