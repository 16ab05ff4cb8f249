use std::sync::Arc;

use projectdesk_core::clock::{Clock, SystemClock};
use projectdesk_store::ProjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The authoritative project collection.
    pub store: Arc<ProjectStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state from configuration using the system clock, seeding the
    /// store with demo projects when `config.seed_demo_data` is set.
    pub fn from_config(config: ServerConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: ServerConfig, clock: Arc<dyn Clock>) -> Self {
        let store = if config.seed_demo_data {
            ProjectStore::with_seed_data(clock)
        } else {
            ProjectStore::new(clock)
        };
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
