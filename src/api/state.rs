//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::ServerConfig;
use crate::page::PageStore;
use crate::websocket::{ConnectionHub, HubConfig};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// WebSocket connection hub
    pub hub: Arc<ConnectionHub>,
    /// Page served at `/`
    pub page: Arc<PageStore>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state with a default hub and a page store over `config.static_dir`
    pub fn new(config: ServerConfig) -> Self {
        Self::with_hub_config(config, HubConfig::default())
    }

    /// Create state with custom hub limits
    pub fn with_hub_config(config: ServerConfig, hub_config: HubConfig) -> Self {
        let page = PageStore::new(&config.static_dir);
        Self::with_parts(config, ConnectionHub::new(hub_config), page)
    }

    /// Create state from already built parts
    pub fn with_parts(config: ServerConfig, hub: ConnectionHub, page: PageStore) -> Self {
        Self {
            hub: Arc::new(hub),
            page: Arc::new(page),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
