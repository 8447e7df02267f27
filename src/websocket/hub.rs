//! WebSocket Connection Hub
//!
//! Tracks every connected page, fans display messages out to all of them,
//! and republishes what pages send back on a broadcast channel.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{broadcast, mpsc, RwLock};
use uuid::Uuid;

use super::messages::{ClientMessage, ServerMessage};

/// Unique identifier for a WebSocket connection
pub type ConnectionId = String;

/// Manages all WebSocket connections
pub struct ConnectionHub {
    /// Active connections: ConnectionId → ConnectionHandle
    connections: Arc<RwLock<HashMap<ConnectionId, ConnectionHandle>>>,
    /// Messages received from pages
    inbound_tx: broadcast::Sender<ClientMessage>,
    inbound_count: AtomicU64,
    /// Most recent display payload
    last_display: RwLock<Option<String>>,
    config: HubConfig,
}

/// Configuration for the connection hub
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Maximum number of concurrent connections
    pub max_connections: usize,
    /// Capacity of the inbound broadcast channel. Zero is treated as one.
    pub inbound_capacity: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            max_connections: 1000,
            inbound_capacity: 256,
        }
    }
}

impl From<&crate::config::HubSettings> for HubConfig {
    fn from(settings: &crate::config::HubSettings) -> Self {
        Self {
            max_connections: settings.max_connections,
            inbound_capacity: settings.inbound_capacity,
        }
    }
}

/// Handle for sending messages to a specific connection
pub struct ConnectionHandle {
    pub sender: mpsc::UnboundedSender<ServerMessage>,
}

impl ConnectionHub {
    /// Create a new connection hub
    pub fn new(config: HubConfig) -> Self {
        let (inbound_tx, _) = broadcast::channel(config.inbound_capacity.max(1));

        Self {
            connections: Arc::new(RwLock::new(HashMap::new())),
            inbound_tx,
            inbound_count: AtomicU64::new(0),
            last_display: RwLock::new(None),
            config,
        }
    }

    /// Register a new WebSocket connection
    ///
    /// Returns the connection ID on success, or an error if the connection
    /// limit has been reached.
    pub async fn register(
        &self,
        sender: mpsc::UnboundedSender<ServerMessage>,
    ) -> Result<ConnectionId, HubError> {
        let mut connections = self.connections.write().await;
        if connections.len() >= self.config.max_connections {
            return Err(HubError::TooManyConnections {
                limit: self.config.max_connections,
            });
        }

        let id = Uuid::new_v4().to_string();
        connections.insert(id.clone(), ConnectionHandle { sender });

        tracing::info!(connection_id = %id, "WebSocket connected");
        Ok(id)
    }

    /// Unregister a connection
    pub async fn unregister(&self, id: &str) {
        if self.connections.write().await.remove(id).is_some() {
            tracing::info!(connection_id = %id, "WebSocket disconnected");
        }
    }

    /// Send a message to every connection
    ///
    /// Returns how many connections accepted it. Connections whose send
    /// task has already ended are skipped.
    pub async fn broadcast(&self, message: ServerMessage) -> usize {
        let ServerMessage::Display(payload) = &message;
        *self.last_display.write().await = Some(payload.clone());

        let connections = self.connections.read().await;
        let delivered = connections
            .values()
            .filter(|handle| handle.sender.send(message.clone()).is_ok())
            .count();

        tracing::debug!(
            connections = connections.len(),
            delivered,
            "Broadcast display message"
        );
        delivered
    }

    /// Send a message directly to a specific connection
    pub async fn send_to(&self, id: &str, message: ServerMessage) -> Result<(), HubError> {
        let connections = self.connections.read().await;
        let handle = connections.get(id).ok_or(HubError::ConnectionNotFound)?;

        handle
            .sender
            .send(message)
            .map_err(|_| HubError::SendFailed)
    }

    /// Record a message received from a page and hand it to listeners
    pub fn publish_inbound(&self, message: ClientMessage) {
        self.inbound_count.fetch_add(1, Ordering::Relaxed);

        if message.is_button_click() {
            tracing::info!(connection_id = %message.connection_id, "Page button was clicked");
        } else {
            tracing::info!(
                connection_id = %message.connection_id,
                text = %message.text,
                "Received page message"
            );
        }

        // No listeners is fine
        let _ = self.inbound_tx.send(message);
    }

    /// Get a receiver for messages sent by pages
    pub fn subscribe_inbound(&self) -> broadcast::Receiver<ClientMessage> {
        self.inbound_tx.subscribe()
    }

    /// Get the current connection count
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Ids of every live connection, sorted
    pub async fn connection_ids(&self) -> Vec<ConnectionId> {
        let mut ids: Vec<_> = self.connections.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Total messages received from pages since start
    pub fn inbound_count(&self) -> u64 {
        self.inbound_count.load(Ordering::Relaxed)
    }

    /// The last payload broadcast, if any
    pub async fn last_display(&self) -> Option<String> {
        self.last_display.read().await.clone()
    }
}

/// Errors that can occur in the connection hub
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Too many connections (limit: {limit})")]
    TooManyConnections { limit: usize },

    #[error("Connection not found")]
    ConnectionNotFound,

    #[error("Failed to send message")]
    SendFailed,
}
