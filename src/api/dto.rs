//! Data Transfer Objects
//!
//! Response types for the API endpoints. Request bodies for the page and
//! display endpoints are raw text, not JSON.

use serde::{Deserialize, Serialize};

/// Display broadcast response
#[derive(Debug, Serialize, Deserialize)]
pub struct DisplayResponse {
    /// Number of connected pages the message was queued for
    pub delivered: usize,
}

/// Page update response
#[derive(Debug, Serialize, Deserialize)]
pub struct PageResponse {
    /// Status: "ok"
    pub status: String,
    /// Size of the stored page in bytes
    pub bytes: usize,
}

/// Server status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Connected pages
    pub connections: usize,
    /// Ids of the connected pages, for targeted display messages
    #[serde(default)]
    pub connection_ids: Vec<String>,
    /// Messages received from pages since start
    pub inbound_messages: u64,
    /// Last payload sent to the display region
    pub last_display: Option<String>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Where `/` is served from: custom, static, fallback
    pub page: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
