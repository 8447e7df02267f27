//! Status Routes
//!
//! - GET /api/v1/status - Connection and message counters

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::StatusResponse;
use crate::api::state::AppState;

/// GET /api/v1/status
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        connections: state.hub.connection_count().await,
        connection_ids: state.hub.connection_ids().await,
        inbound_messages: state.hub.inbound_count(),
        last_display: state.hub.last_display().await,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
