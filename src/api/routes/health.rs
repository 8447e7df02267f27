//! Health Routes
//!
//! Health check endpoints for monitoring.
//!
//! - GET /health/live - Liveness check (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::page::PageSource;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Reports `degraded` while only the built-in fallback page can be served.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (source, _) = state.page.current().await;

    let (status, page) = match source {
        PageSource::Custom => ("healthy", "custom"),
        PageSource::Static => ("healthy", "static"),
        PageSource::Fallback => ("degraded", "fallback"),
    };

    Json(HealthResponse {
        status: status.to_string(),
        page: page.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
