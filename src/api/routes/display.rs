//! Display Routes
//!
//! - POST /api/v1/display - Push a payload to every connected page
//! - POST /api/v1/display/:connection_id - Push a payload to one page

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::DisplayResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::websocket::ServerMessage;

/// POST /api/v1/display
///
/// The body is sent verbatim; pages decide how to render it. An empty body
/// clears the display region.
pub async fn push_display(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<Json<DisplayResponse>> {
    let delivered = state.hub.broadcast(ServerMessage::Display(body)).await;

    if delivered == 0 {
        tracing::debug!("Display message sent with no pages connected");
    }

    Ok(Json(DisplayResponse { delivered }))
}

/// POST /api/v1/display/:connection_id
///
/// Same body rules as the broadcast, for a single page. Ids come from
/// `GET /api/v1/status`. Does not change `last_display`.
pub async fn push_display_to(
    State(state): State<Arc<AppState>>,
    Path(connection_id): Path<String>,
    body: String,
) -> ApiResult<Json<DisplayResponse>> {
    state
        .hub
        .send_to(&connection_id, ServerMessage::Display(body))
        .await?;

    Ok(Json(DisplayResponse { delivered: 1 }))
}
