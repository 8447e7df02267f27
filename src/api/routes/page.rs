//! Page Routes
//!
//! - GET / - The current page
//! - PUT /api/v1/page - Replace the page (body is HTML)
//! - DELETE /api/v1/page - Revert to the built front end

use axum::{extract::State, http::StatusCode, response::Html, Json};
use std::sync::Arc;

use crate::api::dto::PageResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let (source, html) = state.page.current().await;
    tracing::trace!(?source, "Serving page");
    Html(html)
}

/// PUT /api/v1/page
pub async fn set_page(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<Json<PageResponse>> {
    if body.trim().is_empty() {
        return Err(ApiError::Validation("Page body must not be empty".to_string()));
    }

    let bytes = body.len();
    state.page.set(body).await;
    tracing::info!(bytes, "Page replaced");

    Ok(Json(PageResponse {
        status: "ok".to_string(),
        bytes,
    }))
}

/// DELETE /api/v1/page
pub async fn reset_page(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.page.reset().await {
        tracing::info!("Custom page removed");
    }
    StatusCode::NO_CONTENT
}
