//! Webpanel HTTP API
//!
//! HTTP layer for Webpanel, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - The current page
//! - `GET /index.html` - Same as `/`
//! - `PUT /api/v1/page` - Replace the page (HTML body)
//! - `DELETE /api/v1/page` - Revert to the built front end
//!
//! ## Display
//! - `POST /api/v1/display` - Push a payload to every connected page
//! - `POST /api/v1/display/:connection_id` - Push a payload to one page
//!
//! ## Status
//! - `GET /api/v1/status` - Connection ids, inbound message count, last payload
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /ws` - Live display channel
//!
//! Anything else is served from the static directory holding the built
//! front end.
//!
//! # Example
//!
//! ```rust,no_run
//! use webpanel::api::{serve, AppState};
//! use webpanel::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(ServerConfig::default());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::websocket::websocket_handler;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/page",
            put(routes::page::set_page).delete(routes::page::reset_page),
        )
        .route("/display", post(routes::display::push_display))
        .route(
            "/display/:connection_id",
            post(routes::display::push_display_to),
        )
        .route("/status", get(routes::status::get_status));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let static_files = ServeDir::new(state.page.static_dir());
    let cors = cors_layer(&state.config.cors_origins);

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .route("/index.html", get(routes::page::index))
        .route("/ws", get(websocket_handler))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new().allow_origin(allowed)
    }
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Webpanel listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Webpanel shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::websocket::ServerMessage;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tokio::sync::mpsc;
    use tower::util::ServiceExt;

    fn create_test_state(static_dir: &std::path::Path) -> AppState {
        let config = ServerConfig {
            static_dir: static_dir.to_string_lossy().to_string(),
            ..Default::default()
        };
        AppState::new(config)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(create_test_state(dir.path()));

        let response = app
            .oneshot(Request::builder().uri("/health/live").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(create_test_state(dir.path()));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("\"page\":\"fallback\""));
    }

    #[tokio::test]
    async fn test_index_serves_fallback_page() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(create_test_state(dir.path()));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("class=\"btn\""));
        assert!(html.contains("id=\"button\""));
    }

    #[tokio::test]
    async fn test_static_files_are_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("style.css"), "body { color: red; }").unwrap();
        let app = build_router(create_test_state(dir.path()));

        let response = app
            .oneshot(Request::builder().uri("/style.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "body { color: red; }");
    }

    #[tokio::test]
    async fn test_set_and_reset_page() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<p>built</p>").unwrap();
        let app = build_router(create_test_state(dir.path()));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/page")
                    .body(Body::from("<h1>Sign in</h1>"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_string(response).await, "<h1>Sign in</h1>");

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_string(response).await, "<h1>Sign in</h1>");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/page")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_string(response).await, "<p>built</p>");

        let response = app
            .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_string(response).await, "<p>built</p>");
    }

    #[tokio::test]
    async fn test_empty_page_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(create_test_state(dir.path()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/page")
                    .body(Body::from("   "))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_display_reaches_connected_pages() {
        let dir = tempfile::tempdir().unwrap();
        let state = create_test_state(dir.path());
        let hub = Arc::clone(&state.hub);
        let (tx, mut rx) = mpsc::unbounded_channel();
        hub.register(tx).await.unwrap();

        let app = build_router(state);
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/display")
                    .body(Body::from("X"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"delivered":1}"#);
        assert_eq!(rx.try_recv().unwrap(), ServerMessage::Display("X".to_string()));

        let response = app
            .oneshot(Request::builder().uri("/api/v1/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status: dto::StatusResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(status.connections, 1);
        assert_eq!(status.connection_ids.len(), 1);
        assert_eq!(status.last_display.as_deref(), Some("X"));
        assert_eq!(status.inbound_messages, 0);
    }

    #[tokio::test]
    async fn test_display_to_one_page() {
        let dir = tempfile::tempdir().unwrap();
        let state = create_test_state(dir.path());
        let hub = Arc::clone(&state.hub);
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        let target = hub.register(tx1).await.unwrap();
        hub.register(tx2).await.unwrap();

        let app = build_router(state);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/v1/display/{}", target))
                    .body(Body::from("<b>you</b>"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"delivered":1}"#);
        assert_eq!(
            rx1.try_recv().unwrap(),
            ServerMessage::Display("<b>you</b>".to_string())
        );
        assert!(rx2.try_recv().is_err());
        assert_eq!(hub.last_display().await, None);
    }

    #[tokio::test]
    async fn test_display_to_unknown_page() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(create_test_state(dir.path()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/display/not-a-connection")
                    .body(Body::from("X"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("CONNECTION_NOT_FOUND"));
    }

    #[test]
    fn test_cors_layer_ignores_invalid_origins() {
        // Both paths must build without panicking
        let _ = cors_layer(&[]);
        let _ = cors_layer(&["http://localhost:8080".to_string(), "bad\norigin".to_string()]);
    }
}
