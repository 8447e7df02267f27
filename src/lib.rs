//! # Webpanel
//!
//! Serves a themed page to a browser (or a robot's tablet) and pushes live
//! display messages to it over a WebSocket.
//!
//! ## Features
//!
//! - **Page serving**: the built Leptos front end, or an HTML page set at runtime
//! - **Live display**: every payload posted to the API is pushed to all pages
//! - **Page feedback**: text sent back by pages is logged and republished
//!
//! ## Modules
//!
//! - [`api`]: HTTP server with Axum
//! - [`websocket`]: Connection hub and WebSocket handler
//! - [`page`]: The page served at `/`
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use webpanel::{AppState, ServerMessage, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(ServerConfig::default());
//!
//!     // React to the page's send button
//!     let mut inbound = state.hub.subscribe_inbound();
//!     let hub = state.hub.clone();
//!     tokio::spawn(async move {
//!         while let Ok(msg) = inbound.recv().await {
//!             if msg.is_button_click() {
//!                 hub.broadcast(ServerMessage::Display("<h1>Thanks!</h1>".into())).await;
//!             }
//!         }
//!     });
//!
//!     webpanel::serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod page;
pub mod websocket;

pub use api::{build_router, serve, ApiError, AppState};

pub use websocket::{
    websocket_handler, ClientMessage, ConnectionHub, HubConfig, HubError, ServerMessage,
    BUTTON_CLICKED,
};

pub use config::{generate_default_config, Config, ConfigError, LoggingConfig, ServerConfig};

pub use page::{PageSource, PageStore};
