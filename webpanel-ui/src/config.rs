//! Build-time settings
//!
//! The page has no runtime configuration. The endpoint and render mode are
//! fixed when the WASM bundle is built.

/// Endpoint used when `WEBPANEL_WS_URL` is not set at build time
pub const DEFAULT_WS_URL: &str = "ws://127.0.0.1:8080/ws";

/// Sent by the send button
pub const OUTBOUND_MESSAGE: &str = "button was clicked";

/// Shown in the blocking alert before each send
pub const SEND_ACK: &str = "alert";

/// How inbound payloads are written into the display region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Payload is inserted as HTML
    #[default]
    Markup,
    /// Payload is inserted as a text node
    Text,
}

impl RenderMode {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("text") => RenderMode::Text,
            _ => RenderMode::Markup,
        }
    }
}

fn resolve_ws_url(value: Option<&'static str>) -> &'static str {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_WS_URL)
}

/// WebSocket endpoint the page connects to
pub fn ws_url() -> &'static str {
    resolve_ws_url(option_env!("WEBPANEL_WS_URL"))
}

pub fn render_mode() -> RenderMode {
    RenderMode::parse(option_env!("WEBPANEL_RENDER_MODE"))
}
