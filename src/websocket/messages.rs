//! WebSocket Message Types
//!
//! The page and the server exchange raw text frames. There is no envelope:
//! the server sends the display payload verbatim and the page sends plain
//! strings back. These types only exist on the server side.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Literal the page sends when its send button is clicked
pub const BUTTON_CLICKED: &str = "button was clicked";

/// Messages sent from server to page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerMessage {
    /// Replace the page's display region with this payload
    Display(String),
}

impl ServerMessage {
    /// Text of the frame written to the socket
    pub fn into_text(self) -> String {
        match self {
            ServerMessage::Display(payload) => payload,
        }
    }
}

/// A text frame received from a page
#[derive(Debug, Clone, Serialize)]
pub struct ClientMessage {
    /// Connection the frame arrived on
    pub connection_id: String,
    /// Frame contents, unparsed
    pub text: String,
    /// When the server received it
    pub received_at: DateTime<Utc>,
}

impl ClientMessage {
    pub fn new(connection_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
            text: text.into(),
            received_at: Utc::now(),
        }
    }

    /// Whether this is the page's send-button notification
    pub fn is_button_click(&self) -> bool {
        self.text == BUTTON_CLICKED
    }
}
