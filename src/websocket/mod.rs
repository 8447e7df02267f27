//! WebSocket Live Channel
//!
//! Pushes display messages to every connected page and collects what the
//! pages send back.
//!
//! ## Architecture
//!
//! - **ConnectionHub**: Tracks connections, broadcasts, republishes inbound text
//! - **Handler**: Handles WebSocket upgrade and the per-connection tasks
//! - **Messages**: Server and client message types
//!
//! ## Protocol
//!
//! Pages connect to `/ws`. Every frame is plain text: the server sends the
//! display payload as-is and the page sends strings such as
//! `button was clicked`.

mod handler;
mod hub;
mod messages;

pub use handler::websocket_handler;
pub use hub::{ConnectionHub, ConnectionId, HubConfig, HubError};
pub use messages::{ClientMessage, ServerMessage, BUTTON_CLICKED};
