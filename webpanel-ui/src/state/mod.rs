//! State Management
//!
//! Page state and the WebSocket channel.

pub mod channel;
pub mod global;

pub use channel::{Channel, ChannelError, ChannelState, TextSink};
pub use global::{provide_panel_state, PanelState};

/// Open the page's channel and feed its events into `state`
///
/// Returns `None` when the browser refuses to create the socket. Nothing is
/// retried.
pub fn init_channel(state: PanelState, url: &str) -> Option<Channel> {
    match Channel::open(url, move |event| state.apply(event)) {
        Ok(channel) => {
            web_sys::console::log_1(&format!("Connecting to {}", channel.url()).into());
            Some(channel)
        }
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            None
        }
    }
}
