//! Live Message Channel
//!
//! One WebSocket to the server, owned by the app root. There is no
//! reconnection: once the socket closes or errors the channel stays closed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

/// Something that happened on the socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    Opened,
    /// A text frame, payload untouched
    Message(String),
    Closed { code: u16, reason: String },
    Errored,
}

impl ChannelEvent {
    /// Console line for this event, if it is logged at all
    pub fn log_line(&self) -> Option<String> {
        match self {
            ChannelEvent::Opened => Some("we are connected!".to_string()),
            ChannelEvent::Message(payload) => Some(payload.clone()),
            ChannelEvent::Closed { .. } | ChannelEvent::Errored => None,
        }
    }
}

/// Connection lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelState {
    #[default]
    Connecting,
    Open,
    Closed,
}

impl ChannelState {
    /// State after `event`. `Closed` is terminal.
    pub fn on_event(self, event: &ChannelEvent) -> Self {
        match (self, event) {
            (ChannelState::Closed, _) => ChannelState::Closed,
            (_, ChannelEvent::Closed { .. } | ChannelEvent::Errored) => ChannelState::Closed,
            (_, ChannelEvent::Opened) => ChannelState::Open,
            (state, ChannelEvent::Message(_)) => state,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChannelState::Connecting => "Connecting",
            ChannelState::Open => "Connected",
            ChannelState::Closed => "Disconnected",
        }
    }
}

/// Channel failures. Only ever logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// The browser refused to create the socket (bad URL, blocked port)
    Create(String),
    /// The socket rejected a frame, e.g. while still connecting
    Send(String),
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelError::Create(e) => write!(f, "WebSocket connection failed: {}", e),
            ChannelError::Send(e) => write!(f, "WebSocket send failed: {}", e),
        }
    }
}

/// Anything that takes outbound text frames
pub trait TextSink {
    fn send_text(&self, text: &str) -> Result<(), ChannelError>;
}

struct Handlers {
    _on_open: Closure<dyn FnMut(JsValue)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
    _on_error: Closure<dyn FnMut(JsValue)>,
}

/// Owned handle to the page's single WebSocket
#[derive(Clone)]
pub struct Channel {
    ws: WebSocket,
    url: String,
    handlers: Rc<RefCell<Option<Handlers>>>,
}

impl Channel {
    /// Open the socket and route its events to `on_event`
    pub fn open<F>(url: &str, on_event: F) -> Result<Self, ChannelError>
    where
        F: Fn(ChannelEvent) + 'static,
    {
        let ws = WebSocket::new(url).map_err(|e| ChannelError::Create(format!("{:?}", e)))?;

        let channel = Self {
            ws,
            url: url.to_string(),
            handlers: Rc::new(RefCell::new(None)),
        };
        channel.setup_handlers(Rc::new(on_event));

        Ok(channel)
    }

    fn setup_handlers(&self, dispatch: Rc<dyn Fn(ChannelEvent)>) {
        let d = Rc::clone(&dispatch);
        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            d(ChannelEvent::Opened);
        }) as Box<dyn FnMut(JsValue)>);
        self.ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        let d = Rc::clone(&dispatch);
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            match event.data().dyn_into::<js_sys::JsString>() {
                Ok(text) => d(ChannelEvent::Message(text.into())),
                Err(_) => web_sys::console::log_1(&"Ignoring non-text WebSocket message".into()),
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        self.ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let d = Rc::clone(&dispatch);
        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            d(ChannelEvent::Closed {
                code: event.code(),
                reason: event.reason(),
            });
        }) as Box<dyn FnMut(CloseEvent)>);
        self.ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        let d = Rc::clone(&dispatch);
        let on_error = Closure::wrap(Box::new(move |_: JsValue| {
            d(ChannelEvent::Errored);
        }) as Box<dyn FnMut(JsValue)>);
        self.ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        *self.handlers.borrow_mut() = Some(Handlers {
            _on_open: on_open,
            _on_message: on_message,
            _on_close: on_close,
            _on_error: on_error,
        });
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Close the socket and drop its handlers
    pub fn close(&self) {
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onclose(None);
        self.ws.set_onerror(None);
        let _ = self.ws.close();
        self.handlers.borrow_mut().take();
    }
}

impl TextSink for Channel {
    /// Send a text frame. No state check: the browser decides whether the
    /// socket can take it.
    fn send_text(&self, text: &str) -> Result<(), ChannelError> {
        self.ws
            .send_with_str(text)
            .map_err(|e| ChannelError::Send(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let state = ChannelState::default();
        assert_eq!(state, ChannelState::Connecting);

        let state = state.on_event(&ChannelEvent::Opened);
        assert_eq!(state, ChannelState::Open);

        let state = state.on_event(&ChannelEvent::Message("hello".to_string()));
        assert_eq!(state, ChannelState::Open);

        let state = state.on_event(&ChannelEvent::Closed {
            code: 1006,
            reason: String::new(),
        });
        assert_eq!(state, ChannelState::Closed);
    }

    #[test]
    fn test_closed_is_terminal() {
        let state = ChannelState::Connecting.on_event(&ChannelEvent::Errored);
        assert_eq!(state, ChannelState::Closed);
        assert_eq!(state.on_event(&ChannelEvent::Opened), ChannelState::Closed);
        assert_eq!(
            state.on_event(&ChannelEvent::Message("late".to_string())),
            ChannelState::Closed
        );
    }

    #[test]
    fn test_log_lines() {
        assert_eq!(ChannelEvent::Opened.log_line().as_deref(), Some("we are connected!"));
        assert_eq!(
            ChannelEvent::Message("hello".to_string()).log_line().as_deref(),
            Some("hello")
        );
        assert_eq!(ChannelEvent::Errored.log_line(), None);
    }

    #[test]
    fn test_error_display() {
        let err = ChannelError::Send("InvalidStateError".to_string());
        assert_eq!(err.to_string(), "WebSocket send failed: InvalidStateError");
    }
}
