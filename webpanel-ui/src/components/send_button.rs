//! Send Button Component

use leptos::*;

use crate::config::{OUTBOUND_MESSAGE, SEND_ACK};
use crate::state::{Channel, ChannelError, ChannelState, PanelState, TextSink};

/// Shows a blocking alert, then sends the fixed message once per click
#[component]
pub fn SendButton(
    /// `None` when the socket could not be created
    channel: Option<Channel>,
) -> impl IntoView {
    let state = use_context::<PanelState>().expect("PanelState not found");

    let on_click = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(SEND_ACK);
        }

        match &channel {
            Some(channel) => {
                let current = state.channel_state.get_untracked();
                if current != ChannelState::Open {
                    web_sys::console::debug_1(
                        &format!("Sending while {}", current.label().to_lowercase()).into(),
                    );
                }
                if let Err(e) = send_click(channel) {
                    web_sys::console::error_1(&e.to_string().into());
                }
            }
            None => {
                web_sys::console::error_1(&"No WebSocket to send on".into());
            }
        }
    };

    view! {
        <button id="button" class="btn-send" on:click=on_click>
            "Send"
        </button>
    }
}

/// One click's worth of outbound traffic. Failures are returned, never retried.
pub fn send_click<S: TextSink>(sink: &S) -> Result<(), ChannelError> {
    sink.send_text(OUTBOUND_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        sent: RefCell<Vec<String>>,
        reject: bool,
    }

    impl TextSink for RecordingSink {
        fn send_text(&self, text: &str) -> Result<(), ChannelError> {
            self.sent.borrow_mut().push(text.to_string());
            if self.reject {
                Err(ChannelError::Send("InvalidStateError".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_each_click_sends_once() {
        let sink = RecordingSink::default();

        send_click(&sink).unwrap();
        assert_eq!(*sink.sent.borrow(), vec!["button was clicked".to_string()]);

        send_click(&sink).unwrap();
        assert_eq!(sink.sent.borrow().len(), 2);
        assert!(sink.sent.borrow().iter().all(|m| m == OUTBOUND_MESSAGE));
    }

    #[test]
    fn test_rejected_send_is_not_retried() {
        let sink = RecordingSink {
            reject: true,
            ..Default::default()
        };

        let err = send_click(&sink).unwrap_err();
        assert_eq!(err, ChannelError::Send("InvalidStateError".to_string()));
        assert_eq!(sink.sent.borrow().len(), 1);
    }
}
