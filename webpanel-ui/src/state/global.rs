//! Page State
//!
//! Reactive state shared by the page's components, using Leptos signals.

use leptos::*;

use super::channel::{ChannelEvent, ChannelState};
use crate::config::RenderMode;
use crate::theme::Theme;

/// State provided to all components
#[derive(Clone)]
pub struct PanelState {
    /// Active theme
    pub theme: RwSignal<Theme>,
    /// Latest inbound payload, shown in the display region
    pub display: RwSignal<String>,
    /// How `display` is rendered
    pub render_mode: RenderMode,
    /// Connection lifecycle
    pub channel_state: RwSignal<ChannelState>,
    /// When the last inbound message arrived (ms since epoch)
    pub last_message_at: RwSignal<Option<i64>>,
}

/// Provide page state to the component tree
pub fn provide_panel_state(theme: Theme, render_mode: RenderMode) {
    provide_context(PanelState::new(theme, render_mode));
}

impl PanelState {
    /// Fresh state: no message yet, channel connecting
    pub fn new(theme: Theme, render_mode: RenderMode) -> Self {
        Self {
            theme: create_rw_signal(theme),
            display: create_rw_signal(String::new()),
            render_mode,
            channel_state: create_rw_signal(ChannelState::Connecting),
            last_message_at: create_rw_signal(None),
        }
    }

    /// Fold a channel event into the page and log it to the console
    pub fn apply(&self, event: ChannelEvent) {
        match &event {
            ChannelEvent::Closed { code, reason } => {
                web_sys::console::debug_1(
                    &format!("WebSocket closed: code={}, reason={}", code, reason).into(),
                );
            }
            ChannelEvent::Errored => {
                web_sys::console::debug_1(&"WebSocket error".into());
            }
            ChannelEvent::Opened | ChannelEvent::Message(_) => {}
        }

        if let Some(line) = self.record(event) {
            web_sys::console::log_1(&line.into());
        }
    }

    /// Signal updates for `event`. Returns the console line to log, if any.
    pub fn record(&self, event: ChannelEvent) -> Option<String> {
        self.channel_state.update(|state| *state = state.on_event(&event));

        if let ChannelEvent::Message(payload) = &event {
            self.display.set(payload.clone());
            self.last_message_at
                .set(Some(chrono::Utc::now().timestamp_millis()));
        }

        event.log_line()
    }

    /// Switch to the other theme
    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        next
    }
}
