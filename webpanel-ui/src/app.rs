//! App Root Component
//!
//! Provides page state, owns the WebSocket channel and lays out the controls.

use leptos::*;

use crate::components::{MessageDisplay, SendButton, ThemeToggle};
use crate::config;
use crate::state::{init_channel, provide_panel_state, PanelState};
use crate::theme::Theme;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_panel_state(Theme::from_body(), config::render_mode());

    let state = use_context::<PanelState>().expect("PanelState not found");
    let channel = init_channel(state, config::ws_url());

    if let Some(channel) = channel.clone() {
        on_cleanup(move || channel.close());
    }

    view! {
        <main class="panel">
            <header class="panel-header">
                <ThemeToggle />
            </header>

            <MessageDisplay />

            <SendButton channel=channel />
        </main>

        <Footer />
    }
}

/// Footer showing connection status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<PanelState>().expect("PanelState not found");
    let channel_state = state.channel_state;
    let last_message_at = state.last_message_at;

    view! {
        <footer class="panel-footer">
            <span class="status">{move || channel_state.get().label()}</span>
            <span class="last-message">
                {move || {
                    last_message_at.get()
                        .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                        .map(|dt| format!("Last message: {}", dt.format("%H:%M:%S")))
                        .unwrap_or_else(|| "No messages yet".to_string())
                }}
            </span>
        </footer>
    }
}
