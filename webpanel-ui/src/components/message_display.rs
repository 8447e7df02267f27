//! Message Display Component
//!
//! The `#msg` region. Its content is replaced by every inbound message.

use leptos::*;

use crate::config::RenderMode;
use crate::state::PanelState;

#[component]
pub fn MessageDisplay() -> impl IntoView {
    let state = use_context::<PanelState>().expect("PanelState not found");
    let display = state.display;

    match state.render_mode {
        RenderMode::Markup => view! {
            <div id="msg" class="message" inner_html=move || display.get() />
        }
        .into_view(),
        RenderMode::Text => view! {
            <div id="msg" class="message">{move || display.get()}</div>
        }
        .into_view(),
    }
}
