//! Theme Toggle Component
//!
//! Flips the body between `light-theme` and `dark-theme`. The label names
//! the theme a click switches to. Nothing is persisted.

use leptos::*;

use crate::state::PanelState;
use crate::theme::apply_theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_context::<PanelState>().expect("PanelState not found");

    // Start from exactly one theme class
    apply_theme(state.theme.get_untracked());

    let theme = state.theme;
    let on_click = move |_| {
        let next = state.toggle_theme();
        apply_theme(next);
    };

    view! {
        <button class="btn" on:click=on_click>
            {move || theme.get().label()}
        </button>
    }
}
