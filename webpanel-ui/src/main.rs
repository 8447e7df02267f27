//! Webpanel Page
//!
//! Browser side of Webpanel, built with Leptos (WASM).
//!
//! # Features
//!
//! - Light/dark theme toggle on `<body>`
//! - Live display region fed by a WebSocket
//! - Send button that reports back to the server
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly
//! with `trunk build`. The server serves the resulting `dist/` directory.

use leptos::*;

mod app;
mod components;
mod config;
mod state;
mod theme;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
