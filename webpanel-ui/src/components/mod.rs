//! UI Components
//!
//! The three controls the page is made of.

pub mod message_display;
pub mod send_button;
pub mod theme_toggle;

pub use message_display::MessageDisplay;
pub use send_button::SendButton;
pub use theme_toggle::ThemeToggle;
