//! API Routes
//!
//! Route handlers organized by functionality.

pub mod display;
pub mod health;
pub mod page;
pub mod status;
