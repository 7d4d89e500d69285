//! Gazetteer desktop client.
//!
//! Re-exports components, state, and toasts for embedding in other apps.

pub mod components;
pub mod state;
pub mod toast;

/// Gazetteer CSS for embedding in host apps.
pub const APP_CSS: &str = include_str!("style.css");
