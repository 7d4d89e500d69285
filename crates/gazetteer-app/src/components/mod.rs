//! UI components for the gazetteer window.

pub mod app;
pub mod city_panel;
pub mod country_panel;
pub mod search_panel;
pub mod toast_stack;

/// Toast shown when a collaborator request fails.
pub(crate) const REQUEST_FAILED: &str = "Could not reach the database, please retry";
