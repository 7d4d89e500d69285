//! Typed async client for the gazetteer collaborator service.
//!
//! The collaborator is the external HTTP API that owns all persisted
//! countries and cities; this crate is the only place that knows its wire
//! shapes and endpoints.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use model::{City, CityId, Country, CountryId, SearchHit};

/// Re-exported so callers can match on [`ApiError::Status`] without
/// depending on reqwest themselves.
pub use reqwest::StatusCode;
