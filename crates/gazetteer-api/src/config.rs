//! Collaborator endpoint configuration.

/// Env var that overrides the collaborator base URL.
pub const BASE_URL_ENV: &str = "GAZETTEER_API_URL";

/// Where the collaborator lives when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Explicit configuration handed to [`crate::ApiClient::new`].
///
/// Nothing reads global state at request time; whoever constructs the client
/// decides where it points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the collaborator, e.g. `http://localhost:3000`.
    /// A trailing slash is tolerated.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve from `GAZETTEER_API_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
