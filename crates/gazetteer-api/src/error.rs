//! Error type for collaborator calls.

use thiserror::Error;

/// What went wrong talking to the collaborator.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport failed: connection refused, DNS, TLS, mid-body cutoff.
    #[error("collaborator request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The collaborator answered with a non-success status.
    #[error("collaborator returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The collaborator answered 2xx but the body was not the expected JSON.
    #[error("collaborator sent an unexpected body: {0}")]
    Decode(#[from] serde_json::Error),
}
