//! Fetch error types

use thiserror::Error;

/// Errors that can occur while issuing a request or consuming its body
#[derive(Debug, Error)]
pub enum FetchError {
    /// Malformed URL, method, or header
    #[error("request construction error: {0}")]
    RequestConstruction(String),
    /// The underlying client could not be built
    #[error("client initialization error: {0}")]
    ClientInitialization(String),
    /// Network-level failure, the source error carried through unchanged
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// Body stream failure during consumption
    #[error("body read error: {0}")]
    Read(#[source] reqwest::Error),
    /// Response bytes were not valid JSON for the requested shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            FetchError::RequestConstruction(err.to_string())
        } else {
            FetchError::Transport(err)
        }
    }
}
