//! Errors raised while fetching ticker data from an external provider.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to price provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} responded with status {status}")]
    Status {
        provider: &'static str,
        status: u16,
    },

    #[error("malformed ticker payload: {0}")]
    Decode(#[from] serde_json::Error),
}
