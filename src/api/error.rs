//! Error types for the API access layer.

use thiserror::Error;

use super::transport::TransportError;

/// Errors produced by the collection API access layer.
///
/// Per-object failures inside a batch load are swallowed by the loader;
/// these surface only from listing/search calls and single-object lookups.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 429 persisted past the retry budget.
    #[error("rate limited by the collection API ({attempts} attempts made); wait a moment before retrying")]
    RateLimitExceeded { attempts: u32 },

    /// Non-retryable HTTP failure (anything but 429 and success).
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// Single-object lookup for an ID the catalog does not know.
    #[error("object {id} not found in the collection")]
    ObjectNotFound { id: u64 },

    /// Network-level failure, retry budget exhausted.
    #[error("network error: {0}")]
    Transport(#[from] TransportError),

    /// Response body did not match the expected shape.
    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL is not a valid URL.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// True for the terminal rate-limited state.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimitExceeded { .. })
    }

    /// True when a single-object lookup hit an unknown ID.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound { .. })
    }
}
