//! HTTP transport seam.
//!
//! `Transport` abstracts the single GET primitive the executor is built on,
//! so retry and rate-limit behavior can be exercised against scripted
//! responses. The production implementation wraps a `reqwest::Client` with a
//! per-request timeout.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

/// Default user agent, identifying the client to the collection API.
pub const USER_AGENT: &str = "metbrowse/0.4 (terminal collection browser)";

/// Network-level failure: the request never produced an HTTP status.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Create a transport error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// A completed HTTP exchange: status, lowercased headers, body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is in the success range (non-4xx/5xx).
    pub fn is_success(&self) -> bool {
        self.status < 400
    }

    /// Look up a header by its lowercase name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// `Retry-After` in seconds, when the header parses as a positive integer.
    pub fn retry_after_secs(&self) -> Option<u64> {
        self.header("retry-after")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&secs| secs > 0)
    }

    /// `X-RateLimit-Remaining`, when present and numeric.
    pub fn rate_limit_remaining(&self) -> Option<u64> {
        self.header("x-ratelimit-remaining")
            .and_then(|v| v.trim().parse().ok())
    }

    /// `X-RateLimit-Limit`, when present and numeric.
    pub fn rate_limit_limit(&self) -> Option<u64> {
        self.header("x-ratelimit-limit")
            .and_then(|v| v.trim().parse().ok())
    }

    /// `X-RateLimit-Reset`, when present and numeric (advisory only).
    pub fn rate_limit_reset(&self) -> Option<u64> {
        self.header("x-ratelimit-reset")
            .and_then(|v| v.trim().parse().ok())
    }
}

/// The single GET primitive everything above is built on.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one GET and return the completed exchange.
    ///
    /// An `Err` means the request never produced an HTTP status (DNS,
    /// connect, timeout); any status code at all is an `Ok`.
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

/// Production transport over reqwest.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a client with the given per-request timeout and user agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.to_string(), v.to_string());
            }
        }

        let body = response.text().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
