//! Resilient request execution.
//!
//! One logical GET with a bounded retry loop: 429s wait out the advertised
//! window via the shared tracker, transport failures back off exponentially,
//! and any other HTTP error fails fast without a retry.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use super::error::ApiError;
use super::rate_limit::{backoff_delay, RateLimitTracker, BASE_DELAY};
use super::transport::{Transport, TransportResponse};

/// Retries beyond the first attempt (so 4 total attempts by default).
pub const MAX_RETRIES: u32 = 3;

/// Executes single GETs with retry, backoff and rate-limit cooperation.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
    tracker: RateLimitTracker,
    max_retries: u32,
    base_delay: Duration,
}

impl RequestExecutor {
    /// Create an executor with the default retry budget and backoff.
    pub fn new(transport: Arc<dyn Transport>, tracker: RateLimitTracker) -> Self {
        Self::with_limits(transport, tracker, MAX_RETRIES, BASE_DELAY)
    }

    /// Create an executor with a custom retry budget and base delay.
    pub fn with_limits(
        transport: Arc<dyn Transport>,
        tracker: RateLimitTracker,
        max_retries: u32,
        base_delay: Duration,
    ) -> Self {
        Self {
            transport,
            tracker,
            max_retries,
            base_delay,
        }
    }

    /// The shared tracker this executor reports into.
    pub fn tracker(&self) -> &RateLimitTracker {
        &self.tracker
    }

    /// Perform one logical GET, retrying 429s and transport failures.
    ///
    /// Only 429 and network-level failures are retried; any other non-success
    /// status fails on the spot. Every attempt (retries included) bumps the
    /// tracker's call counter.
    pub async fn execute(&self, url: &str) -> Result<TransportResponse, ApiError> {
        let mut attempt: u32 = 0;

        loop {
            let wait = self.tracker.should_wait().await;
            if !wait.is_zero() {
                debug!("Throttled, waiting {:?} before requesting {}", wait, url);
                sleep(wait).await;
            }
            if self.tracker.is_limited().await {
                // The window has passed; optimistically resume.
                self.tracker.clear().await;
            }

            self.tracker.record_attempt().await;

            match self.transport.get(url).await {
                Ok(response) if response.status == 429 => {
                    self.tracker.observe(&response, attempt).await;
                    if attempt < self.max_retries {
                        attempt += 1;
                        // Loop head serves the newly computed wait.
                        continue;
                    }
                    return Err(ApiError::RateLimitExceeded {
                        attempts: attempt + 1,
                    });
                }
                Ok(response) if !response.is_success() => {
                    return Err(ApiError::Http {
                        status: response.status,
                        url: url.to_string(),
                    });
                }
                Ok(response) => {
                    self.tracker.observe(&response, attempt).await;
                    return Ok(response);
                }
                Err(err) if attempt < self.max_retries => {
                    let delay = backoff_delay(self.base_delay, attempt);
                    warn!("Request to {} failed ({}), retrying in {:?}", url, err, delay);
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(ApiError::Transport(err)),
            }
        }
    }
}
