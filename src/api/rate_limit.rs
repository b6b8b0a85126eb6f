//! Shared rate-limit state for the collection API.
//!
//! All requests made through one client cooperate via this tracker instead of
//! independently retrying into a throttled server. Backs off on 429, honoring
//! `Retry-After` when the server provides one, and raises a non-fatal
//! advisory when the remaining request quota runs low.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::transport::TransportResponse;

/// Base delay for computed backoff, doubled per attempt.
pub const BASE_DELAY: Duration = Duration::from_millis(1000);

/// Ceiling on any honored wait, whatever the server advertises.
pub const MAX_WAIT: Duration = Duration::from_secs(300);

/// Remaining-quota values below this raise a low-quota advisory.
pub const LOW_QUOTA_THRESHOLD: u64 = 10;

/// Non-fatal notice surfaced to the user without altering control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// The remaining request quota reported by the server is running low.
    LowQuota {
        remaining: u64,
        limit: Option<u64>,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::LowQuota {
                remaining,
                limit: Some(limit),
            } => write!(f, "API quota low: {} of {} requests remaining", remaining, limit),
            Advisory::LowQuota {
                remaining,
                limit: None,
            } => write!(f, "API quota low: {} requests remaining", remaining),
        }
    }
}

#[derive(Debug)]
struct TrackerState {
    limited: bool,
    reset_at: Option<Instant>,
    call_count: u64,
    advisory: Option<Advisory>,
}

/// Tracks whether the client is currently throttled and when the throttle lifts.
///
/// Mutated only by the request executor; shared (cheaply cloned) with anything
/// that wants to inspect it.
#[derive(Debug, Clone)]
pub struct RateLimitTracker {
    state: Arc<RwLock<TrackerState>>,
    base_delay: Duration,
    low_quota_threshold: u64,
}

impl RateLimitTracker {
    /// Create an unlimited tracker with default backoff and quota threshold.
    pub fn new() -> Self {
        Self::with_settings(BASE_DELAY, LOW_QUOTA_THRESHOLD)
    }

    /// Create an unlimited tracker with a custom base backoff delay and
    /// low-quota threshold.
    pub fn with_settings(base_delay: Duration, low_quota_threshold: u64) -> Self {
        Self {
            state: Arc::new(RwLock::new(TrackerState {
                limited: false,
                reset_at: None,
                call_count: 0,
                advisory: None,
            })),
            base_delay,
            low_quota_threshold,
        }
    }

    /// Record one attempted request (diagnostic counter, includes retries).
    pub async fn record_attempt(&self) {
        self.state.write().await.call_count += 1;
    }

    /// Apply a completed response to the shared state.
    ///
    /// On 429 the limited flag is set and the reset time computed from
    /// `Retry-After` when it parses as a positive integer, otherwise from
    /// exponential backoff for the zero-indexed `attempt`; either way the
    /// wait is capped at [`MAX_WAIT`]. On any other status a low
    /// remaining-quota header records an advisory.
    pub async fn observe(&self, response: &TransportResponse, attempt: u32) {
        let mut state = self.state.write().await;

        if response.status == 429 {
            let wait = match response.retry_after_secs() {
                Some(secs) => {
                    debug!("Server sent Retry-After: {}s", secs);
                    Duration::from_secs(secs)
                }
                None => backoff_delay(self.base_delay, attempt),
            };
            // Server-controlled value; uncapped it can overflow Instant + Duration.
            let wait = wait.min(MAX_WAIT);
            state.limited = true;
            state.reset_at = Some(Instant::now() + wait);
            warn!("Rate limited by the API, backing off {:?}", wait);
            return;
        }

        if let Some(remaining) = response.rate_limit_remaining() {
            if remaining < self.low_quota_threshold {
                let limit = response.rate_limit_limit();
                debug!(
                    "Quota running low: {} remaining (reset {:?})",
                    remaining,
                    response.rate_limit_reset()
                );
                state.advisory = Some(Advisory::LowQuota { remaining, limit });
            }
        }
    }

    /// Remaining wait while limited, zero otherwise.
    pub async fn should_wait(&self) -> Duration {
        let state = self.state.read().await;
        if !state.limited {
            return Duration::ZERO;
        }
        match state.reset_at {
            Some(reset) => reset.saturating_duration_since(Instant::now()),
            None => Duration::ZERO,
        }
    }

    /// Whether the limited flag is currently set.
    pub async fn is_limited(&self) -> bool {
        self.state.read().await.limited
    }

    /// Drop the limited flag. Called once a wait has been served.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.limited = false;
        state.reset_at = None;
    }

    /// Total attempted requests so far.
    pub async fn call_count(&self) -> u64 {
        self.state.read().await.call_count
    }

    /// Take the pending advisory, if one was recorded since the last call.
    pub async fn take_advisory(&self) -> Option<Advisory> {
        self.state.write().await.advisory.take()
    }
}

impl Default for RateLimitTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Exponential backoff: `base * 2^attempt`, saturating.
pub fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2u32.saturating_pow(attempt))
}
