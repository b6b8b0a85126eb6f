//! Resilient access to the collection API.
//!
//! The layering here is deliberate: `transport` speaks raw HTTP, `rate_limit`
//! tracks what the server has told us about our quota, `executor` combines the
//! two into a request loop that survives 429s and transient failures, and
//! `client` exposes the typed endpoints the rest of the crate calls.

pub mod client;
pub mod error;
pub mod executor;
pub mod rate_limit;
pub mod transport;

pub use client::MetClient;
pub use error::ApiError;
pub use executor::RequestExecutor;
pub use rate_limit::{Advisory, RateLimitTracker};
pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};
