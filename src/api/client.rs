//! Typed client for the collection API's endpoint family.
//!
//! Three endpoints: the full object listing, search, and per-object detail.
//! All of them go through the resilient executor, so retry and rate-limit
//! behavior is uniform across callers.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::models::{MetObject, ObjectIds};

use super::error::ApiError;
use super::executor::RequestExecutor;
use super::rate_limit::RateLimitTracker;
use super::transport::{HttpTransport, Transport};

/// Client for the collection API.
#[derive(Clone)]
pub struct MetClient {
    executor: RequestExecutor,
    base_url: String,
}

impl MetClient {
    /// Create a client with the production HTTP transport.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let transport = Arc::new(HttpTransport::new(config.timeout(), &config.user_agent));
        Self::with_transport(transport, config)
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        config: &Config,
    ) -> Result<Self, ApiError> {
        let base_url = config.api_base.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|_| ApiError::InvalidBaseUrl(config.api_base.clone()))?;

        let tracker =
            RateLimitTracker::with_settings(config.base_delay(), config.low_quota_threshold);
        let executor =
            RequestExecutor::with_limits(transport, tracker, config.max_retries, config.base_delay());

        Ok(Self { executor, base_url })
    }

    /// The shared rate-limit tracker behind this client.
    pub fn tracker(&self) -> &RateLimitTracker {
        self.executor.tracker()
    }

    /// Full catalog listing: every object ID the museum publishes.
    pub async fn list_objects(&self) -> Result<Vec<u64>, ApiError> {
        let url = format!("{}/objects", self.base_url);
        let response = self.executor.execute(&url).await?;
        let listing: ObjectIds = serde_json::from_str(&response.body)?;
        debug!("Catalog listing: {} objects", listing.total);
        Ok(listing.into_ids())
    }

    /// Search for artworks with images matching `term`.
    ///
    /// The parameter order matters to the API: `hasImages` must precede `q`.
    pub async fn search(
        &self,
        term: &str,
        department_id: Option<u64>,
    ) -> Result<Vec<u64>, ApiError> {
        let mut url = format!(
            "{}/search?hasImages=true&q={}",
            self.base_url,
            urlencoding::encode(term)
        );
        if let Some(department) = department_id {
            url.push_str(&format!("&departmentId={}", department));
        }

        let response = self.executor.execute(&url).await?;
        let listing: ObjectIds = serde_json::from_str(&response.body)?;
        debug!("Search '{}': {} hits", term, listing.total);
        Ok(listing.into_ids())
    }

    /// Detail record for one object. A 404 maps to `ObjectNotFound`.
    pub async fn get_object(&self, id: u64) -> Result<MetObject, ApiError> {
        let url = format!("{}/objects/{}", self.base_url, id);
        match self.executor.execute(&url).await {
            Ok(response) => Ok(serde_json::from_str(&response.body)?),
            Err(ApiError::Http { status: 404, .. }) => Err(ApiError::ObjectNotFound { id }),
            Err(err) => Err(err),
        }
    }
}
