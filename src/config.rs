//! Configuration for the collection browser.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::api::rate_limit::LOW_QUOTA_THRESHOLD;
use crate::api::transport::USER_AGENT;

/// Production API root.
pub const DEFAULT_API_BASE: &str = "https://collectionapi.metmuseum.org/public/collection/v1";

/// Config file looked up in the working directory when no path is given.
const DEFAULT_CONFIG_FILENAME: &str = "metbrowse.toml";

/// Application configuration.
///
/// Every field has a default, so an empty file (or no file at all) yields a
/// working configuration. CLI flags and environment variables are applied on
/// top of whatever the file provides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root URL of the collection API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retries beyond the first attempt for 429s and transport failures.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay for exponential backoff, in milliseconds.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// Concurrent detail fetches per batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Pause between detail batches, in milliseconds.
    #[serde(default = "default_inter_batch_delay_ms")]
    pub inter_batch_delay_ms: u64,
    /// Remaining-quota values below this raise a low-quota advisory.
    #[serde(default = "default_low_quota_threshold")]
    pub low_quota_threshold: u64,
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_batch_size() -> usize {
    4
}

fn default_inter_batch_delay_ms() -> u64 {
    300
}

fn default_low_quota_threshold() -> u64 {
    LOW_QUOTA_THRESHOLD
}

fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            batch_size: default_batch_size(),
            inter_batch_delay_ms: default_inter_batch_delay_ms(),
            low_quota_threshold: default_low_quota_threshold(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, `metbrowse.toml`
    /// in the working directory is used when present, defaults otherwise.
    pub async fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path).await,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
                if default_path.exists() {
                    Self::load_from_path(&default_path).await
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    async fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply CLI and environment overrides on top of the file values.
    pub fn apply_overrides(&mut self, api_base: Option<&str>, timeout_secs: Option<u64>) {
        if let Some(base) = api_base {
            self.api_base = base.to_string();
        }
        if let Some(timeout) = timeout_secs {
            self.timeout_secs = timeout;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn inter_batch_delay(&self) -> Duration {
        Duration::from_millis(self.inter_batch_delay_ms)
    }
}
