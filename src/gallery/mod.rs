//! Browse and search coordination over the API layer.
//!
//! A gallery request runs listing (or search), random sampling, batched
//! detail loading, and normalization, then lands in one of four terminal
//! outcomes. The browse path alone retries a failed listing against the
//! built-in fallback catalog; search failures and rate-limit exhaustion are
//! surfaced as-is.

pub mod fallback;
pub mod loader;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::api::{ApiError, MetClient, RateLimitTracker};
use crate::config::Config;
use crate::models::ArtworkRecord;

pub use fallback::FALLBACK_OBJECT_IDS;
pub use loader::{DetailLoader, LoadEvent};

/// Terminal result of one browse or search request.
#[derive(Debug, Clone)]
pub enum GalleryOutcome {
    /// One or more displayable records.
    Success {
        records: Vec<ArtworkRecord>,
        from_fallback: bool,
    },
    /// The listing or search succeeded but produced nothing displayable.
    NoResults,
    /// Retry budget exhausted while the server throttled us.
    RateLimited { attempts: u32 },
    /// Listing failed with no fallback available.
    Failed { message: String },
}

/// A finished request tagged with the generation it belongs to.
///
/// Callers that overlap requests must drop any view whose generation is no
/// longer current rather than rendering it over a newer result.
#[derive(Debug, Clone)]
pub struct GalleryView {
    pub generation: u64,
    pub outcome: GalleryOutcome,
}

/// Coordinates listing, sampling, detail loading and fallback.
pub struct Gallery {
    client: MetClient,
    loader: DetailLoader,
    generation: Arc<AtomicU64>,
}

impl Gallery {
    pub fn new(client: MetClient, config: &Config) -> Self {
        let loader = DetailLoader::new(client.clone(), config);
        Self {
            client,
            loader,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Shared rate-limit tracker, for advisory reporting.
    pub fn tracker(&self) -> &RateLimitTracker {
        self.client.tracker()
    }

    /// Whether `generation` still identifies the most recent request.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn begin_request(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Browse a random selection of `count` artworks from the full catalog.
    ///
    /// A failed listing retries against the built-in fallback IDs. An empty
    /// listing does not: that is a valid no-results state, not a failure.
    pub async fn browse(&self, count: usize, events: mpsc::Sender<LoadEvent>) -> GalleryView {
        let generation = self.begin_request();

        let outcome = match self.client.list_objects().await {
            Ok(ids) if ids.is_empty() => GalleryOutcome::NoResults,
            Ok(ids) => {
                let picked = sample_ids(&ids, count);
                self.load_outcome(&picked, false, events).await
            }
            Err(ApiError::RateLimitExceeded { attempts }) => {
                GalleryOutcome::RateLimited { attempts }
            }
            Err(err) => {
                warn!("Catalog listing failed: {}", err);
                info!("Retrying against the built-in fallback catalog");
                let ids: Vec<u64> = FALLBACK_OBJECT_IDS.iter().take(count).copied().collect();
                match self.load_outcome(&ids, true, events).await {
                    // Nothing displayable even from the fallback: report the
                    // original listing failure, not the empty fallback.
                    GalleryOutcome::NoResults => GalleryOutcome::Failed {
                        message: err.to_string(),
                    },
                    outcome => outcome,
                }
            }
        };

        GalleryView {
            generation,
            outcome,
        }
    }

    /// Search the collection for artworks with images matching `term`.
    ///
    /// Search has no fallback: a failed search surfaces as `Failed`.
    pub async fn search(
        &self,
        term: &str,
        department: Option<u64>,
        count: usize,
        events: mpsc::Sender<LoadEvent>,
    ) -> GalleryView {
        let generation = self.begin_request();

        let outcome = match self.client.search(term, department).await {
            Ok(ids) if ids.is_empty() => GalleryOutcome::NoResults,
            Ok(ids) => {
                let limited: Vec<u64> = ids.into_iter().take(count).collect();
                self.load_outcome(&limited, false, events).await
            }
            Err(ApiError::RateLimitExceeded { attempts }) => {
                GalleryOutcome::RateLimited { attempts }
            }
            Err(err) => GalleryOutcome::Failed {
                message: err.to_string(),
            },
        };

        GalleryView {
            generation,
            outcome,
        }
    }

    /// Fetch one artwork for the detail view.
    ///
    /// `Ok(None)` means the object exists but lacks a usable title or image.
    pub async fn artwork(&self, id: u64) -> Result<Option<ArtworkRecord>, ApiError> {
        let raw = self.client.get_object(id).await?;
        Ok(ArtworkRecord::from_object(raw))
    }

    async fn load_outcome(
        &self,
        ids: &[u64],
        from_fallback: bool,
        events: mpsc::Sender<LoadEvent>,
    ) -> GalleryOutcome {
        let records = self.loader.load(ids, events).await;
        if records.is_empty() {
            GalleryOutcome::NoResults
        } else {
            GalleryOutcome::Success {
                records,
                from_fallback,
            }
        }
    }
}

/// Pick up to `count` distinct IDs uniformly at random.
///
/// Inputs at or below `count` come back unchanged, in input order.
pub fn sample_ids(ids: &[u64], count: usize) -> Vec<u64> {
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1);
    sample_ids_seeded(ids, count, nanos)
}

/// Partial Fisher-Yates over a copy of `ids`, driven by an xorshift stream.
fn sample_ids_seeded(ids: &[u64], count: usize, seed: u64) -> Vec<u64> {
    if ids.len() <= count {
        return ids.to_vec();
    }

    let mut pool = ids.to_vec();
    // Zero is a fixed point of xorshift, so force an odd nonzero state.
    let mut state = seed | 1;
    for i in 0..count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let j = i + (state as usize % (pool.len() - i));
        pool.swap(i, j);
    }
    pool.truncate(count);
    pool
}
