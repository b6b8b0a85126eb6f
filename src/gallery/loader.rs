//! Batched retrieval of artwork detail records.
//!
//! The detail endpoint serves one object per request, so a gallery page of N
//! artworks needs N requests. Issuing them all at once invites throttling;
//! issuing them serially is slow. This loader splits the ID list into small
//! batches, fans out each batch concurrently, and pauses between batches.

use std::time::Duration;

use futures::future::join_all;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::api::{ApiError, MetClient};
use crate::config::Config;
use crate::models::ArtworkRecord;

/// Events emitted while a batch load is in flight.
#[derive(Debug, Clone)]
pub enum LoadEvent {
    /// Load started; `total` IDs will be attempted.
    Started { total: usize },
    /// One object fetched and normalized.
    Loaded { id: u64, title: String },
    /// One object dropped without aborting the batch.
    Skipped { id: u64, reason: String },
}

/// Fetches detail records in bounded concurrent batches.
pub struct DetailLoader {
    client: MetClient,
    batch_size: usize,
    inter_batch_delay: Duration,
}

impl DetailLoader {
    pub fn new(client: MetClient, config: &Config) -> Self {
        Self {
            client,
            batch_size: config.batch_size.max(1),
            inter_batch_delay: config.inter_batch_delay(),
        }
    }

    /// Load detail records for `ids`.
    ///
    /// Requests inside a batch run concurrently and all settle before the
    /// next batch starts. Between batches we pause to keep the request rate
    /// polite. A failure on one ID drops that ID and nothing else, so the
    /// result may be shorter than the input. Batch-to-batch ordering of the
    /// results matches the input ordering.
    pub async fn load(&self, ids: &[u64], events: mpsc::Sender<LoadEvent>) -> Vec<ArtworkRecord> {
        let _ = events.send(LoadEvent::Started { total: ids.len() }).await;
        if ids.is_empty() {
            return Vec::new();
        }

        let mut records = Vec::with_capacity(ids.len());
        let batch_count = ids.chunks(self.batch_size).len();

        for (index, batch) in ids.chunks(self.batch_size).enumerate() {
            debug!(
                "Fetching batch {}/{} ({} objects)",
                index + 1,
                batch_count,
                batch.len()
            );

            let fetches = batch.iter().map(|&id| self.fetch_one(id));
            for (&id, outcome) in batch.iter().zip(join_all(fetches).await) {
                match outcome {
                    Ok(Some(record)) => {
                        let _ = events
                            .send(LoadEvent::Loaded {
                                id,
                                title: record.title.clone(),
                            })
                            .await;
                        records.push(record);
                    }
                    Ok(None) => {
                        debug!("Object {} has no usable title/image, skipping", id);
                        let _ = events
                            .send(LoadEvent::Skipped {
                                id,
                                reason: "incomplete record".to_string(),
                            })
                            .await;
                    }
                    Err(err) => {
                        if err.is_not_found() {
                            debug!("Object {} not found, skipping", id);
                        } else {
                            warn!("Failed to fetch object {}: {}", id, err);
                        }
                        let _ = events
                            .send(LoadEvent::Skipped {
                                id,
                                reason: err.to_string(),
                            })
                            .await;
                    }
                }
            }

            if index + 1 < batch_count {
                sleep(self.inter_batch_delay).await;
            }
        }

        records
    }

    async fn fetch_one(&self, id: u64) -> Result<Option<ArtworkRecord>, ApiError> {
        let raw = self.client.get_object(id).await?;
        Ok(ArtworkRecord::from_object(raw))
    }
}
