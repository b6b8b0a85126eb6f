//! Browse command: a random selection from the full catalog.

use crate::api::MetClient;
use crate::config::Config;
use crate::gallery::Gallery;

use super::helpers::{display_outcome, report_advisory, spawn_progress};

/// Show `count` randomly sampled artworks.
pub async fn cmd_browse(config: &Config, count: usize, json: bool) -> anyhow::Result<()> {
    let client = MetClient::new(config)?;
    let gallery = Gallery::new(client, config);

    let (events, progress) = spawn_progress(json);
    let view = gallery.browse(count, events).await;
    progress.await?;

    report_advisory(gallery.tracker()).await;
    display_outcome(view.outcome, json)
}
