//! Search command.

use crate::api::MetClient;
use crate::config::Config;
use crate::gallery::Gallery;

use super::helpers::{display_outcome, report_advisory, spawn_progress};

/// Search the collection and show up to `count` matches.
pub async fn cmd_search(
    config: &Config,
    query: &str,
    department: Option<u64>,
    count: usize,
    json: bool,
) -> anyhow::Result<()> {
    let client = MetClient::new(config)?;
    let gallery = Gallery::new(client, config);

    let (events, progress) = spawn_progress(json);
    let view = gallery.search(query, department, count, events).await;
    progress.await?;

    report_advisory(gallery.tracker()).await;
    display_outcome(view.outcome, json)
}
