//! Shared progress and outcome plumbing for the gallery commands.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::RateLimitTracker;
use crate::cli::render;
use crate::gallery::{GalleryOutcome, LoadEvent};

/// Spawn a consumer that renders load events as a progress bar.
///
/// Returns the sender to hand to the gallery plus the consumer task; await
/// the task after the gallery call so the bar is cleared before rendering.
/// With `quiet` set the events are drained without drawing anything.
pub fn spawn_progress(quiet: bool) -> (mpsc::Sender<LoadEvent>, JoinHandle<()>) {
    let (events, mut receiver) = mpsc::channel(64);

    let handle = tokio::spawn(async move {
        let mut bar: Option<ProgressBar> = None;
        while let Some(event) = receiver.recv().await {
            if quiet {
                continue;
            }
            match event {
                LoadEvent::Started { total } => {
                    if let Some(old) = bar.take() {
                        old.finish_and_clear();
                    }
                    if total > 0 {
                        let pb = ProgressBar::new(total as u64);
                        pb.set_style(
                            ProgressStyle::default_bar()
                                .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
                                .unwrap()
                                .progress_chars("█▓░"),
                        );
                        bar = Some(pb);
                    }
                }
                LoadEvent::Loaded { title, .. } => {
                    if let Some(pb) = &bar {
                        pb.set_message(truncate(&title, 40));
                        pb.inc(1);
                    }
                }
                LoadEvent::Skipped { id, .. } => {
                    if let Some(pb) = &bar {
                        pb.set_message(format!("skipped {}", id));
                        pb.inc(1);
                    }
                }
            }
        }
        if let Some(pb) = bar {
            pb.finish_and_clear();
        }
    });

    (events, handle)
}

/// Surface a pending low-quota advisory, if any.
pub async fn report_advisory(tracker: &RateLimitTracker) {
    if let Some(advisory) = tracker.take_advisory().await {
        eprintln!("{} {}", style("!").yellow(), advisory);
    }
}

/// Print a finished gallery outcome.
pub fn display_outcome(outcome: GalleryOutcome, json: bool) -> anyhow::Result<()> {
    match outcome {
        GalleryOutcome::Success {
            records,
            from_fallback,
        } => {
            if from_fallback {
                eprintln!(
                    "{} Live catalog unavailable, showing the built-in selection.",
                    style("!").yellow()
                );
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                render::render_cards(&records);
            }
        }
        GalleryOutcome::NoResults => {
            if json {
                println!("[]");
            } else {
                println!("{} No artworks matched.", style("!").yellow());
            }
        }
        GalleryOutcome::RateLimited { attempts } => {
            eprintln!(
                "{} The museum API is rate limiting us (gave up after {} attempts). \
                 Wait a minute and try again.",
                style("✗").red(),
                attempts
            );
        }
        GalleryOutcome::Failed { message } => {
            eprintln!(
                "{} Request failed: {}. Try again in a moment.",
                style("✗").red(),
                message
            );
        }
    }
    Ok(())
}

/// Truncate a string to `max` characters with an ellipsis.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
