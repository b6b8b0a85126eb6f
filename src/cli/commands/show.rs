//! Show command: detail view for a single object.

use console::style;

use crate::api::MetClient;
use crate::cli::render;
use crate::config::Config;
use crate::gallery::Gallery;

use super::helpers::report_advisory;

/// Show one artwork by object ID.
pub async fn cmd_show(config: &Config, id: u64, json: bool) -> anyhow::Result<()> {
    let client = MetClient::new(config)?;
    let gallery = Gallery::new(client, config);

    match gallery.artwork(id).await {
        Ok(Some(record)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                render::render_detail(&record);
            }
            report_advisory(gallery.tracker()).await;
            Ok(())
        }
        Ok(None) => {
            eprintln!(
                "{} Object {} has no displayable title or image.",
                style("!").yellow(),
                id
            );
            Ok(())
        }
        Err(err) if err.is_not_found() => {
            eprintln!("{} No artwork with object ID {}.", style("✗").red(), id);
            Ok(())
        }
        Err(err) if err.is_rate_limited() => {
            eprintln!(
                "{} The museum API is rate limiting us. Wait a minute and try again.",
                style("✗").red()
            );
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
