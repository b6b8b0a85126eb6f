//! Command-line interface.

mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "met")]
#[command(about = "Browse the Met Museum's open access collection from the terminal")]
#[command(version)]
pub struct Cli {
    /// Config file path (defaults to ./metbrowse.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// API root URL
    #[arg(long, global = true, env = "MET_API_BASE")]
    api_base: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "MET_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Show a random selection of artworks from the collection
    Browse {
        /// Number of artworks to show
        #[arg(short = 'n', long, default_value = "12")]
        count: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the collection for artworks with images
    Search {
        /// Search term
        query: String,
        /// Restrict results to a department ID
        #[arg(short, long)]
        department: Option<u64>,
        /// Maximum number of results to show
        #[arg(short = 'n', long, default_value = "12")]
        count: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one artwork by object ID
    Show {
        /// Object ID
        id: u64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).await?;
    config.apply_overrides(cli.api_base.as_deref(), cli.timeout);

    match cli.command {
        Commands::Browse { count, json } => commands::cmd_browse(&config, count, json).await,
        Commands::Search {
            query,
            department,
            count,
            json,
        } => commands::cmd_search(&config, &query, department, count, json).await,
        Commands::Show { id, json } => commands::cmd_show(&config, id, json).await,
    }
}
