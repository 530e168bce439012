//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use mapscout_core::dto::download::DownloadFormat;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start a job from queries and follow it
    Start {
        /// Query as 'keyword|location' or 'keyword|location|url' (repeatable)
        #[arg(short, long = "query", required = true)]
        queries: Vec<String>,

        /// Return once the backend accepted the job
        #[arg(short, long)]
        detach: bool,
    },
    /// Start a job from a CSV or Excel file and follow it
    Upload {
        /// Query file
        file: PathBuf,

        /// Return once the backend accepted the job
        #[arg(short, long)]
        detach: bool,
    },
    /// Ask the backend to stop the current job
    Stop,
    /// Show the current job status once
    Status,
    /// Follow the job currently running on the backend
    Watch,
    /// Download the results
    Download {
        /// csv or json
        format: DownloadFormat,

        /// Destination file (default: results-YYYY-MM-DD.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a CLI command
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Start { queries, detach } => job::start(config, &queries, detach).await,
        Commands::Upload { file, detach } => job::upload(config, file, detach).await,
        Commands::Stop => job::stop(config).await,
        Commands::Status => job::status(config).await,
        Commands::Watch => job::watch(config).await,
        Commands::Download { format, output } => job::download(config, format, output).await,
    }
}
