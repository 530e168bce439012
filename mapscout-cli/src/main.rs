//! Mapscout CLI
//!
//! Command-line front end for the scraping backend: starts jobs, follows
//! their progress in the terminal and downloads the results.

mod commands;
mod config;
mod query;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use mapscout_monitor::IdentityPolicy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mapscout")]
#[command(about = "Google Maps scraping job monitor", long_about = None)]
struct Cli {
    /// Scraping backend URL
    #[arg(long, env = "MAPSCOUT_SERVER_URL", default_value = "http://127.0.0.1:5000")]
    server_url: String,

    /// Delay between two status polls, in milliseconds
    #[arg(long, env = "MAPSCOUT_POLL_INTERVAL_MS", default_value_t = 2000)]
    poll_interval_ms: u64,

    /// Upper bound for one backend request, in seconds
    #[arg(long, env = "MAPSCOUT_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    request_timeout_secs: u64,

    /// How records are told apart: positional, content or cid
    #[arg(long, env = "MAPSCOUT_IDENTITY", default_value = "positional")]
    identity: IdentityPolicy,

    /// Mask the proxy address shown in the status line
    #[arg(
        long,
        env = "MAPSCOUT_MASK_PROXY",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    mask_proxy: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries the rendered job output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "mapscout_cli=info,mapscout_monitor=info,mapscout_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::from_args(
        cli.server_url,
        cli.poll_interval_ms,
        cli.request_timeout_secs,
        cli.identity,
        cli.mask_proxy,
    )?;

    handle_command(cli.command, &config).await
}
