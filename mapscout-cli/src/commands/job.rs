//! Job command handlers
//!
//! Starting, following, stopping and downloading a scraping job.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use colored::*;
use mapscout_client::{ClientError, ScraperClient};
use mapscout_core::domain::job::JobStatus;
use mapscout_core::domain::snapshot::StatusSnapshot;
use mapscout_core::dto::download::DownloadFormat;
use mapscout_monitor::{JobController, JobHandle, JobRequest, SinkSet, StatusPanel};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::query::parse_queries;
use crate::render::{ConsoleSink, MapSink, format_panel};

/// Backend client whose requests are bounded by the configured timeout
fn client(config: &Config) -> Result<ScraperClient> {
    let http_client = Client::builder()
        .timeout(config.monitor.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;
    Ok(ScraperClient::with_client(config.server_url(), http_client))
}

fn controller(config: &Config, client: ScraperClient) -> JobController {
    let sinks = SinkSet::new()
        .with(Arc::new(ConsoleSink::new()))
        .with(Arc::new(MapSink::new()));
    JobController::new(&config.monitor, Arc::new(client), sinks)
}

/// Start a job from `--query` arguments
pub async fn start(config: &Config, queries: &[String], detach: bool) -> Result<()> {
    let job = parse_queries(queries)?;
    run(config, JobRequest::Queries(job), detach).await
}

/// Start a job from a query file
pub async fn upload(config: &Config, file: PathBuf, detach: bool) -> Result<()> {
    if !file.is_file() {
        bail!("Query file {} does not exist", file.display());
    }
    run(config, JobRequest::Upload(file), detach).await
}

async fn run(config: &Config, request: JobRequest, detach: bool) -> Result<()> {
    let mut controller = controller(config, client(config)?);

    let handle = controller
        .start(request)
        .await
        .context("Failed to start scraping")?;
    info!("Run {} accepted by {}", handle.run_id(), config.server_url());

    if detach {
        controller.dispose().await;
        println!(
            "{}",
            "Job is running on the backend; follow it with `mapscout watch`.".dimmed()
        );
        return Ok(());
    }

    follow(controller, handle).await
}

/// Follow the backend's current job without starting one
pub async fn watch(config: &Config) -> Result<()> {
    let client = client(config)?;
    let snapshot = client
        .get_status()
        .await
        .context("Failed to fetch status")?;

    if nothing_to_watch(&snapshot) {
        println!(
            "{}",
            "No job is running on the backend; start one with `mapscout start` or `mapscout upload`."
                .yellow()
        );
        return Ok(());
    }

    let mut controller = controller(config, client);
    let handle = controller.attach().await;
    follow(controller, handle).await
}

/// An idle backend that never received queries has no job to follow
fn nothing_to_watch(snapshot: &StatusSnapshot) -> bool {
    snapshot.status == JobStatus::Idle && snapshot.total_queries == 0
}

/// Polls until the run ends
///
/// The first Ctrl-C asks the backend to stop and keeps polling until it
/// confirms; a second one exits right away.
async fn follow(controller: JobController, mut handle: JobHandle) -> Result<()> {
    let mut stop_requested = false;

    let event = loop {
        tokio::select! {
            event = handle.finished() => break event,
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;

                if stop_requested {
                    println!("{}", "Interrupted, leaving the job to the backend.".yellow());
                    controller.dispose().await;
                    return Ok(());
                }

                stop_requested = true;
                println!("{}", "Stopping... press Ctrl-C again to exit now.".yellow());
                if let Err(e) = controller.stop().await {
                    warn!("Stop request failed: {}", e);
                    println!("{}", stop_failure_hint(&e).yellow());
                }
            }
        }
    };

    controller.dispose().await;

    let Some(event) = event else {
        bail!("Monitoring ended before the job finished");
    };
    debug!(
        "Run ended: {} rendered of {} final results",
        event.rendered_count, event.final_result_count
    );
    Ok(())
}

/// What a failed stop request means for the run being followed
fn stop_failure_hint(error: &ClientError) -> &'static str {
    if !error.is_rejection() {
        "Backend unreachable; still following the job."
    } else if error.is_client_error() {
        "Backend refused to stop the job; still following it."
    } else if error.is_server_error() {
        "Backend failed to stop the job; still following it."
    } else {
        "Stop request was not accepted; still following the job."
    }
}

/// Ask the backend to stop the current job
pub async fn stop(config: &Config) -> Result<()> {
    let ack = client(config)?
        .stop_job()
        .await
        .context("Error stopping scraping")?;
    println!("{}", ack.message.green());
    Ok(())
}

/// Print the current status once
pub async fn status(config: &Config) -> Result<()> {
    let snapshot = client(config)?
        .get_status()
        .await
        .context("Failed to fetch status")?;

    let panel = StatusPanel::from_snapshot(&snapshot, config.monitor.mask_proxy);
    println!("{}", format_panel(&panel));
    println!("  Results so far: {}", snapshot.results.len());

    Ok(())
}

/// Download results to a file
pub async fn download(
    config: &Config,
    format: DownloadFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let client = client(config)?;
    let path = output.unwrap_or_else(|| default_download_path(format));

    debug!("Downloading {}", client.download_url(format));
    let bytes = client
        .download(format)
        .await
        .with_context(|| format!("Failed to download {} results", format))?;

    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} {} ({} bytes)",
        "Saved".green(),
        path.display(),
        bytes.len()
    );
    Ok(())
}

fn default_download_path(format: DownloadFormat) -> PathBuf {
    PathBuf::from(format!(
        "results-{}.{}",
        chrono::Local::now().format("%Y-%m-%d"),
        format.as_str()
    ))
}
