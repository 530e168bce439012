//! Job backend abstraction
//!
//! The controller and the poller only talk to the backend through this
//! trait, so tests can script the backend without HTTP.

use async_trait::async_trait;
use mapscout_client::{Result, ScraperClient};
use mapscout_core::domain::snapshot::StatusSnapshot;
use mapscout_core::dto::job::{StartAck, StartJob, StopAck};
use std::path::Path;

/// The four backend operations the monitor needs
#[async_trait]
pub trait JobBackend: Send + Sync {
    /// Starts a job from manually entered queries
    async fn start(&self, job: &StartJob) -> Result<StartAck>;

    /// Starts a job from an uploaded CSV/Excel file
    async fn upload(&self, path: &Path) -> Result<StartAck>;

    /// Requests the current job to stop
    async fn stop(&self) -> Result<StopAck>;

    /// Fetches the current status snapshot
    async fn fetch_status(&self) -> Result<StatusSnapshot>;
}

#[async_trait]
impl JobBackend for ScraperClient {
    async fn start(&self, job: &StartJob) -> Result<StartAck> {
        self.start_job(job).await
    }

    async fn upload(&self, path: &Path) -> Result<StartAck> {
        self.upload_job(path).await
    }

    async fn stop(&self) -> Result<StopAck> {
        self.stop_job().await
    }

    async fn fetch_status(&self) -> Result<StatusSnapshot> {
        self.get_status().await
    }
}
