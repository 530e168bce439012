//! Job-related backend endpoints

use crate::ScraperClient;
use crate::error::Result;
use mapscout_core::domain::snapshot::StatusSnapshot;
use mapscout_core::dto::download::DownloadFormat;
use mapscout_core::dto::job::{StartAck, StartJob, StopAck};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::debug;

impl ScraperClient {
    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Start a job from manually entered queries
    ///
    /// # Arguments
    /// * `req` - The queries to run
    ///
    /// # Returns
    /// The backend's acknowledgement with the number of accepted queries
    pub async fn start_job(&self, req: &StartJob) -> Result<StartAck> {
        let url = format!("{}/start", self.base_url);
        debug!("Starting job with {} queries", req.queries.len());
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_response(response).await
    }

    /// Start a job from a CSV or Excel file
    ///
    /// The file is sent as the multipart field `file`; parsing happens on
    /// the backend.
    ///
    /// # Arguments
    /// * `path` - Path of the file to upload
    pub async fn upload_job(&self, path: &Path) -> Result<StartAck> {
        let url = format!("{}/upload", self.base_url);
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "queries.csv".to_string());

        debug!("Uploading {} ({} bytes)", file_name, bytes.len());

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let response = self.client.post(&url).multipart(form).send().await?;

        self.handle_response(response).await
    }

    /// Ask the backend to stop the current job
    ///
    /// Idempotent: the backend answers with a message whether or not a job
    /// was running.
    pub async fn stop_job(&self) -> Result<StopAck> {
        let url = format!("{}/stop", self.base_url);
        let response = self.client.post(&url).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the current status snapshot
    pub async fn get_status(&self) -> Result<StatusSnapshot> {
        let url = format!("{}/status", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Downloads
    // =============================================================================

    /// URL of the results file in the given format
    pub fn download_url(&self, format: DownloadFormat) -> String {
        format!("{}/download/{}", self.base_url, format)
    }

    /// Fetch the results file in the given format
    pub async fn download(&self, format: DownloadFormat) -> Result<Vec<u8>> {
        let response = self.client.get(self.download_url(format)).send().await?;

        self.handle_bytes_response(response).await
    }
}
