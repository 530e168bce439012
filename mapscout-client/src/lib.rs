//! Mapscout HTTP Client
//!
//! A small, type-safe HTTP client for the scraping job backend.
//!
//! The backend exposes one job at a time: it is started with a list of
//! queries (or an uploaded CSV/Excel file), polled through `/status`,
//! stopped through `/stop`, and its results are downloadable as CSV or JSON.
//!
//! # Example
//!
//! ```no_run
//! use mapscout_client::ScraperClient;
//! use mapscout_core::dto::job::{JobQuery, StartJob};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ScraperClient::new("http://127.0.0.1:5000");
//!
//!     let ack = client
//!         .start_job(&StartJob {
//!             queries: vec![JobQuery::new("cafe", "10001")],
//!         })
//!         .await?;
//!
//!     println!("Started {} queries", ack.query_count);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;

// Re-export commonly used types
pub use error::{ClientError, Result};

use mapscout_core::dto::job::ErrorBody;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the scraping job backend
#[derive(Debug, Clone)]
pub struct ScraperClient {
    /// Base URL of the backend (e.g., "http://127.0.0.1:5000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl ScraperClient {
    /// Create a new backend client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend (e.g., "http://127.0.0.1:5000")
    ///
    /// # Example
    /// ```
    /// use mapscout_client::ScraperClient;
    ///
    /// let client = ScraperClient::new("http://127.0.0.1:5000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new backend client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use mapscout_client::ScraperClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ScraperClient::with_client("http://127.0.0.1:5000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle a backend response and deserialize JSON
    ///
    /// Non-success statuses become [`ClientError::Rejected`], carrying the
    /// `error` field of the body when there is one.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle a backend response whose body is an opaque file
    async fn handle_bytes_response(&self, response: reqwest::Response) -> Result<Vec<u8>> {
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body,
        };

        Err(ClientError::rejected(status.as_u16(), message))
    }
}
