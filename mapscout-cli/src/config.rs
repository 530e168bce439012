//! Configuration module
//!
//! Turns the parsed command-line arguments into a validated monitor
//! configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use mapscout_monitor::{IdentityPolicy, MonitorConfig};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub monitor: MonitorConfig,
}

impl Config {
    pub fn from_args(
        server_url: String,
        poll_interval_ms: u64,
        request_timeout_secs: u64,
        identity: IdentityPolicy,
        mask_proxy: bool,
    ) -> Result<Self> {
        let monitor = MonitorConfig::new(server_url.trim_end_matches('/'))
            .with_poll_interval(Duration::from_millis(poll_interval_ms))
            .with_request_timeout(Duration::from_secs(request_timeout_secs))
            .with_identity_policy(identity)
            .with_proxy_masking(mask_proxy);

        monitor.validate().context("Invalid configuration")?;

        Ok(Self { monitor })
    }

    pub fn server_url(&self) -> &str {
        &self.monitor.server_url
    }
}
