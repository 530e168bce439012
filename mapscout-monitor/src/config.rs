//! Monitor configuration
//!
//! Backend location, polling interval, record identity policy and proxy
//! masking.

use std::time::Duration;

use crate::error::ConfigError;
use crate::reconciler::IdentityPolicy;

/// Default backend address
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Default delay between two status polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Default upper bound for a single backend request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Monitor configuration
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Backend base URL (e.g., "http://127.0.0.1:5000")
    pub server_url: String,

    /// How often `/status` is polled while a job is active
    pub poll_interval: Duration,

    /// Upper bound for one backend request, including a status fetch
    pub request_timeout: Duration,

    /// How records are identified when deciding what is new
    pub identity_policy: IdentityPolicy,

    /// Whether the proxy shown in the status panel is masked
    pub mask_proxy: bool,
}

impl MonitorConfig {
    /// Creates a configuration with defaults for everything but the URL
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            identity_policy: IdentityPolicy::default(),
            mask_proxy: true,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn with_identity_policy(mut self, policy: IdentityPolicy) -> Self {
        self.identity_policy = policy;
        self
    }

    pub fn with_proxy_masking(mut self, mask_proxy: bool) -> Self {
        self.mask_proxy = mask_proxy;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_url.is_empty() {
            return Err(ConfigError::Invalid("server_url cannot be empty".into()));
        }

        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "server_url must start with http:// or https://".into(),
            ));
        }

        if self.poll_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "poll_interval must be greater than 0".into(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "request_timeout must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}
