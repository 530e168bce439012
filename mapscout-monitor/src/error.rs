//! Error types for the monitor

use mapscout_client::ClientError;
use thiserror::Error;

/// Why a job could not be started
///
/// The poller is never activated when starting fails, and nothing is retried.
#[derive(Debug, Error)]
pub enum StartError {
    /// Backend answered `/start` or `/upload` with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Backend could not be reached or answered with garbage
    #[error("Error starting scraping: {0}")]
    Request(#[source] ClientError),
}

impl From<ClientError> for StartError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Rejected { status, message } => StartError::Rejected { status, message },
            other => StartError::Request(other),
        }
    }
}

/// Why a single poll tick produced no snapshot
///
/// Both variants are handled the same way: the tick is logged and skipped,
/// and the next tick runs on schedule.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("status fetch failed: {0}")]
    Transport(#[source] ClientError),

    #[error("status fetch timed out after {0:?}")]
    TimedOut(std::time::Duration),

    #[error("malformed status snapshot: {0}")]
    Malformed(String),
}

impl From<ClientError> for PollError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ParseError(message) => PollError::Malformed(message),
            other => PollError::Transport(other),
        }
    }
}

/// Invalid monitor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_keeps_backend_message() {
        let err = StartError::from(ClientError::rejected(400, "No queries provided"));
        assert!(matches!(err, StartError::Rejected { status: 400, .. }));
        assert_eq!(err.to_string(), "No queries provided");
    }

    #[test]
    fn test_parse_failure_is_malformed_snapshot() {
        let err = PollError::from(ClientError::ParseError("missing field `results`".into()));
        assert!(matches!(err, PollError::Malformed(_)));

        let err = PollError::from(ClientError::rejected(500, "boom"));
        assert!(matches!(err, PollError::Transport(_)));
    }
}
