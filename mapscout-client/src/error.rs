//! Error types for the Mapscout client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the job backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, timeout, ...)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend rejected request (status {status}): {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// The `error` field of the response body, or the raw body
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Local file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Create a rejection from status code and message
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Check if the backend answered with a non-success status
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Rejected { status, .. } if (400..500).contains(status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Rejected { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_classification() {
        let err = ClientError::rejected(400, "Query list is empty");
        assert!(err.is_rejection());
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
        assert_eq!(
            err.to_string(),
            "Backend rejected request (status 400): Query list is empty"
        );

        let err = ClientError::rejected(500, "boom");
        assert!(err.is_server_error());

        assert!(!ClientError::ParseError("x".into()).is_rejection());
    }
}
