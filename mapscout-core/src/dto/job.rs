//! Job DTOs exchanged with the backend

use serde::{Deserialize, Serialize};

/// One search: a keyword in a location, optionally pinned to a Maps URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobQuery {
    pub keyword: String,
    pub zip_code: String,
    #[serde(default)]
    pub url: String,
}

impl JobQuery {
    pub fn new(keyword: impl Into<String>, zip_code: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            zip_code: zip_code.into(),
            url: String::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// Body of `POST /start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartJob {
    pub queries: Vec<JobQuery>,
}

/// Success body of `POST /start` and `POST /upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartAck {
    #[serde(default)]
    pub message: Option<String>,
    pub query_count: u64,
}

/// Body of `POST /stop`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopAck {
    pub message: String,
}

/// Failure body returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
