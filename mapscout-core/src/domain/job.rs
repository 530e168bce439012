//! Job domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of the scraping job as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Idle,
    Running,
    Completed,
    Stopped,
}

impl JobStatus {
    /// `Completed` and `Stopped` end a job run; nothing is polled after them
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Stopped)
    }

    /// Wire name of the status
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Idle => "idle",
            JobStatus::Running => "running",
            JobStatus::Completed => "completed",
            JobStatus::Stopped => "stopped",
        }
    }

    /// Capitalised label for display
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Idle => "Idle",
            JobStatus::Running => "Running",
            JobStatus::Completed => "Completed",
            JobStatus::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
