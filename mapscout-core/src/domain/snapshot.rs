//! Status snapshot returned by each poll

use serde::{Deserialize, Serialize};

use crate::domain::given;
use crate::domain::job::JobStatus;
use crate::domain::record::BusinessRecord;

/// One `GET /status` response
///
/// `results` only grows over the lifetime of a job: a later snapshot holds
/// every record of an earlier one, in the same order, followed by new ones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub status: JobStatus,
    pub processed: u64,
    pub total_queries: u64,
    pub success_count: u64,
    pub failure_count: u64,
    #[serde(default, deserialize_with = "given::text")]
    pub current_query: Option<String>,
    #[serde(default, deserialize_with = "given::text")]
    pub current_proxy: Option<String>,
    pub results: Vec<BusinessRecord>,
}

impl StatusSnapshot {
    /// Completion percentage, 0 while the total is still unknown
    pub fn progress_percent(&self) -> u8 {
        if self.total_queries == 0 {
            return 0;
        }
        let ratio = self.processed as f64 / self.total_queries as f64;
        (ratio * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
