//! Status panel and control state shown alongside the sinks

use mapscout_core::domain::job::JobStatus;
use mapscout_core::domain::snapshot::StatusSnapshot;

use crate::mask::mask_proxy;

const PLACEHOLDER: &str = "-";

/// Display-ready view of one snapshot's counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPanel {
    pub status: JobStatus,
    pub current_query: String,
    pub current_proxy: String,
    pub processed: u64,
    pub total_queries: u64,
    pub success_count: u64,
    pub failure_count: u64,
    pub percent: u8,
}

impl StatusPanel {
    /// Builds the panel, masking the proxy address when `mask` is set
    pub fn from_snapshot(snapshot: &StatusSnapshot, mask: bool) -> Self {
        let current_proxy = match snapshot.current_proxy.as_deref() {
            Some(proxy) if mask => mask_proxy(proxy),
            Some(proxy) => proxy.to_string(),
            None => PLACEHOLDER.to_string(),
        };

        Self {
            status: snapshot.status,
            current_query: snapshot
                .current_query
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            current_proxy,
            processed: snapshot.processed,
            total_queries: snapshot.total_queries,
            success_count: snapshot.success_count,
            failure_count: snapshot.failure_count,
            percent: snapshot.progress_percent(),
        }
    }
}

/// Which commands are available to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub start_enabled: bool,
    pub stop_enabled: bool,
    pub inputs_enabled: bool,
}

impl ControlState {
    /// While a job is active only `stop` is offered; otherwise everything but `stop`
    pub fn for_activity(active: bool) -> Self {
        Self {
            start_enabled: !active,
            stop_enabled: active,
            inputs_enabled: !active,
        }
    }
}
