//! Completion detection
//!
//! Watches snapshot statuses for `completed` or `stopped` and emits the
//! run's terminal event exactly once. The guard lives in [`RenderState`], so
//! a slow response that arrives after finalization cannot finalize again.

use mapscout_core::domain::job::JobStatus;
use mapscout_core::domain::snapshot::StatusSnapshot;

use crate::state::RenderState;

/// Final summary of a job run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalEvent {
    /// `Completed` or `Stopped`
    pub status: JobStatus,
    pub success_count: u64,
    pub failure_count: u64,
    /// Number of records in the final snapshot
    pub final_result_count: usize,
    /// Number of distinct identities rendered during the run
    pub rendered_count: usize,
}

/// What a consumer should tell the user about a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    CompletedWithResults(usize),
    CompletedEmpty,
    Stopped(usize),
}

impl TerminalEvent {
    pub fn outcome(&self) -> Outcome {
        match (self.status, self.final_result_count) {
            (JobStatus::Stopped, count) => Outcome::Stopped(count),
            (_, 0) => Outcome::CompletedEmpty,
            (_, count) => Outcome::CompletedWithResults(count),
        }
    }

    /// Whether any query failed during the run
    pub fn has_failures(&self) -> bool {
        self.failure_count > 0
    }
}

/// Emits the terminal event of a run
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionDetector;

impl CompletionDetector {
    pub fn new() -> Self {
        Self
    }

    /// Returns the terminal event the first time a terminal status is seen
    pub fn observe(
        &self,
        state: &mut RenderState,
        snapshot: &StatusSnapshot,
    ) -> Option<TerminalEvent> {
        if !snapshot.status.is_terminal() || !state.finalize() {
            return None;
        }

        Some(TerminalEvent {
            status: snapshot.status,
            success_count: snapshot.success_count,
            failure_count: snapshot.failure_count,
            final_result_count: snapshot.results.len(),
            rendered_count: state.rendered_count(),
        })
    }
}
