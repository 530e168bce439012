//! Snapshot application
//!
//! `MonitorCore` owns the render state and the sinks. Every fetched
//! snapshot goes through [`MonitorCore::apply`], which is the only place
//! where state is mutated or sinks are driven by polling.

use mapscout_core::domain::log::LogLine;
use mapscout_core::domain::snapshot::StatusSnapshot;
use tokio::sync::watch;
use tracing::debug;

use crate::completion::{CompletionDetector, TerminalEvent};
use crate::panel::{ControlState, StatusPanel};
use crate::reconciler::{IdentityPolicy, ProgressCadence, ResultReconciler};
use crate::sink::{RenderSink, SinkSet};
use crate::state::RenderState;

/// What applying a snapshot did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The run is inactive, finalized, or the snapshot belongs to an older run
    Ignored,
    /// Snapshot applied; `new_records` were handed to the sinks
    Applied { new_records: usize },
    /// Snapshot applied and the run reached its terminal state
    Finalized(TerminalEvent),
}

/// State, reconciliation and sinks of the monitor
pub struct MonitorCore {
    state: RenderState,
    reconciler: ResultReconciler,
    detector: CompletionDetector,
    sinks: SinkSet,
    mask_proxy: bool,
    terminal: watch::Sender<Option<TerminalEvent>>,
}

impl MonitorCore {
    pub fn new(policy: IdentityPolicy, mask_proxy: bool, sinks: SinkSet) -> Self {
        let (terminal, _) = watch::channel(None);
        Self {
            state: RenderState::new(),
            reconciler: ResultReconciler::new(policy),
            detector: CompletionDetector::new(),
            sinks,
            mask_proxy,
            terminal,
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Forgets the previous run: clears state and sinks, hides terminal UI
    ///
    /// Receivers of the previous run's terminal event see the channel close.
    pub fn reset(&mut self) -> u64 {
        let generation = self.state.reset();
        self.terminal = watch::channel(None).0;
        self.sinks.reset();
        self.sinks.set_controls(ControlState::for_activity(false));
        generation
    }

    pub fn activate(&mut self) -> u64 {
        self.state.activate()
    }

    pub fn deactivate(&mut self) {
        self.state.deactivate();
    }

    /// Receiver for the current run's terminal event
    pub fn subscribe_terminal(&self) -> watch::Receiver<Option<TerminalEvent>> {
        self.terminal.subscribe()
    }

    pub fn log(&self, line: LogLine) {
        self.sinks.append_log_line(&line);
    }

    pub fn set_controls(&self, controls: ControlState) {
        self.sinks.set_controls(controls);
    }

    /// Applies a snapshot fetched on behalf of run `generation`
    ///
    /// New records go to the sinks first (each with its own log line), then
    /// progress, then completion.
    /// A snapshot whose `processed` is lower than one already applied still
    /// contributes its records but does not touch progress display.
    pub fn apply(&mut self, generation: u64, snapshot: &StatusSnapshot) -> TickOutcome {
        if !self.state.accepts(generation) {
            debug!(
                "Ignoring snapshot for generation {} (current {}, active {})",
                generation,
                self.state.generation(),
                self.state.is_active()
            );
            return TickOutcome::Ignored;
        }

        let fresh = self.reconciler.reconcile(&mut self.state, &snapshot.results);
        for record in &fresh {
            self.sinks.append_record(record);
            self.sinks.append_log_line(&LogLine::success(format!(
                "Found: {}",
                record.display_name()
            )));
        }

        match self
            .reconciler
            .observe_progress(&mut self.state, snapshot.processed)
        {
            ProgressCadence::Advanced => {
                self.sinks.append_log_line(&LogLine::info(format!(
                    "Processed {}/{} queries ({}%)",
                    snapshot.processed,
                    snapshot.total_queries,
                    snapshot.progress_percent()
                )));
                self.refresh_display(snapshot);
            }
            ProgressCadence::Unchanged => self.refresh_display(snapshot),
            ProgressCadence::Stale => debug!(
                "Stale snapshot (processed {} < {}), progress left as is",
                snapshot.processed,
                self.state.last_processed()
            ),
        }

        if let Some(event) = self.detector.observe(&mut self.state, snapshot) {
            self.state.deactivate();
            self.sinks.set_controls(ControlState::for_activity(false));
            self.sinks.finalize(&event);
            self.terminal.send_replace(Some(event.clone()));
            return TickOutcome::Finalized(event);
        }

        TickOutcome::Applied {
            new_records: fresh.len(),
        }
    }

    fn refresh_display(&self, snapshot: &StatusSnapshot) {
        self.sinks
            .set_progress(snapshot.processed, snapshot.total_queries);
        self.sinks
            .show_status(&StatusPanel::from_snapshot(snapshot, self.mask_proxy));
    }
}
