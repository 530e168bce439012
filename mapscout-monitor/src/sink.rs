//! Presentation sink contracts
//!
//! Sinks are passive: the engine tells them what changed and they render it.
//! Every method has a no-op default so a sink only implements the events it
//! cares about (a map has no use for log lines, a table ignores progress).

use std::sync::Arc;

use mapscout_core::domain::log::LogLine;
use mapscout_core::domain::record::BusinessRecord;

use crate::completion::TerminalEvent;
use crate::panel::{ControlState, StatusPanel};

/// A consumer of monitor events (results table, map, live log, ...)
pub trait RenderSink: Send + Sync {
    /// Drops everything rendered for the previous run
    fn reset(&self) {}

    /// A record not rendered before in this run
    fn append_record(&self, _record: &BusinessRecord) {}

    fn append_log_line(&self, _line: &LogLine) {}

    fn set_progress(&self, _processed: u64, _total: u64) {}

    fn show_status(&self, _panel: &StatusPanel) {}

    fn set_controls(&self, _controls: ControlState) {}

    /// The run reached `completed` or `stopped`; called once per run
    fn finalize(&self, _event: &TerminalEvent) {}
}

/// Fans every event out to a list of sinks, in registration order
#[derive(Clone, Default)]
pub struct SinkSet {
    sinks: Vec<Arc<dyn RenderSink>>,
}

impl SinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sink, builder style
    pub fn with(mut self, sink: Arc<dyn RenderSink>) -> Self {
        self.push(sink);
        self
    }

    pub fn push(&mut self, sink: Arc<dyn RenderSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl RenderSink for SinkSet {
    fn reset(&self) {
        self.sinks.iter().for_each(|sink| sink.reset());
    }

    fn append_record(&self, record: &BusinessRecord) {
        self.sinks.iter().for_each(|sink| sink.append_record(record));
    }

    fn append_log_line(&self, line: &LogLine) {
        self.sinks.iter().for_each(|sink| sink.append_log_line(line));
    }

    fn set_progress(&self, processed: u64, total: u64) {
        self.sinks
            .iter()
            .for_each(|sink| sink.set_progress(processed, total));
    }

    fn show_status(&self, panel: &StatusPanel) {
        self.sinks.iter().for_each(|sink| sink.show_status(panel));
    }

    fn set_controls(&self, controls: ControlState) {
        self.sinks.iter().for_each(|sink| sink.set_controls(controls));
    }

    fn finalize(&self, event: &TerminalEvent) {
        self.sinks.iter().for_each(|sink| sink.finalize(event));
    }
}
