//! Terminal rendering
//!
//! `ConsoleSink` prints new records as table rows, the live log and status
//! changes; `MapSink` tracks marker positions.

mod log;
mod map;
mod status;
mod table;

pub use log::format_log_line;
pub use map::MapSink;
pub use status::format_panel;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use colored::*;
use mapscout_core::domain::log::LogLine;
use mapscout_core::domain::record::BusinessRecord;
use mapscout_monitor::{RenderSink, StatusPanel, TerminalEvent};

/// Sink writing a run to stdout
#[derive(Default)]
pub struct ConsoleSink {
    rows: AtomicUsize,
    last_panel: Mutex<Option<StatusPanel>>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for ConsoleSink {
    fn reset(&self) {
        self.rows.store(0, Ordering::SeqCst);
        *self
            .last_panel
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn append_record(&self, record: &BusinessRecord) {
        let position = self.rows.fetch_add(1, Ordering::SeqCst) + 1;
        if position == 1 {
            println!("{}", table::header().bold());
        }
        println!("{}", table::format_row(position, record));
    }

    fn append_log_line(&self, line: &LogLine) {
        println!("{}", format_log_line(line));
    }

    fn show_status(&self, panel: &StatusPanel) {
        let mut last = self
            .last_panel
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if last.as_ref() != Some(panel) {
            println!("{}", format_panel(panel));
            *last = Some(panel.clone());
        }
    }

    fn finalize(&self, event: &TerminalEvent) {
        for line in log::terminal_messages(event) {
            println!("{}", format_log_line(&line));
        }
    }
}
