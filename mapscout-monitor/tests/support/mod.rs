//! Scripted backend and recording sink shared by the scenario tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use mapscout_client::{ClientError, Result};
use mapscout_core::domain::job::JobStatus;
use mapscout_core::domain::log::{LogLevel, LogLine};
use mapscout_core::domain::record::BusinessRecord;
use mapscout_core::domain::snapshot::StatusSnapshot;
use mapscout_core::dto::job::{StartAck, StartJob, StopAck};
use mapscout_monitor::{ControlState, JobBackend, RenderSink, StatusPanel, TerminalEvent};

/// How the backend answers `/start` and `/upload`
#[derive(Debug, Clone)]
pub enum StartReply {
    Ack(u64),
    Reject(u16, &'static str),
    Unreachable,
}

/// One scripted `/status` answer
#[derive(Debug, Clone)]
pub enum Poll {
    Snapshot(StatusSnapshot),
    Fail,
}

/// Backend that replays a fixed script of status answers
///
/// Each fetch takes its answer from the script when it is issued and returns
/// it after its delay. Once the script is exhausted the last snapshot is
/// repeated forever.
pub struct ScriptedBackend {
    start_reply: StartReply,
    script: Mutex<VecDeque<Poll>>,
    last: Mutex<Option<StatusSnapshot>>,
    fetch_delay: Duration,
    fetch_delays: Mutex<VecDeque<Duration>>,
    pub starts: AtomicUsize,
    pub stops: AtomicUsize,
    pub fetches: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

/// Counts a fetch as in flight until it completes or is dropped
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize, max: &AtomicUsize) -> Self {
        let now = counter.fetch_add(1, Ordering::SeqCst) + 1;
        max.fetch_max(now, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl ScriptedBackend {
    pub fn new(start_reply: StartReply, script: Vec<Poll>) -> Self {
        Self {
            start_reply,
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
            fetch_delay: Duration::ZERO,
            fetch_delays: Mutex::new(VecDeque::new()),
            starts: AtomicUsize::new(0),
            stops: AtomicUsize::new(0),
            fetches: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Delays for the first fetches, in call order; later fetches use the
    /// fixed delay
    pub fn with_fetch_delays(self, delays: Vec<Duration>) -> Self {
        *self.fetch_delays.lock().unwrap() = delays.into();
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Fetches currently pending
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Largest number of fetches that were pending at the same time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn next_answer(&self) -> Result<StatusSnapshot> {
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Poll::Snapshot(snapshot)) => {
                *self.last.lock().unwrap() = Some(snapshot.clone());
                Ok(snapshot)
            }
            Some(Poll::Fail) => Err(ClientError::ParseError("missing field `results`".into())),
            None => self
                .last
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| ClientError::rejected(503, "no script")),
        }
    }

    fn reply(&self) -> Result<StartAck> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        match &self.start_reply {
            StartReply::Ack(query_count) => Ok(StartAck {
                message: Some("Scraping started".into()),
                query_count: *query_count,
            }),
            StartReply::Reject(status, message) => Err(ClientError::rejected(*status, *message)),
            StartReply::Unreachable => Err(ClientError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }
}

#[async_trait]
impl JobBackend for ScriptedBackend {
    async fn start(&self, _job: &StartJob) -> Result<StartAck> {
        self.reply()
    }

    async fn upload(&self, _path: &Path) -> Result<StartAck> {
        self.reply()
    }

    async fn stop(&self) -> Result<StopAck> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        Ok(StopAck {
            message: "Scraping stopped".into(),
        })
    }

    async fn fetch_status(&self) -> Result<StatusSnapshot> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let _pending = InFlight::enter(&self.in_flight, &self.max_in_flight);

        let answer = self.next_answer();
        let delay = self
            .fetch_delays
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.fetch_delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        answer
    }
}

/// Sink that remembers everything it was told
#[derive(Default)]
pub struct RecordingSink {
    pub records: Mutex<Vec<String>>,
    pub logs: Mutex<Vec<LogLine>>,
    pub progress: Mutex<Vec<(u64, u64)>>,
    pub panels: Mutex<Vec<StatusPanel>>,
    pub controls: Mutex<Vec<ControlState>>,
    pub finals: Mutex<Vec<TerminalEvent>>,
    pub resets: AtomicUsize,
}

impl RecordingSink {
    pub fn record_names(&self) -> Vec<String> {
        self.records.lock().unwrap().clone()
    }

    pub fn final_events(&self) -> Vec<TerminalEvent> {
        self.finals.lock().unwrap().clone()
    }

    pub fn last_controls(&self) -> Option<ControlState> {
        self.controls.lock().unwrap().last().copied()
    }

    pub fn log_messages(&self, level: LogLevel) -> Vec<String> {
        self.logs
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.level == level)
            .map(|line| line.message.clone())
            .collect()
    }
}

impl RenderSink for RecordingSink {
    fn reset(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
        self.records.lock().unwrap().clear();
    }

    fn append_record(&self, record: &BusinessRecord) {
        self.records
            .lock()
            .unwrap()
            .push(record.display_name().to_string());
    }

    fn append_log_line(&self, line: &LogLine) {
        self.logs.lock().unwrap().push(line.clone());
    }

    fn set_progress(&self, processed: u64, total: u64) {
        self.progress.lock().unwrap().push((processed, total));
    }

    fn show_status(&self, panel: &StatusPanel) {
        self.panels.lock().unwrap().push(panel.clone());
    }

    fn set_controls(&self, controls: ControlState) {
        self.controls.lock().unwrap().push(controls);
    }

    fn finalize(&self, event: &TerminalEvent) {
        self.finals.lock().unwrap().push(event.clone());
    }
}

pub fn running(processed: u64, total: u64, results: Vec<BusinessRecord>) -> Poll {
    Poll::Snapshot(StatusSnapshot {
        status: JobStatus::Running,
        processed,
        total_queries: total,
        success_count: processed,
        current_query: Some("cafe - 10001".into()),
        current_proxy: Some("203.0.113.45:8080".into()),
        results,
        ..Default::default()
    })
}

pub fn finished(status: JobStatus, total: u64, results: Vec<BusinessRecord>) -> Poll {
    Poll::Snapshot(StatusSnapshot {
        status,
        processed: total,
        total_queries: total,
        success_count: total,
        results,
        ..Default::default()
    })
}

pub fn biz(name: &str, phone: &str) -> BusinessRecord {
    BusinessRecord::new(name, phone)
}
