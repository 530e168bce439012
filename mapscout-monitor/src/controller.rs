//! Job controller
//!
//! Top-level command interface of the monitor: `start`, `stop`, `clear`,
//! `attach` and `dispose`. It owns the core and the poller; the rendering
//! layer only sees sink callbacks.

use std::path::PathBuf;
use std::sync::Arc;

use mapscout_client::ClientError;
use mapscout_core::domain::log::LogLine;
use mapscout_core::dto::job::{StartJob, StopAck};
use tokio::sync::{Mutex, watch};
use tracing::{info, warn};
use uuid::Uuid;

use crate::backend::JobBackend;
use crate::completion::TerminalEvent;
use crate::config::MonitorConfig;
use crate::engine::MonitorCore;
use crate::error::StartError;
use crate::panel::ControlState;
use crate::poller::Poller;
use crate::sink::SinkSet;

/// A job request already validated by the input layer
#[derive(Debug, Clone)]
pub enum JobRequest {
    /// Manually entered queries, sent to `/start`
    Queries(StartJob),
    /// CSV/Excel file, sent to `/upload`
    Upload(PathBuf),
}

/// Handle on one monitored run
#[derive(Debug)]
pub struct JobHandle {
    run_id: Uuid,
    query_count: u64,
    terminal: watch::Receiver<Option<TerminalEvent>>,
}

impl JobHandle {
    /// Local identifier of the run, used in diagnostics
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Number of queries the backend accepted, 0 for attached runs
    pub fn query_count(&self) -> u64 {
        self.query_count
    }

    /// Waits for the run's terminal event
    ///
    /// Returns `None` if the run was discarded first (a new start, `clear`,
    /// or the controller being dropped).
    pub async fn finished(&mut self) -> Option<TerminalEvent> {
        self.terminal
            .wait_for(Option::is_some)
            .await
            .ok()
            .and_then(|event| event.clone())
    }
}

/// Orchestrates job runs against the backend
pub struct JobController {
    backend: Arc<dyn JobBackend>,
    core: Arc<Mutex<MonitorCore>>,
    poller: Poller,
}

impl JobController {
    /// Creates a controller rendering into `sinks`
    pub fn new(config: &MonitorConfig, backend: Arc<dyn JobBackend>, sinks: SinkSet) -> Self {
        let core = Arc::new(Mutex::new(MonitorCore::new(
            config.identity_policy,
            config.mask_proxy,
            sinks,
        )));
        let poller = Poller::new(
            Arc::clone(&backend),
            Arc::clone(&core),
            config.poll_interval,
            config.request_timeout,
        );

        Self {
            backend,
            core,
            poller,
        }
    }

    /// Starts a job and begins polling once the backend acknowledges it
    ///
    /// Local state and sinks are reset before the request is sent. On
    /// rejection or network failure the poller stays idle and nothing is
    /// retried.
    pub async fn start(&mut self, request: JobRequest) -> Result<JobHandle, StartError> {
        let terminal = self.begin_run().await;

        let ack = match &request {
            JobRequest::Queries(job) => self.backend.start(job).await,
            JobRequest::Upload(path) => self.backend.upload(path).await,
        };

        let ack = match ack {
            Ok(ack) => ack,
            Err(e) => {
                let err = StartError::from(e);
                warn!("Failed to start job: {}", err);
                self.core.lock().await.log(LogLine::error(err.to_string()));
                return Err(err);
            }
        };

        let run_id = Uuid::new_v4();
        info!("Job {} started with {} queries", run_id, ack.query_count);

        {
            let core = self.core.lock().await;
            core.log(LogLine::success(format!(
                "Scraping started with {} queries",
                ack.query_count
            )));
            core.set_controls(ControlState::for_activity(true));
        }
        self.poller.start().await;

        Ok(JobHandle {
            run_id,
            query_count: ack.query_count,
            terminal,
        })
    }

    /// Follows whatever job the backend is running, without starting one
    pub async fn attach(&mut self) -> JobHandle {
        let terminal = self.begin_run().await;
        let run_id = Uuid::new_v4();
        info!("Attached run {} to the current backend job", run_id);

        self.core
            .lock()
            .await
            .set_controls(ControlState::for_activity(true));
        self.poller.start().await;

        JobHandle {
            run_id,
            query_count: 0,
            terminal,
        }
    }

    /// Asks the backend to stop the job
    ///
    /// Polling continues: the run only ends when a later snapshot reports
    /// the terminal status.
    pub async fn stop(&self) -> Result<StopAck, ClientError> {
        let result = self.backend.stop().await;

        let line = match &result {
            Ok(ack) => LogLine::info(ack.message.clone()),
            Err(e) => LogLine::error(format!("Error stopping scraping: {}", e)),
        };
        self.core.lock().await.log(line);

        result
    }

    /// Stops local polling and clears every sink
    pub async fn clear(&mut self) {
        self.begin_run().await;
    }

    /// Stops local polling for good
    pub async fn dispose(mut self) {
        self.poller.stop().await;
    }

    /// Whether the poller is currently running
    pub fn is_polling(&self) -> bool {
        self.poller.is_active()
    }

    /// Number of records rendered in the current run
    pub async fn rendered_count(&self) -> usize {
        self.core.lock().await.state().rendered_count()
    }

    async fn begin_run(&mut self) -> watch::Receiver<Option<TerminalEvent>> {
        self.poller.stop().await;
        let mut core = self.core.lock().await;
        core.reset();
        core.subscribe_terminal()
    }
}
