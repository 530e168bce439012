//! Status poller
//!
//! Fetches `/status` immediately on start and then on a fixed interval,
//! feeding every snapshot to the [`MonitorCore`]. The fetch runs in its own
//! task so a slow response never delays the schedule, but at most one fetch
//! is in flight: a tick that finds the previous fetch still pending is
//! skipped, and a fetch that exceeds the request timeout counts as failed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Notify};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::backend::JobBackend;
use crate::engine::{MonitorCore, TickOutcome};
use crate::error::PollError;

/// Fixed-interval status poller: `Idle -> Active -> Idle`
pub struct Poller {
    backend: Arc<dyn JobBackend>,
    core: Arc<Mutex<MonitorCore>>,
    interval: Duration,
    fetch_timeout: Duration,
    /// Timer task of the current activation
    timer: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn new(
        backend: Arc<dyn JobBackend>,
        core: Arc<Mutex<MonitorCore>>,
        interval: Duration,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            backend,
            core,
            interval,
            fetch_timeout,
            timer: None,
        }
    }

    /// True while the timer task is alive
    ///
    /// Becomes false on [`Poller::stop`] and shortly after the run reaches
    /// its terminal state.
    pub fn is_active(&self) -> bool {
        self.timer
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }

    /// Activates polling for the core's current run
    ///
    /// Calling it while already active replaces the previous timer, so there
    /// is never more than one timer chain.
    pub async fn start(&mut self) {
        if let Some(previous) = self.timer.take() {
            debug!("Replacing previous poll timer");
            previous.abort();
        }

        let generation = self.core.lock().await.activate();

        info!(
            "Starting status polling (generation {}, interval: {:?})",
            generation, self.interval
        );

        self.timer = Some(tokio::spawn(Self::run(
            Arc::clone(&self.backend),
            Arc::clone(&self.core),
            self.interval,
            self.fetch_timeout,
            generation,
        )));
    }

    /// Cancels the timer and deactivates the core; a no-op when idle
    ///
    /// A fetch still in flight is aborted together with the timer.
    pub async fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            debug!("Stopping status polling");
            timer.abort();
        }
        self.core.lock().await.deactivate();
    }

    /// Timer loop of one activation
    ///
    /// The in-flight fetch lives in a `JoinSet` owned by this loop, so it is
    /// aborted whenever the loop ends or its task is aborted.
    async fn run(
        backend: Arc<dyn JobBackend>,
        core: Arc<Mutex<MonitorCore>>,
        period: Duration,
        fetch_timeout: Duration,
        generation: u64,
    ) {
        let finished = Arc::new(Notify::new());
        let mut in_flight = JoinSet::new();
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // The first tick completes immediately.
                _ = ticker.tick() => {
                    while in_flight.try_join_next().is_some() {}
                    if !in_flight.is_empty() {
                        debug!("Previous status fetch still pending, skipping tick");
                        continue;
                    }

                    in_flight.spawn(Self::poll_once(
                        Arc::clone(&backend),
                        Arc::clone(&core),
                        fetch_timeout,
                        generation,
                        Arc::clone(&finished),
                    ));
                }
                _ = finished.notified() => {
                    debug!("Run {} finished, poll timer exits", generation);
                    break;
                }
            }
        }
    }

    /// Fetches one snapshot and applies it
    async fn poll_once(
        backend: Arc<dyn JobBackend>,
        core: Arc<Mutex<MonitorCore>>,
        fetch_timeout: Duration,
        generation: u64,
        finished: Arc<Notify>,
    ) {
        let fetched = match time::timeout(fetch_timeout, backend.fetch_status()).await {
            Ok(result) => result.map_err(PollError::from),
            Err(_) => Err(PollError::TimedOut(fetch_timeout)),
        };

        let snapshot = match fetched {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Skipping poll tick: {}", e);
                return;
            }
        };

        let outcome = core.lock().await.apply(generation, &snapshot);

        match outcome {
            TickOutcome::Finalized(event) => {
                info!(
                    "Job {}: {} succeeded, {} failed, {} results",
                    event.status, event.success_count, event.failure_count, event.final_result_count
                );
                finished.notify_one();
            }
            TickOutcome::Applied { new_records } if new_records > 0 => {
                debug!("Rendered {} new record(s)", new_records);
            }
            _ => {}
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
