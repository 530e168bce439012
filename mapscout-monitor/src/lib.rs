//! Mapscout Monitor
//!
//! Follows a long-running scrape on the job backend and keeps a set of
//! presentation sinks (results table, map, live log) up to date without
//! rendering any record twice.
//!
//! Architecture:
//! - State: `RenderState` owns the identities rendered so far plus the
//!   `active` and `finalized` flags
//! - Reconciler: decides which records of a snapshot are new
//! - Completion: emits the terminal event of a run exactly once
//! - Engine: applies one snapshot to the state and the sinks
//! - Poller: fixed-interval timer that fetches snapshots
//! - Controller: start/stop/clear commands and the run lifecycle

pub mod backend;
pub mod completion;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod map;
pub mod mask;
pub mod panel;
pub mod poller;
pub mod reconciler;
pub mod sink;
pub mod state;

pub use backend::JobBackend;
pub use completion::{CompletionDetector, Outcome, TerminalEvent};
pub use config::MonitorConfig;
pub use controller::{JobController, JobHandle, JobRequest};
pub use engine::{MonitorCore, TickOutcome};
pub use error::{ConfigError, PollError, StartError};
pub use map::{Bounds, Marker, MarkerLayer, Viewport};
pub use mask::mask_proxy;
pub use panel::{ControlState, StatusPanel};
pub use poller::Poller;
pub use reconciler::{IdentityKey, IdentityPolicy, ProgressCadence, ResultReconciler};
pub use sink::{RenderSink, SinkSet};
pub use state::RenderState;
