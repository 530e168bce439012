//! Core domain types
//!
//! These types describe what the job backend reports about a running
//! scrape and are shared between the HTTP client and the monitor.

pub mod given;
pub mod job;
pub mod log;
pub mod record;
pub mod snapshot;
