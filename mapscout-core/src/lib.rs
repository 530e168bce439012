//! Mapscout Core
//!
//! Shared types for the Mapscout scraping monitor.
//!
//! This crate contains:
//! - Domain types: job status, business records, status snapshots, log lines
//! - DTOs: request and response bodies exchanged with the job backend

pub mod domain;
pub mod dto;
