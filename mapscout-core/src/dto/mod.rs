//! Data Transfer Objects for talking to the job backend
//!
//! Request bodies sent to `/start` and the small acknowledgement bodies
//! returned by `/start`, `/upload` and `/stop`.

pub mod download;
pub mod job;
