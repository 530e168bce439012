//! Render state
//!
//! Everything the monitor remembers about the current run. It is reset when
//! a job starts and mutated only by snapshot application, which runs under
//! the engine's lock, one snapshot at a time.

use std::collections::HashSet;

use crate::reconciler::IdentityKey;

/// Local state of one job run
#[derive(Debug, Default)]
pub struct RenderState {
    /// Identities of every record already handed to the sinks
    seen: HashSet<IdentityKey>,
    /// Highest `processed` value applied so far
    last_processed: u64,
    /// Whether snapshots are currently accepted
    active: bool,
    /// Set once the terminal event of this run has been emitted
    finalized: bool,
    /// Incremented on every reset; stale callbacks carry an older value
    generation: u64,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the previous run and returns the new run's generation
    pub fn reset(&mut self) -> u64 {
        self.seen.clear();
        self.last_processed = 0;
        self.active = false;
        self.finalized = false;
        self.generation += 1;
        self.generation
    }

    /// Starts accepting snapshots for the current generation
    pub fn activate(&mut self) -> u64 {
        self.active = true;
        self.generation
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// True when a snapshot fetched for `generation` may still be applied
    pub fn accepts(&self, generation: u64) -> bool {
        self.active && !self.finalized && self.generation == generation
    }

    /// Records an identity, returning false when it was already rendered
    pub(crate) fn remember(&mut self, key: IdentityKey) -> bool {
        self.seen.insert(key)
    }

    pub fn is_rendered(&self, key: &IdentityKey) -> bool {
        self.seen.contains(key)
    }

    pub(crate) fn set_last_processed(&mut self, processed: u64) {
        self.last_processed = processed;
    }

    /// Marks the run finalized, returning false if it already was
    pub(crate) fn finalize(&mut self) -> bool {
        !std::mem::replace(&mut self.finalized, true)
    }

    pub fn rendered_count(&self) -> usize {
        self.seen.len()
    }

    pub fn last_processed(&self) -> u64 {
        self.last_processed
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
