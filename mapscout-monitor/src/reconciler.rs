//! Result reconciliation
//!
//! Decides which records of a snapshot have not been rendered yet. The
//! backend's result list only grows, so reconciliation is purely additive:
//! a record is emitted the first time its identity is seen and never again
//! within the same run.

use std::fmt;
use std::str::FromStr;

use mapscout_core::domain::record::BusinessRecord;

use crate::state::RenderState;

/// How a record's identity is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityPolicy {
    /// Index within the results array. Exact duplicates render as separate
    /// rows.
    #[default]
    Positional,
    /// Normalised name + phone. Exact duplicates collapse into one row.
    Content,
    /// Google CID, falling back to normalised name + full address.
    Cid,
}

/// Identity of a rendered record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    Position(usize),
    Content(String),
}

impl IdentityPolicy {
    /// Computes the identity of the record at `index`
    ///
    /// Content-based policies fall back to the position when every key field
    /// is "not given", so such records are never collapsed into each other.
    pub fn key(self, index: usize, record: &BusinessRecord) -> IdentityKey {
        let content = match self {
            IdentityPolicy::Positional => None,
            IdentityPolicy::Content => {
                normalized_key(&[record.name.as_deref(), record.phone.as_deref()])
            }
            IdentityPolicy::Cid => record
                .cid
                .as_deref()
                .map(|cid| format!("cid:{}", cid.trim()))
                .or_else(|| {
                    normalized_key(&[record.name.as_deref(), record.full_address.as_deref()])
                        .map(|key| format!("addr:{}", key))
                }),
        };

        content
            .map(IdentityKey::Content)
            .unwrap_or(IdentityKey::Position(index))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IdentityPolicy::Positional => "positional",
            IdentityPolicy::Content => "content",
            IdentityPolicy::Cid => "cid",
        }
    }
}

fn normalized_key(parts: &[Option<&str>]) -> Option<String> {
    if parts.iter().all(Option::is_none) {
        return None;
    }

    let normalized: Vec<String> = parts
        .iter()
        .map(|part| part.map(|s| s.trim().to_lowercase()).unwrap_or_default())
        .collect();
    Some(normalized.join("|"))
}

impl fmt::Display for IdentityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positional" | "index" => Ok(IdentityPolicy::Positional),
            "content" | "name_phone" => Ok(IdentityPolicy::Content),
            "cid" => Ok(IdentityPolicy::Cid),
            other => Err(format!(
                "unknown identity policy '{}', expected positional, content or cid",
                other
            )),
        }
    }
}

/// Whether a snapshot's `processed` count warrants a progress log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressCadence {
    /// Strictly greater than the last applied value
    Advanced,
    /// Same as the last applied value
    Unchanged,
    /// Lower than the last applied value: an older snapshot arrived late
    Stale,
}

/// Computes the new records of each snapshot
#[derive(Debug, Clone, Default)]
pub struct ResultReconciler {
    policy: IdentityPolicy,
}

impl ResultReconciler {
    pub fn new(policy: IdentityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> IdentityPolicy {
        self.policy
    }

    /// Returns the records not rendered yet, in their original order, and
    /// remembers their identities
    pub fn reconcile<'a>(
        &self,
        state: &mut RenderState,
        results: &'a [BusinessRecord],
    ) -> Vec<&'a BusinessRecord> {
        let mut fresh = Vec::new();

        for (index, record) in results.iter().enumerate() {
            if state.remember(self.policy.key(index, record)) {
                fresh.push(record);
            }
        }

        fresh
    }

    /// Tracks `processed` for progress log cadence
    ///
    /// A stale value leaves the tracked count untouched.
    pub fn observe_progress(&self, state: &mut RenderState, processed: u64) -> ProgressCadence {
        let last = state.last_processed();

        if processed > last {
            state.set_last_processed(processed);
            ProgressCadence::Advanced
        } else if processed == last {
            ProgressCadence::Unchanged
        } else {
            ProgressCadence::Stale
        }
    }
}
