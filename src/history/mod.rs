//! In-memory result log with age-based retention.
//!
//! # Responsibilities
//! - Append exactly one entry per executed probe
//! - Evict entries past the retention window, lazily, before each append
//! - Stay safe under concurrent trigger invocations
//!
//! # Design Decisions
//! - Bounded by age, not count; traffic-driven eviction means a quiet
//!   monitor simply holds its last few entries until the next check
//! - Eviction boundary: strictly older than the cutoff is evicted, an entry
//!   exactly at the cutoff is retained
//! - Process-wide state with no persistence; a restart starts empty. If
//!   durability is ever needed, an external store can sit behind this same
//!   append/evict/len surface

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;

use crate::probe::ProbeResult;

/// Ordered, age-bounded log of probe outcomes.
///
/// Appends hold a single mutex, which is the only shared mutable state in
/// the system; overlapping trigger invocations serialize here.
#[derive(Debug, Default)]
pub struct ResultLog {
    entries: Mutex<VecDeque<ProbeResult>>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one outcome. Callers run [`evict_older_than`](Self::evict_older_than)
    /// first; append itself never drops entries.
    pub fn append(&self, result: ProbeResult) {
        self.lock().push_back(result);
    }

    /// Remove every entry strictly older than `max_age` relative to now.
    /// Returns the number of entries removed.
    pub fn evict_older_than(&self, max_age: Duration) -> usize {
        let Ok(max_age) = chrono::Duration::from_std(max_age) else {
            // a window too large for chrono arithmetic cannot expire anything
            return 0;
        };
        self.evict_with_cutoff(Utc::now() - max_age)
    }

    fn evict_with_cutoff(&self, cutoff: chrono::DateTime<Utc>) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|entry| entry.timestamp >= cutoff);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<ProbeResult>> {
        // a panic while holding the lock leaves plain data, not a broken
        // invariant, so recover the guard instead of propagating poison
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
