//! Popularity tracking for taken usernames

use crate::registry::canonicalize;
use crate::types::AttemptSnapshot;
use parking_lot::RwLock;
use std::cmp::Ordering as CmpOrdering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-username count of availability checks that found the name taken.
///
/// Existing keys are bumped under the shared read lock with an atomic add, so
/// concurrent callers only serialize on the first attempt for a new name.
#[derive(Debug, Default)]
pub struct AttemptCounter {
    counts: RwLock<HashMap<String, AtomicU64>>,
}

impl AttemptCounter {
    /// Create an empty counter table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one attempt for `name` and return the new count
    pub fn record_attempt(&self, name: &str) -> u64 {
        self.record_canonical(canonicalize(name))
    }

    /// Record one attempt for a key that is already canonical
    pub(crate) fn record_canonical(&self, key: String) -> u64 {
        {
            let counts = self.counts.read();
            if let Some(count) = counts.get(&key) {
                return count.fetch_add(1, Ordering::AcqRel) + 1;
            }
        }

        // Another writer may have inserted the key between the two locks;
        // `entry` keeps its count instead of replacing it.
        let mut counts = self.counts.write();
        counts
            .entry(key)
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::AcqRel)
            + 1
    }

    /// Current count for `name`, zero when never attempted
    pub fn count(&self, name: &str) -> u64 {
        self.counts
            .read()
            .get(&canonicalize(name))
            .map_or(0, |count| count.load(Ordering::Acquire))
    }

    /// Username with the highest count.
    ///
    /// Ties go to the lexicographically smallest username. Returns `None`
    /// when nothing has been recorded.
    pub fn most_attempted(&self) -> Option<String> {
        let counts = self.counts.read();
        let leader = counts
            .iter()
            .map(|(name, count)| (name.as_str(), count.load(Ordering::Acquire)))
            .min_by(|a, b| rank(*a, *b))
            .map(|(name, _)| name.to_string());
        leader
    }

    /// Number of distinct usernames with at least one attempt
    pub fn len(&self) -> usize {
        self.counts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.read().is_empty()
    }

    /// Copy the table, sorted by username
    pub fn snapshot(&self) -> AttemptSnapshot {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .read()
            .iter()
            .map(|(name, count)| (name.clone(), count.load(Ordering::Acquire)))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let total_attempts = entries.iter().map(|(_, count)| count).sum();
        AttemptSnapshot {
            entries,
            total_attempts,
        }
    }
}

/// Higher count first, then smaller username
fn rank(a: (&str, u64), b: (&str, u64)) -> CmpOrdering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}
