//! Failure statistics tracking.
//!
//! Thread-safe counters for person-feed failures during one ranking fetch.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Thread-safe failure counters, one per [`FailureKind`].
///
/// All kinds are initialized to zero on creation, so lookups never miss.
pub struct FetchStats {
    attempted: AtomicUsize,
    failures: HashMap<FailureKind, AtomicUsize>,
}

impl FetchStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in FailureKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }
        FetchStats {
            attempted: AtomicUsize::new(0),
            failures,
        }
    }

    /// Records one lookup sent to the feed.
    pub fn record_attempt(&self) {
        self.attempted.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment a failure counter.
    pub fn increment_failure(&self, kind: FailureKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in FetchStats initialization.",
                kind
            );
        }
    }

    pub fn attempted(&self) -> usize {
        self.attempted.load(Ordering::SeqCst)
    }

    /// Get the count for a failure kind.
    pub fn get_failure_count(&self, kind: FailureKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_failures(&self) -> usize {
        self.failures
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }

    /// Logs a one-line summary of the non-zero failure counters.
    pub fn log_summary(&self, context: &str) {
        let total = self.total_failures();
        if total == 0 {
            log::debug!("{}: {} lookups, no failures", context, self.attempted());
            return;
        }
        let breakdown: Vec<String> = FailureKind::iter()
            .filter_map(|kind| {
                let count = self.get_failure_count(kind);
                (count > 0).then(|| format!("{} {}", count, kind))
            })
            .collect();
        log::warn!(
            "{}: {} of {} lookups failed ({})",
            context,
            total,
            self.attempted(),
            breakdown.join(", ")
        );
    }
}

impl Default for FetchStats {
    fn default() -> Self {
        Self::new()
    }
}
