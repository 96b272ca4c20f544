use std::sync::atomic::{AtomicU64, Ordering};

use crate::metrics::snapshot::RetentionMetricsSnapshot;
use crate::metrics::traits::{MetricsReset, RetentionMetricsRecorder};

/// Atomic counters for a retention set.
///
/// Counters use relaxed ordering: they are observational and never drive
/// admission decisions.
#[derive(Debug, Default)]
pub struct RetentionMetrics {
    insert_calls: AtomicU64,
    admitted: AtomicU64,
    fast_rejects: AtomicU64,
    recheck_rejects: AtomicU64,
    duplicate_rejects: AtomicU64,
    evictions: AtomicU64,
}

impl RetentionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures counters together with the supplied gauges.
    pub fn snapshot_with(&self, len: usize, capacity: usize) -> RetentionMetricsSnapshot {
        RetentionMetricsSnapshot {
            insert_calls: self.insert_calls.load(Ordering::Relaxed),
            admitted: self.admitted.load(Ordering::Relaxed),
            fast_rejects: self.fast_rejects.load(Ordering::Relaxed),
            recheck_rejects: self.recheck_rejects.load(Ordering::Relaxed),
            duplicate_rejects: self.duplicate_rejects.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            len,
            capacity,
        }
    }
}

impl RetentionMetricsRecorder for RetentionMetrics {
    #[inline]
    fn record_insert_call(&self) {
        self.insert_calls.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    fn record_admitted(&self) {
        self.admitted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    fn record_fast_reject(&self) {
        self.fast_rejects.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    fn record_recheck_reject(&self) {
        self.recheck_rejects.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    fn record_duplicate_reject(&self) {
        self.duplicate_rejects.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }
}

impl MetricsReset for RetentionMetrics {
    fn reset_metrics(&self) {
        for counter in [
            &self.insert_calls,
            &self.admitted,
            &self.fast_rejects,
            &self.recheck_rejects,
            &self.duplicate_rejects,
            &self.evictions,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_record_and_snapshot() {
        let m = RetentionMetrics::new();
        m.record_insert_call();
        m.record_insert_call();
        m.record_admitted();
        m.record_fast_reject();
        m.record_eviction();

        let snap = m.snapshot_with(3, 5);
        assert_eq!(snap.insert_calls, 2);
        assert_eq!(snap.admitted, 1);
        assert_eq!(snap.fast_rejects, 1);
        assert_eq!(snap.evictions, 1);
        assert_eq!(snap.len, 3);
        assert_eq!(snap.capacity, 5);
    }

    #[test]
    fn metrics_reset_zeroes_counters() {
        let m = RetentionMetrics::new();
        m.record_insert_call();
        m.record_duplicate_reject();
        m.record_recheck_reject();
        m.reset_metrics();
        assert_eq!(m.snapshot_with(0, 0), RetentionMetricsSnapshot::default());
    }
}
