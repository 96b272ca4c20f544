/// Point-in-time view of a retention set's counters and gauges.
///
/// `insert_calls` always equals the sum of the four outcome counters
/// (`admitted`, `fast_rejects`, `recheck_rejects`, `duplicate_rejects`) once
/// every in-flight `try_insert` has returned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RetentionMetricsSnapshot {
    pub insert_calls: u64,
    pub admitted: u64,
    /// Rejected under shared mode without taking the upgradeable lock.
    pub fast_rejects: u64,
    /// Passed the shared pre-check but lost the re-check after the upgrade.
    pub recheck_rejects: u64,
    pub duplicate_rejects: u64,
    pub evictions: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

impl RetentionMetricsSnapshot {
    /// Total rejections across all causes.
    pub fn rejected(&self) -> u64 {
        self.fast_rejects + self.recheck_rejects + self.duplicate_rejects
    }

    /// Fraction of calls admitted, or `0.0` before any call.
    pub fn admission_ratio(&self) -> f64 {
        if self.insert_calls == 0 {
            0.0
        } else {
            self.admitted as f64 / self.insert_calls as f64
        }
    }
}
