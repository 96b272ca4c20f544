//! # Metrics Traits
//!
//! Recording, snapshotting and export are separate responsibilities so the
//! retention logic never depends on how counters are consumed.
//!
//! ```text
//!   ┌──────────────────────────────┐
//!   │  RetentionMetricsRecorder    │  written from try_insert (shared or
//!   │  insert/admit/reject/evict   │  exclusive mode, hence &self)
//!   └──────────────┬───────────────┘
//!                  │
//!     ┌────────────┴─────────────┐
//!     ▼                          ▼
//!   MetricsSnapshotProvider<S>   MetricsExporter<S>
//!   (bench/test)                 (production monitoring)
//! ```

/// Counters recorded by a retention set.
///
/// Methods take `&self`: the rejection fast path runs under shared mode, so
/// recorders must be internally synchronized.
pub trait RetentionMetricsRecorder {
    fn record_insert_call(&self);
    fn record_admitted(&self);
    fn record_fast_reject(&self);
    fn record_recheck_reject(&self);
    fn record_duplicate_reject(&self);
    fn record_eviction(&self);
}

/// Produces a point-in-time snapshot of recorded metrics.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
