//! Thread-safe top-K retention set.
//!
//! ## Insert Protocol
//!
//! ```text
//!   try_insert(key, value)
//!        │
//!        ▼
//!   read()                      shared; runs alongside other readers
//!   admits(key)? ── no ──► false          (fast reject, common case)
//!        │ yes
//!        ▼
//!   upgradable_read()           shared with readers, exclusive among upgraders
//!   admits(key)? ── no ──► false          (state moved on since the read)
//!        │ yes
//!        ▼
//!   upgrade()                   exclusive
//!   duplicate? ── yes ──► false
//!   insert, trim, refresh min
//!        │
//!        ▼
//!   downgrade() ─► release ─► true
//! ```
//!
//! `parking_lot` cannot upgrade a plain read guard, so the first guard is
//! released before the upgradeable one is taken and the pre-check runs again.
use std::fmt;
use std::iter::FusedIterator;

use parking_lot::{RwLock, RwLockUpgradableReadGuard, RwLockWriteGuard};

use crate::builder::RetentionSetBuilder;
use crate::error::ConfigError;
#[cfg(feature = "metrics")]
use crate::metrics::{
    MetricsReset, MetricsSnapshotProvider, RetentionMetrics, RetentionMetricsRecorder,
    RetentionMetricsSnapshot,
};
use crate::order::{Comparer, NaturalOrder};
use crate::retention::retention_core::{Outcome, RetentionCore};

/// Thread-safe container retaining the `capacity` highest-ranked entries.
///
/// Share it by reference (typically `Arc<BoundedRetentionSet<..>>`) with any
/// number of producer threads calling [`try_insert`](Self::try_insert).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use topkeep::retention::BoundedRetentionSet;
///
/// let best = Arc::new(BoundedRetentionSet::new(3));
/// let handles: Vec<_> = (0..4u32)
///     .map(|t| {
///         let best = Arc::clone(&best);
///         thread::spawn(move || {
///             for i in 0..25u32 {
///                 best.try_insert(t * 25 + i, t);
///             }
///         })
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap();
/// }
///
/// let keys: Vec<u32> = best.traverse().map(|(k, _)| k).collect();
/// assert_eq!(keys, vec![97, 98, 99]);
/// ```
pub struct BoundedRetentionSet<K, V, C = NaturalOrder> {
    inner: RwLock<RetentionCore<K, V, C>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: RetentionMetrics,
}

impl<K, V> BoundedRetentionSet<K, V, NaturalOrder>
where
    K: Ord + Clone,
{
    /// Creates an empty set ordered by `K`'s own [`Ord`].
    ///
    /// A capacity of 0 retains nothing, although `try_insert` still reports
    /// success for a call made while the set is empty.
    pub fn new(capacity: usize) -> Self {
        Self::with_comparer(capacity, NaturalOrder)
    }

    /// Creates an empty set from a signed capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is negative.
    pub fn try_new(capacity: i64) -> Result<Self, ConfigError> {
        Self::try_with_comparer(capacity, NaturalOrder)
    }

    /// Returns a builder for a set with the given signed capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use topkeep::retention::BoundedRetentionSet;
    ///
    /// let set = BoundedRetentionSet::<u64, String>::builder(16)
    ///     .reversed()
    ///     .try_build::<u64, String>();
    /// assert!(set.is_ok());
    /// ```
    pub fn builder(capacity: i64) -> RetentionSetBuilder<NaturalOrder> {
        RetentionSetBuilder::new(capacity)
    }
}

impl<K, V, C> BoundedRetentionSet<K, V, C>
where
    K: Clone,
    C: Comparer<K>,
{
    /// Creates an empty set ranked by `comparer`.
    pub fn with_comparer(capacity: usize, comparer: C) -> Self {
        Self::from_core(RetentionCore::with_comparer(capacity, comparer))
    }

    /// Creates an empty set ranked by `comparer` from a signed capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is negative.
    pub fn try_with_comparer(capacity: i64, comparer: C) -> Result<Self, ConfigError> {
        RetentionCore::try_with_comparer(capacity, comparer).map(Self::from_core)
    }

    /// Wraps an existing core, keeping whatever it already retains.
    pub fn from_core(core: RetentionCore<K, V, C>) -> Self {
        Self {
            capacity: core.capacity(),
            inner: RwLock::new(core),
            #[cfg(feature = "metrics")]
            metrics: RetentionMetrics::new(),
        }
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of retained entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns `true` if a key equal to `key` is retained.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.read().contains_key(key)
    }

    /// Returns `true` if `key` currently passes the admission pre-check.
    ///
    /// Advisory: lets a producer skip building an expensive value. The answer
    /// may be stale by the time [`try_insert`](Self::try_insert) runs.
    pub fn would_admit(&self, key: &K) -> bool {
        self.inner.read().admits(key)
    }

    /// Returns a copy of the key a candidate must outrank, once the set is full.
    pub fn threshold(&self) -> Option<K> {
        self.inner.read().threshold().cloned()
    }

    /// Attempts to admit `(key, value)`; returns `true` iff it was admitted.
    ///
    /// Rejects keys already present and, while full, keys that do not rank
    /// strictly above the current minimum. Both rejections return `false`.
    /// Admission into a full set evicts the lowest-ranked entry.
    ///
    /// Blocks only while waiting for the internal lock. Must not be called
    /// from inside this set's comparer.
    pub fn try_insert(&self, key: K, value: V) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        {
            let core = self.inner.read();
            if !core.admits(&key) {
                #[cfg(feature = "metrics")]
                self.metrics.record_fast_reject();
                return false;
            }
        }

        let core = self.inner.upgradable_read();
        if !core.admits(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_recheck_reject();
            return false;
        }

        let mut core = RwLockUpgradableReadGuard::upgrade(core);
        let outcome = core.insert_admissible(key, value);
        let _core = RwLockWriteGuard::downgrade(core);

        match outcome {
            Outcome::Admitted { evicted } => {
                #[cfg(feature = "metrics")]
                {
                    self.metrics.record_admitted();
                    if evicted {
                        self.metrics.record_eviction();
                    }
                }
                #[cfg(not(feature = "metrics"))]
                let _ = evicted;
                true
            },
            Outcome::Duplicate => {
                #[cfg(feature = "metrics")]
                self.metrics.record_duplicate_reject();
                false
            },
        }
    }

    /// Returns the retained entries in ascending key order.
    ///
    /// The entries are copied under shared mode, so the sequence is a
    /// consistent point-in-time snapshot: it never reflects inserts that
    /// complete after this call returns. Call again for fresh contents.
    pub fn traverse(&self) -> Traverse<K, V>
    where
        V: Clone,
    {
        let core = self.inner.read();
        let snapshot: Vec<(K, V)> = core.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        Traverse {
            inner: snapshot.into_iter(),
        }
    }

    /// Consumes the set, returning entries in ascending key order.
    pub fn into_sorted_vec(self) -> Vec<(K, V)> {
        self.inner.into_inner().into_sorted_vec()
    }

    /// Consumes the set, returning the single-threaded core.
    pub fn into_core(self) -> RetentionCore<K, V, C> {
        self.inner.into_inner()
    }
}

impl<K, V, C> IntoIterator for BoundedRetentionSet<K, V, C>
where
    K: Clone,
    C: Comparer<K>,
{
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_sorted_vec().into_iter()
    }
}

impl<K, V, C> fmt::Debug for BoundedRetentionSet<K, V, C>
where
    K: Clone,
    C: Comparer<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.inner.read();
        f.debug_struct("BoundedRetentionSet")
            .field("len", &core.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "metrics")]
impl<K, V, C> MetricsSnapshotProvider<RetentionMetricsSnapshot> for BoundedRetentionSet<K, V, C>
where
    K: Clone,
    C: Comparer<K>,
{
    fn snapshot(&self) -> RetentionMetricsSnapshot {
        let len = self.inner.read().len();
        self.metrics.snapshot_with(len, self.capacity)
    }
}

#[cfg(feature = "metrics")]
impl<K, V, C> MetricsReset for BoundedRetentionSet<K, V, C> {
    fn reset_metrics(&self) {
        self.metrics.reset_metrics();
    }
}

/// Ascending snapshot of a [`BoundedRetentionSet`], produced by
/// [`traverse`](BoundedRetentionSet::traverse).
#[derive(Debug, Clone)]
pub struct Traverse<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for Traverse<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Traverse<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for Traverse<K, V> {}

impl<K, V> FusedIterator for Traverse<K, V> {}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Barrier};
    use std::thread;

    use super::*;
    use crate::order::Reversed;

    #[test]
    fn scenario_sequential_eviction() {
        let set = BoundedRetentionSet::new(3);
        assert!(set.try_insert(1, "a"));
        assert!(set.try_insert(5, "b"));
        assert!(set.try_insert(3, "c"));
        assert!(set.try_insert(2, "d"));
        let got: Vec<_> = set.traverse().collect();
        assert_eq!(got, vec![(2, "d"), (3, "c"), (5, "b")]);
    }

    #[test]
    fn scenario_below_minimum_rejected() {
        let set = BoundedRetentionSet::new(2);
        set.try_insert(10, "a");
        set.try_insert(20, "b");
        assert!(!set.try_insert(5, "c"));
        let got: Vec<_> = set.traverse().collect();
        assert_eq!(got, vec![(10, "a"), (20, "b")]);
    }

    #[test]
    fn scenario_duplicate_rejected() {
        let set = BoundedRetentionSet::new(2);
        set.try_insert(10, "a");
        set.try_insert(20, "b");
        assert!(!set.try_insert(10, "z"));
        let got: Vec<_> = set.traverse().collect();
        assert_eq!(got, vec![(10, "a"), (20, "b")]);
    }

    #[test]
    fn scenario_zero_capacity_quirk() {
        let set = BoundedRetentionSet::new(0);
        assert!(set.try_insert(1, "x"));
        assert_eq!(set.traverse().count(), 0);
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 0);
    }

    #[test]
    fn try_new_rejects_negative_capacity() {
        let err = BoundedRetentionSet::<i32, ()>::try_new(-5).unwrap_err();
        assert!(err.to_string().contains("-5"));
        assert!(BoundedRetentionSet::<i32, ()>::try_new(0).is_ok());
    }

    #[test]
    fn traverse_is_a_snapshot() {
        let set = BoundedRetentionSet::new(4);
        set.try_insert(1, 'a');
        let snapshot = set.traverse();
        set.try_insert(2, 'b');
        assert_eq!(snapshot.len(), 1);
        assert_eq!(set.traverse().len(), 2);
    }

    #[test]
    fn traverse_is_restartable_and_double_ended() {
        let set = BoundedRetentionSet::new(3);
        for k in [3, 1, 2] {
            set.try_insert(k, ());
        }
        let forward: Vec<_> = set.traverse().map(|(k, _)| k).collect();
        let backward: Vec<_> = set.traverse().rev().map(|(k, _)| k).collect();
        assert_eq!(forward, vec![1, 2, 3]);
        assert_eq!(backward, vec![3, 2, 1]);
    }

    #[test]
    fn threshold_and_would_admit_track_minimum() {
        let set = BoundedRetentionSet::new(2);
        assert_eq!(set.threshold(), None);
        set.try_insert(4, ());
        assert_eq!(set.threshold(), None);
        set.try_insert(8, ());
        assert_eq!(set.threshold(), Some(4));
        assert!(!set.would_admit(&4));
        assert!(set.would_admit(&5));
        set.try_insert(6, ());
        assert_eq!(set.threshold(), Some(6));
        assert!(set.contains_key(&8));
        assert!(!set.contains_key(&4));
    }

    #[test]
    fn with_comparer_reversed_keeps_lowest() {
        let set = BoundedRetentionSet::with_comparer(2, Reversed(NaturalOrder));
        for latency in [120u32, 35, 80, 12, 300] {
            set.try_insert(latency, ());
        }
        let kept: Vec<_> = set.into_sorted_vec().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kept, vec![35, 12]);
    }

    #[test]
    fn into_iter_consumes_in_order() {
        let set = BoundedRetentionSet::new(2);
        set.try_insert(2, "two");
        set.try_insert(1, "one");
        let all: Vec<_> = set.into_iter().collect();
        assert_eq!(all, vec![(1, "one"), (2, "two")]);
    }

    #[test]
    fn from_core_preserves_contents() {
        let mut core = RetentionCore::new(2);
        core.try_insert(7, ());
        let set = BoundedRetentionSet::from_core(core);
        assert_eq!(set.len(), 1);
        assert_eq!(set.capacity(), 2);
        assert!(set.into_core().contains_key(&7));
    }

    #[test]
    fn debug_reports_len_and_capacity() {
        let set = BoundedRetentionSet::<u8, u8>::new(9);
        set.try_insert(1, 1);
        let dbg = format!("{:?}", set);
        assert!(dbg.contains("len: 1"));
        assert!(dbg.contains("capacity: 9"));
    }

    #[test]
    fn racing_same_key_admits_exactly_once() {
        for _ in 0..200 {
            let set = Arc::new(BoundedRetentionSet::new(4));
            let threads = 8;
            let barrier = Arc::new(Barrier::new(threads));
            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    let set = Arc::clone(&set);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        set.try_insert(42u32, t)
                    })
                })
                .collect();
            let wins = handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|won| *won)
                .count();
            assert_eq!(wins, 1);
            assert_eq!(set.len(), 1);
        }
    }

    #[test]
    fn set_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BoundedRetentionSet<u64, String>>();
        assert_send_sync::<BoundedRetentionSet<u64, String, Reversed<NaturalOrder>>>();
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_account_for_every_call() {
        let set = BoundedRetentionSet::new(2);
        set.try_insert(10, ());
        set.try_insert(20, ());
        set.try_insert(5, ()); // fast reject
        set.try_insert(20, ()); // duplicate
        set.try_insert(30, ()); // admitted, evicts 10

        let snap = set.snapshot();
        assert_eq!(snap.insert_calls, 5);
        assert_eq!(snap.admitted, 3);
        assert_eq!(snap.fast_rejects, 1);
        assert_eq!(snap.duplicate_rejects, 1);
        assert_eq!(snap.recheck_rejects, 0);
        assert_eq!(snap.evictions, 1);
        assert_eq!(snap.len, 2);
        assert_eq!(snap.capacity, 2);

        set.reset_metrics();
        assert_eq!(set.snapshot().insert_calls, 0);
    }
}
