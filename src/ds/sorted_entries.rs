//! Array-backed ordered mapping.
//!
//! Stores `(key, value)` pairs in a single `Vec`, kept in ascending order by
//! an external [`Comparer`]. Lookups binary-search; inserts and removals shift
//! the tail. The comparer is passed per call rather than stored so the owner
//! decides where ordering policy lives.
//!
//! ## Architecture
//!
//! ```text
//!   entries: Vec<(K, V)>   (ascending by comparer, keys unique)
//!   ┌────────┬────────┬────────┬────────┬ ─ ─ ─ ─ ┐
//!   │ (2, d) │ (3, c) │ (5, b) │        │  spare  │
//!   └────────┴────────┴────────┴────────┴ ─ ─ ─ ─ ┘
//!     first                      len      capacity
//!     (smallest)
//! ```
//!
//! ## Performance
//! - `search` / `contains` / `get`: O(log n)
//! - `insert_at` / `pop_first`: O(n) element shift
//! - `iter`: O(n)
//!
//! `debug_validate_invariants()` is available in debug/test builds.
use std::cmp::Ordering;

use crate::order::Comparer;

#[derive(Debug, Clone)]
/// Ordered `(key, value)` storage backed by a contiguous vector.
pub struct SortedEntries<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> SortedEntries<K, V> {
    /// Creates empty storage with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Locates `key`: `Ok(index)` if present, `Err(insertion_index)` otherwise.
    pub fn search<C>(&self, key: &K, comparer: &C) -> Result<usize, usize>
    where
        C: Comparer<K> + ?Sized,
    {
        self.entries
            .binary_search_by(|(probe, _)| comparer.compare(probe, key))
    }

    /// Returns `true` if a key equal to `key` under `comparer` is stored.
    pub fn contains<C>(&self, key: &K, comparer: &C) -> bool
    where
        C: Comparer<K> + ?Sized,
    {
        self.search(key, comparer).is_ok()
    }

    /// Returns the value stored under `key`.
    pub fn get<C>(&self, key: &K, comparer: &C) -> Option<&V>
    where
        C: Comparer<K> + ?Sized,
    {
        let idx = self.search(key, comparer).ok()?;
        self.entries.get(idx).map(|(_, value)| value)
    }

    /// Inserts at a position previously returned as `Err(index)` by [`search`](Self::search).
    ///
    /// Callers are responsible for passing an index that preserves order.
    pub fn insert_at(&mut self, index: usize, key: K, value: V) {
        self.entries.insert(index, (key, value));
    }

    /// Returns the smallest entry.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(key, value)| (key, value))
    }

    /// Returns the smallest key.
    pub fn first_key(&self) -> Option<&K> {
        self.entries.first().map(|(key, _)| key)
    }

    /// Removes and returns the smallest entry.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.entries.remove(0))
    }

    /// Iterates entries in ascending key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Returns the entries as an ascending slice.
    pub fn as_slice(&self) -> &[(K, V)] {
        &self.entries
    }

    /// Consumes the storage, returning the ascending entries.
    pub fn into_vec(self) -> Vec<(K, V)> {
        self.entries
    }

    /// Returns `true` if every adjacent pair is strictly ascending under `comparer`.
    pub fn is_strictly_ascending<C>(&self, comparer: &C) -> bool
    where
        C: Comparer<K> + ?Sized,
    {
        self.entries
            .windows(2)
            .all(|pair| comparer.compare(&pair[0].0, &pair[1].0) == Ordering::Less)
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants<C>(&self, comparer: &C)
    where
        C: Comparer<K> + ?Sized,
    {
        assert!(
            self.is_strictly_ascending(comparer),
            "entries out of order or duplicated"
        );
    }
}

impl<K, V> Default for SortedEntries<K, V> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
