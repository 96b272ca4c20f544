//! Single-threaded top-K retention core.
//!
//! Owns the ordered mapping and the cached minimum key and implements the
//! whole admission/eviction policy. [`BoundedRetentionSet`] wraps it in a lock;
//! use the core directly when a single owner inserts.
//!
//! [`BoundedRetentionSet`]: crate::retention::BoundedRetentionSet
use std::cmp::Ordering;
use std::fmt;

use crate::ds::SortedEntries;
use crate::error::{ConfigError, InvariantError, validate_capacity};
use crate::order::{Comparer, NaturalOrder};

/// Upper bound on slots reserved up front; larger sets grow on demand.
pub const MAX_PREALLOC: usize = 4096;

/// Result of an insert that already passed the admission pre-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Admitted { evicted: bool },
    Duplicate,
}

/// Retains the `capacity` highest-ranked `(key, value)` pairs under a comparer.
///
/// Keys are unique under the comparer; inserting a key that is already
/// present is rejected and never overwrites the stored value.
///
/// # Example
///
/// ```
/// use topkeep::retention::RetentionCore;
///
/// let mut top = RetentionCore::new(3);
/// assert!(top.try_insert(1, "a"));
/// assert!(top.try_insert(5, "b"));
/// assert!(top.try_insert(3, "c"));
/// assert!(top.try_insert(2, "d")); // beats the minimum (1), evicts it
/// assert!(!top.try_insert(0, "e"));
///
/// let entries: Vec<_> = top.iter().map(|(k, v)| (*k, *v)).collect();
/// assert_eq!(entries, vec![(2, "d"), (3, "c"), (5, "b")]);
/// ```
pub struct RetentionCore<K, V, C = NaturalOrder> {
    entries: SortedEntries<K, V>,
    min: Option<K>,
    capacity: usize,
    comparer: C,
}

impl<K, V> RetentionCore<K, V, NaturalOrder>
where
    K: Ord + Clone,
{
    /// Creates an empty core ordered by `K`'s own [`Ord`].
    pub fn new(capacity: usize) -> Self {
        Self::with_comparer(capacity, NaturalOrder)
    }

    /// Creates an empty core from a signed capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is negative.
    pub fn try_new(capacity: i64) -> Result<Self, ConfigError> {
        Self::try_with_comparer(capacity, NaturalOrder)
    }
}

impl<K, V, C> RetentionCore<K, V, C>
where
    K: Clone,
    C: Comparer<K>,
{
    /// Creates an empty core ranked by `comparer`.
    pub fn with_comparer(capacity: usize, comparer: C) -> Self {
        tracing::debug!(capacity, "creating retention set");
        Self {
            entries: SortedEntries::with_capacity(capacity.saturating_add(1).min(MAX_PREALLOC)),
            min: None,
            capacity,
            comparer,
        }
    }

    /// Creates an empty core ranked by `comparer` from a signed capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is negative.
    pub fn try_with_comparer(capacity: i64, comparer: C) -> Result<Self, ConfigError> {
        let capacity = validate_capacity(capacity)?;
        Ok(Self::with_comparer(capacity, comparer))
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the comparer.
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Returns `true` if `key` would pass the admission pre-check.
    ///
    /// Passing does not guarantee admission: a duplicate key is still rejected.
    pub fn admits(&self, key: &K) -> bool {
        if self.entries.is_empty() || self.entries.len() < self.capacity {
            return true;
        }
        match &self.min {
            Some(min) => self.comparer.compare(key, min) == Ordering::Greater,
            None => false,
        }
    }

    /// Returns the key a candidate must outrank, once the set is full.
    pub fn threshold(&self) -> Option<&K> {
        if self.entries.is_empty() || self.entries.len() < self.capacity {
            return None;
        }
        self.min.as_ref()
    }

    /// Attempts to admit `(key, value)`; returns `true` iff it was admitted.
    ///
    /// With `capacity == 0` the call on an empty set reports `true` although
    /// the entry is trimmed again before returning.
    pub fn try_insert(&mut self, key: K, value: V) -> bool {
        if !self.admits(&key) {
            return false;
        }
        matches!(self.insert_admissible(key, value), Outcome::Admitted { .. })
    }

    /// Inserts a pair that already passed [`admits`](Self::admits).
    pub(crate) fn insert_admissible(&mut self, key: K, value: V) -> Outcome {
        let idx = match self.entries.search(&key, &self.comparer) {
            Ok(_) => return Outcome::Duplicate,
            Err(idx) => idx,
        };
        self.entries.insert_at(idx, key, value);

        let mut evicted = false;
        if self.entries.len() > self.capacity {
            evicted = self.entries.pop_first().is_some();
            tracing::trace!(
                len = self.entries.len(),
                capacity = self.capacity,
                "evicted lowest-ranked entry"
            );
        }
        self.min = self.entries.first_key().cloned();
        Outcome::Admitted { evicted }
    }

    /// Returns `true` if a key equal to `key` is retained.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains(key, &self.comparer)
    }

    /// Returns the value retained under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key, &self.comparer)
    }

    /// Iterates retained entries in ascending key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Consumes the core, returning entries in ascending key order.
    pub fn into_sorted_vec(self) -> Vec<(K, V)> {
        self.entries.into_vec()
    }

    /// Verifies size, ordering and cached-minimum invariants.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantError`] naming the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.entries.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.entries.len(),
                self.capacity
            )));
        }
        if !self.entries.is_strictly_ascending(&self.comparer) {
            return Err(InvariantError::new(
                "entries are not strictly ascending under the comparer",
            ));
        }
        match (self.entries.first_key(), &self.min) {
            (None, None) => Ok(()),
            (Some(first), Some(min)) if self.comparer.compare(first, min) == Ordering::Equal => {
                Ok(())
            },
            (Some(_), Some(_)) => Err(InvariantError::new(
                "cached minimum differs from the smallest key",
            )),
            (Some(_), None) => Err(InvariantError::new(
                "cached minimum missing for a non-empty set",
            )),
            (None, Some(_)) => Err(InvariantError::new("cached minimum set on an empty set")),
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("{}", err);
        }
    }
}

impl<K, V, C> fmt::Debug for RetentionCore<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetentionCore")
            .field("len", &self.entries.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
