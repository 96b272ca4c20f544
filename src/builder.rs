//! Builder for retention sets.
//!
//! Takes the capacity as a signed integer so values read from configuration
//! files or command lines are validated in one place instead of being cast.
//!
//! ## Example
//!
//! ```rust
//! use topkeep::builder::RetentionSetBuilder;
//!
//! // Keep the 10 lowest latencies.
//! let fastest = RetentionSetBuilder::new(10).reversed().build::<u32, String>();
//! fastest.try_insert(250, "slow".to_string());
//! fastest.try_insert(12, "fast".to_string());
//! assert_eq!(fastest.traverse().next().map(|(k, _)| k), Some(250));
//!
//! let err = RetentionSetBuilder::new(-1).try_build::<u32, String>().unwrap_err();
//! assert!(err.message().contains("non-negative"));
//! ```

use crate::error::{ConfigError, validate_capacity};
use crate::order::{Comparer, NaturalOrder, Reversed};
use crate::retention::{BoundedRetentionSet, RetentionCore};

/// Configures capacity and ordering, then builds a set.
#[derive(Debug, Clone)]
pub struct RetentionSetBuilder<C = NaturalOrder> {
    capacity: i64,
    comparer: C,
}

impl RetentionSetBuilder<NaturalOrder> {
    /// Creates a builder with the given capacity and natural ordering.
    pub fn new(capacity: i64) -> Self {
        Self {
            capacity,
            comparer: NaturalOrder,
        }
    }
}

impl<C> RetentionSetBuilder<C> {
    /// Replaces the comparer.
    pub fn comparer<C2>(self, comparer: C2) -> RetentionSetBuilder<C2> {
        RetentionSetBuilder {
            capacity: self.capacity,
            comparer,
        }
    }

    /// Reverses the configured order, retaining the K lowest-ranked keys.
    pub fn reversed(self) -> RetentionSetBuilder<Reversed<C>> {
        RetentionSetBuilder {
            capacity: self.capacity,
            comparer: Reversed(self.comparer),
        }
    }

    /// Returns the configured capacity, unvalidated.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Builds the concurrent set.
    ///
    /// # Panics
    ///
    /// Panics if the configured capacity is negative. For a non-panicking
    /// alternative, use [`try_build`](Self::try_build).
    pub fn build<K, V>(self) -> BoundedRetentionSet<K, V, C>
    where
        K: Clone,
        C: Comparer<K>,
    {
        match self.try_build() {
            Ok(set) => set,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds the concurrent set, returning an error on invalid parameters
    /// instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configured capacity is negative.
    pub fn try_build<K, V>(self) -> Result<BoundedRetentionSet<K, V, C>, ConfigError>
    where
        K: Clone,
        C: Comparer<K>,
    {
        let capacity = validate_capacity(self.capacity)?;
        Ok(BoundedRetentionSet::with_comparer(capacity, self.comparer))
    }

    /// Builds a single-threaded core.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configured capacity is negative.
    pub fn try_build_core<K, V>(self) -> Result<RetentionCore<K, V, C>, ConfigError>
    where
        K: Clone,
        C: Comparer<K>,
    {
        RetentionCore::try_with_comparer(self.capacity, self.comparer)
    }
}
