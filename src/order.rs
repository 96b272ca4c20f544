//! Total orders over sort keys.
//!
//! Ranking policy is a value supplied at construction rather than a bound on
//! the key type, so the same key type can be retained under different orders
//! (e.g. highest score vs. lowest latency) without newtype wrappers.
//!
//! ## Key Components
//!
//! - [`Comparer`]: the total-order trait consulted by every retention set.
//! - [`NaturalOrder`]: defers to `K: Ord`; the default comparer.
//! - [`Reversed`]: flips any comparer, turning "keep the K largest" into
//!   "keep the K smallest".
//! - Any `Fn(&K, &K) -> Ordering` closure is a `Comparer<K>`.
//!
//! ## Example Usage
//!
//! ```
//! use std::cmp::Ordering;
//! use topkeep::order::{Comparer, NaturalOrder, Reversed};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"z"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over `K`.
///
/// Implementations must be consistent (antisymmetric, transitive, and
/// `Equal` exactly when the keys are interchangeable for ranking). Keys that
/// compare `Equal` are treated as duplicates by retention sets.
///
/// A comparer that panics propagates the panic to the caller of the
/// operation that invoked it; the set's contents are unspecified afterwards.
pub trait Comparer<K: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The key type's own [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparer<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses the wrapped comparer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<K: ?Sized, C: Comparer<K>> Comparer<K> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<K: ?Sized, F> Comparer<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
