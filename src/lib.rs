//! topkeep: a thread-safe, fixed-capacity container that retains the top-K
//! entries offered to it, ranked by a caller-supplied total order.
//!
//! ```
//! use topkeep::prelude::*;
//!
//! // f64 is not Ord; rank scores with a comparer instead.
//! let best = BoundedRetentionSet::with_comparer(2, |a: &f64, b: &f64| a.total_cmp(b));
//! assert!(best.try_insert(0.9, "alpha"));
//! assert!(best.try_insert(0.4, "beta"));
//! assert!(best.try_insert(0.7, "gamma"));
//! assert!(!best.try_insert(0.1, "delta"));
//! let names: Vec<_> = best.traverse().map(|(_, v)| v).collect();
//! assert_eq!(names, vec!["gamma", "alpha"]);
//! ```

pub mod builder;
pub mod ds;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod order;
pub mod prelude;
pub mod retention;
