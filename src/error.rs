//! Error types for topkeep.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a retention set is configured with invalid
//!   parameters (a negative capacity from a signed source).
//! - [`InvariantError`]: Returned by
//!   [`RetentionCore::check_invariants`](crate::retention::RetentionCore::check_invariants)
//!   when the ordered mapping and its cached minimum disagree.
//!
//! ## Example Usage
//!
//! ```
//! use topkeep::error::ConfigError;
//! use topkeep::retention::BoundedRetentionSet;
//!
//! let set: Result<BoundedRetentionSet<u64, &str>, ConfigError> = BoundedRetentionSet::try_new(8);
//! assert!(set.is_ok());
//!
//! let bad = BoundedRetentionSet::<u64, &str>::try_new(-1);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when retention set configuration parameters are invalid.
///
/// Produced by [`BoundedRetentionSet::try_new`](crate::retention::BoundedRetentionSet::try_new),
/// [`try_with_comparer`](crate::retention::BoundedRetentionSet::try_with_comparer)
/// and [`RetentionSetBuilder::try_build`](crate::builder::RetentionSetBuilder::try_build).
///
/// # Example
///
/// ```
/// use topkeep::retention::BoundedRetentionSet;
///
/// let err = BoundedRetentionSet::<u64, u64>::try_new(-3).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }

    pub(crate) fn negative_capacity(capacity: i64) -> Self {
        Self::new(format!(
            "retention capacity must be non-negative, got {}",
            capacity
        ))
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

/// Converts a signed capacity into `usize`, rejecting negatives.
pub(crate) fn validate_capacity(capacity: i64) -> Result<usize, ConfigError> {
    if capacity < 0 {
        return Err(ConfigError::negative_capacity(capacity));
    }
    usize::try_from(capacity).map_err(|_| {
        ConfigError::new(format!(
            "retention capacity {} exceeds the platform's addressable size",
            capacity
        ))
    })
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when a retention set's internal invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
