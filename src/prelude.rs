pub use crate::builder::RetentionSetBuilder;
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::{MetricsSnapshotProvider, RetentionMetricsSnapshot};
pub use crate::order::{Comparer, NaturalOrder, Reversed};
pub use crate::retention::{BoundedRetentionSet, RetentionCore, Traverse};
