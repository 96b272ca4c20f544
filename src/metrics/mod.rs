pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::RetentionMetrics;
pub use snapshot::RetentionMetricsSnapshot;
pub use traits::{MetricsExporter, MetricsReset, MetricsSnapshotProvider, RetentionMetricsRecorder};
