use std::io::Write;

use parking_lot::Mutex;

use crate::metrics::snapshot::RetentionMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for retention metrics snapshots.
///
/// Writes the Prometheus text exposition format so output can be scraped by
/// Prometheus or forwarded to an OpenTelemetry collector. Write failures are
/// dropped; export is best-effort.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<RetentionMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &RetentionMetricsSnapshot) {
        let counters = [
            ("insert_calls_total", snapshot.insert_calls),
            ("admitted_total", snapshot.admitted),
            ("fast_rejects_total", snapshot.fast_rejects),
            ("recheck_rejects_total", snapshot.recheck_rejects),
            ("duplicate_rejects_total", snapshot.duplicate_rejects),
            ("evictions_total", snapshot.evictions),
        ];
        for (suffix, value) in counters {
            self.write_metric("counter", &self.metric_name(suffix), value);
        }
        self.write_metric("gauge", &self.metric_name("len"), snapshot.len as u64);
        self.write_metric(
            "gauge",
            &self.metric_name("capacity"),
            snapshot.capacity as u64,
        );
    }
}
