use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use crate::metrics::snapshot::SimulationMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for simulation metrics snapshots.
///
/// Writes in the Prometheus text exposition format so the output can be
/// scraped by Prometheus or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn writer(&self) -> MutexGuard<'_, W> {
        // A panic mid-write leaves at most a truncated line behind.
        self.writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_counter(&self, name: &str, value: u64) {
        let mut writer = self.writer();
        let _ = writeln!(writer, "# TYPE {} counter", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        let mut writer = self.writer();
        let _ = writeln!(writer, "# TYPE {} gauge", name);
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

impl<W: Write + Send + Sync> MetricsExporter<SimulationMetricsSnapshot>
    for PrometheusTextExporter<W>
{
    fn export(&self, snapshot: &SimulationMetricsSnapshot) {
        self.write_counter(
            &self.metric_name("references_total"),
            snapshot.references,
        );
        self.write_counter(&self.metric_name("hits_total"), snapshot.hits);
        self.write_counter(&self.metric_name("faults_total"), snapshot.faults);
        self.write_counter(&self.metric_name("fills_total"), snapshot.fills);
        self.write_counter(&self.metric_name("evictions_total"), snapshot.evictions);
        self.write_counter(
            &self.metric_name("victim_scan_steps_total"),
            snapshot.victim_scan_steps,
        );
        self.write_gauge(&self.metric_name("resident"), snapshot.resident as u64);
        self.write_gauge(
            &self.metric_name("frame_count"),
            snapshot.frame_count as u64,
        );
    }
}
