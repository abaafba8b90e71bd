//! Simulation metrics (feature `metrics`).
//!
//! Recording, snapshotting and export are split into small traits so the
//! replacement engine only ever increments counters.

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::SimulationMetrics;
pub use snapshot::SimulationMetricsSnapshot;
pub use traits::{MetricsExporter, MetricsSnapshotProvider, SimulationMetricsRecorder};
