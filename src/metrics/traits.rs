//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, *snapshotting*, and *export* responsibilities.
//!
//! ```text
//!   ┌──────────────────────────────┐
//!   │  SimulationMetricsRecorder   │   written by SimulationRun on every step
//!   │  reference/hit/fault/fill    │
//!   │  eviction/victim_scan_step   │
//!   └──────────────┬───────────────┘
//!                  │
//!   Consumption (decoupled from recording):
//!   ┌──────────────▼───────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │───►│ MetricsExporter<S>           │
//!   │ (tests/benches)              │    │ (monitoring backends)        │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters recorded by a simulation run.
pub trait SimulationMetricsRecorder {
    fn record_reference(&mut self);
    fn record_hit(&mut self);
    fn record_fault(&mut self);
    /// A fault served by an empty frame.
    fn record_fill(&mut self);
    /// A fault that displaced a resident page.
    fn record_eviction(&mut self);
    fn record_victim_scan_step(&mut self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
