use crate::metrics::traits::SimulationMetricsRecorder;

/// Plain counters owned by a single simulation run.
#[derive(Debug, Default, Clone)]
pub struct SimulationMetrics {
    pub references: u64,
    pub hits: u64,
    pub faults: u64,
    pub fills: u64,
    pub evictions: u64,
    pub victim_scan_steps: u64,
}

impl SimulationMetricsRecorder for SimulationMetrics {
    fn record_reference(&mut self) {
        self.references += 1;
    }
    fn record_hit(&mut self) {
        self.hits += 1;
    }
    fn record_fault(&mut self) {
        self.faults += 1;
    }
    fn record_fill(&mut self) {
        self.fills += 1;
    }
    fn record_eviction(&mut self) {
        self.evictions += 1;
    }
    fn record_victim_scan_step(&mut self) {
        self.victim_scan_steps += 1;
    }
}
