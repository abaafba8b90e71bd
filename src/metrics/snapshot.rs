#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationMetricsSnapshot {
    pub references: u64,
    pub hits: u64,
    pub faults: u64,
    pub fills: u64,
    pub evictions: u64,
    pub victim_scan_steps: u64,

    // gauges captured at snapshot time
    pub resident: usize,
    pub frame_count: usize,
}
