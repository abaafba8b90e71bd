//! Builder for configured simulators.
//!
//! [`ReplacementSimulator::new`] only checks that the frame count is
//! positive. The builder additionally attaches caller-side
//! [`SimulationLimits`] so front ends can reject oversize input before a run.
//!
//! ## Example
//!
//! ```rust
//! use mru_sim::builder::SimulatorBuilder;
//! use mru_sim::config::SimulationLimits;
//!
//! let sim = SimulatorBuilder::new(3)
//!     .limits(SimulationLimits::default())
//!     .try_build()
//!     .unwrap();
//!
//! let result = sim.try_simulate(&[7, 0, 1, 2, 0]).unwrap();
//! assert_eq!(result.faults(), 4);
//!
//! // Frame counts outside 3..=8 are refused at build time.
//! assert!(SimulatorBuilder::new(12).limits(SimulationLimits::default()).try_build().is_err());
//! ```

use crate::config::SimulationLimits;
use crate::error::ConfigError;
use crate::simulator::ReplacementSimulator;

/// Builder for [`ReplacementSimulator`].
#[derive(Debug, Clone)]
pub struct SimulatorBuilder {
    frame_count: usize,
    limits: Option<SimulationLimits>,
}

impl SimulatorBuilder {
    /// Starts a builder for `frame_count` frames with no limits attached.
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count,
            limits: None,
        }
    }

    /// Attaches input limits, checked at build time (frame count) and by
    /// [`ReplacementSimulator::try_simulate`] (sequence length).
    pub fn limits(mut self, limits: SimulationLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Builds the simulator, validating the frame count.
    pub fn try_build(self) -> Result<ReplacementSimulator, ConfigError> {
        match self.limits {
            Some(limits) => ReplacementSimulator::with_limits(self.frame_count, limits),
            None => ReplacementSimulator::new(self.frame_count),
        }
    }
}
