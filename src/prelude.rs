pub use crate::builder::SimulatorBuilder;
pub use crate::cases::{CaseResult, simulate_cases};
pub use crate::config::SimulationLimits;
pub use crate::error::ConfigError;
pub use crate::simulator::{ReplacementSimulator, SimulationResult, SimulationRun, simulate};
pub use crate::trace::{Access, Frame, StepRecord};

#[cfg(feature = "concurrency")]
pub use crate::cases::simulate_cases_parallel;
