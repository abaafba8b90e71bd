//! Error types for the simulator.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when simulation parameters are invalid
//!   (e.g. zero frames, a sequence longer than the configured limit).
//! - [`InvariantError`]: Returned when frame-set invariants are violated
//!   (debug-only `check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use mru_sim::error::ConfigError;
//! use mru_sim::simulator::ReplacementSimulator;
//!
//! // Fallible constructor for user-configurable parameters
//! let sim: Result<ReplacementSimulator, ConfigError> = ReplacementSimulator::new(3);
//! assert!(sim.is_ok());
//!
//! // Zero frames is caught before any step runs
//! let bad = ReplacementSimulator::new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when simulation parameters are invalid.
///
/// Produced by [`ReplacementSimulator::new`](crate::simulator::ReplacementSimulator::new),
/// [`SimulatorBuilder::try_build`](crate::builder::SimulatorBuilder::try_build)
/// and the [`SimulationLimits`](crate::config::SimulationLimits) checks.
/// Carries a human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use mru_sim::simulator::ReplacementSimulator;
///
/// let err = ReplacementSimulator::new(0).unwrap_err();
/// assert!(err.to_string().contains("frame_count"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when frame-set invariants are violated.
///
/// Produced by [`FrameSet::check_invariants`](crate::ds::FrameSet::check_invariants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SimulatorBuilder;
    use crate::cases::simulate_cases;
    use crate::config::SimulationLimits;
    use crate::simulator::{ReplacementSimulator, simulate};

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn zero_frames_message() {
        let err = simulate(&[1u8], 0).unwrap_err();
        assert_eq!(err.message(), "frame_count must be >= 1");
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn limit_messages_name_the_bound_and_the_value() {
        let limits = SimulationLimits::default();
        assert_eq!(
            limits.check_sequence_len(21).unwrap_err().message(),
            "maximum is 20 references, but got 21"
        );

        let err = SimulatorBuilder::new(9).limits(limits).try_build().unwrap_err();
        assert_eq!(err.message(), "frame_count must be between 3 and 8, but got 9");
    }

    #[test]
    fn case_errors_carry_the_case_name() {
        let sim = SimulatorBuilder::new(3)
            .limits(SimulationLimits::try_new(2, 1, 4).unwrap())
            .try_build()
            .unwrap();
        let err = simulate_cases(&sim, vec![("col B", vec![1, 2, 3])]).unwrap_err();

        assert!(err.message().starts_with("case `col B`: "));
        assert!(err.message().ends_with("maximum is 2 references, but got 3"));
    }

    #[test]
    fn config_error_boxes_as_std_error() {
        fn build() -> Result<ReplacementSimulator, Box<dyn std::error::Error + Send + Sync>> {
            Ok(ReplacementSimulator::new(0)?)
        }
        assert_eq!(build().unwrap_err().to_string(), "frame_count must be >= 1");
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_error_boxes_as_std_error() {
        let boxed: Box<dyn std::error::Error> =
            Box::new(InvariantError::new("index points slot 0 at 2"));
        assert_eq!(boxed.to_string(), "index points slot 0 at 2");
        assert!(boxed.source().is_none());
    }
}
