//! Caller-side input policy.
//!
//! The replacement engine runs at any positive frame count and any sequence
//! length. Front ends usually cap both; [`SimulationLimits`] captures that
//! policy so it can be checked before a run starts.
//!
//! ```
//! use mru_sim::config::SimulationLimits;
//!
//! let limits = SimulationLimits::default();
//! assert!(limits.check_frame_count(3).is_ok());
//! assert!(limits.check_frame_count(9).is_err());
//! assert!(limits.check_sequence_len(21).is_err());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default maximum number of references per case.
pub const DEFAULT_MAX_REFERENCES: usize = 20;
/// Default smallest accepted frame count.
pub const DEFAULT_MIN_FRAMES: usize = 3;
/// Default largest accepted frame count.
pub const DEFAULT_MAX_FRAMES: usize = 8;

/// Bounds on sequence length and frame count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationLimits {
    pub max_references: usize,
    pub min_frames: usize,
    pub max_frames: usize,
}

impl Default for SimulationLimits {
    /// At most 20 references, 3 to 8 frames inclusive.
    fn default() -> Self {
        Self {
            max_references: DEFAULT_MAX_REFERENCES,
            min_frames: DEFAULT_MIN_FRAMES,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

impl SimulationLimits {
    /// Validates and builds a set of limits.
    pub fn try_new(
        max_references: usize,
        min_frames: usize,
        max_frames: usize,
    ) -> Result<Self, ConfigError> {
        if max_references == 0 {
            return Err(ConfigError::new("max_references must be >= 1"));
        }
        if min_frames == 0 {
            return Err(ConfigError::new("min_frames must be >= 1"));
        }
        if min_frames > max_frames {
            return Err(ConfigError::new(format!(
                "min_frames ({min_frames}) must not exceed max_frames ({max_frames})"
            )));
        }
        Ok(Self {
            max_references,
            min_frames,
            max_frames,
        })
    }

    /// Limits that accept anything the engine accepts.
    pub fn unbounded() -> Self {
        Self {
            max_references: usize::MAX,
            min_frames: 1,
            max_frames: usize::MAX,
        }
    }

    pub fn check_frame_count(&self, frame_count: usize) -> Result<(), ConfigError> {
        if frame_count < self.min_frames || frame_count > self.max_frames {
            return Err(ConfigError::new(format!(
                "frame_count must be between {} and {}, but got {}",
                self.min_frames, self.max_frames, frame_count
            )));
        }
        Ok(())
    }

    pub fn check_sequence_len(&self, len: usize) -> Result<(), ConfigError> {
        if len > self.max_references {
            return Err(ConfigError::new(format!(
                "maximum is {} references, but got {}",
                self.max_references, len
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_match_front_end_policy() {
        let limits = SimulationLimits::default();
        assert_eq!(limits.max_references, 20);
        assert_eq!(limits.min_frames, 3);
        assert_eq!(limits.max_frames, 8);
    }

    #[test]
    fn frame_range_is_inclusive() {
        let limits = SimulationLimits::default();
        assert!(limits.check_frame_count(2).is_err());
        assert!(limits.check_frame_count(3).is_ok());
        assert!(limits.check_frame_count(8).is_ok());
        assert!(limits.check_frame_count(9).is_err());
    }

    #[test]
    fn sequence_len_error_names_both_lengths() {
        let err = SimulationLimits::default()
            .check_sequence_len(21)
            .unwrap_err();
        assert_eq!(err.message(), "maximum is 20 references, but got 21");
        assert!(SimulationLimits::default().check_sequence_len(20).is_ok());
        assert!(SimulationLimits::default().check_sequence_len(0).is_ok());
    }

    #[test]
    fn try_new_rejects_inverted_range() {
        let err = SimulationLimits::try_new(20, 8, 3).unwrap_err();
        assert!(err.message().contains("min_frames"));
    }

    #[test]
    fn try_new_rejects_zero_bounds() {
        assert!(SimulationLimits::try_new(0, 3, 8).is_err());
        assert!(SimulationLimits::try_new(20, 0, 8).is_err());
        assert!(SimulationLimits::try_new(20, 1, 1).is_ok());
    }

    #[test]
    fn unbounded_accepts_single_frame() {
        let limits = SimulationLimits::unbounded();
        assert!(limits.check_frame_count(1).is_ok());
        assert!(limits.check_sequence_len(10_000).is_ok());
    }
}
