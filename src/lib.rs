//! mru-sim: deterministic MRU page-replacement simulation.
//!
//! Feeds a reference sequence through a fixed number of frames under the
//! Most-Recently-Used policy and reports fault statistics together with a
//! step-by-step trace of every frame snapshot.
//!
//! ```
//! use mru_sim::prelude::*;
//!
//! let result = simulate(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2], 3).unwrap();
//! assert_eq!(result.faults(), 11);
//! assert_eq!(result.trace().len(), 13);
//! ```

pub mod builder;
pub mod cases;
pub mod config;
pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod simulator;
pub mod trace;

#[cfg(feature = "metrics")]
pub mod metrics;

pub use crate::simulator::{ReplacementSimulator, SimulationResult, simulate};
pub use crate::trace::{Access, Frame, StepRecord};
