//! Per-step trace records.
//!
//! A simulation emits one [`StepRecord`] per reference, in input order. Each
//! record is an immutable snapshot: the frame contents *after* the reference
//! was served, padded with [`Frame::Empty`] up to the frame count.
//!
//! ```
//! use mru_sim::simulator::simulate;
//! use mru_sim::trace::{Access, Frame};
//!
//! let result = simulate(&[4, 4], 2).unwrap();
//! let first = &result.trace()[0];
//! assert_eq!(first.step, 1);
//! assert_eq!(first.access, Access::Fault);
//! assert_eq!(first.frames, vec![Frame::Occupied(4), Frame::Empty]);
//! assert_eq!(result.trace()[1].access, Access::Hit);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hit/fault classification of a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Access {
    /// The page was already resident.
    Hit,
    /// The page was not resident and had to be loaded.
    Fault,
}

impl Access {
    #[inline]
    pub fn is_hit(self) -> bool {
        matches!(self, Access::Hit)
    }

    #[inline]
    pub fn is_fault(self) -> bool {
        matches!(self, Access::Fault)
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Hit => f.write_str("Hit"),
            Access::Fault => f.write_str("Fault"),
        }
    }
}

/// Contents of one frame slot in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Frame<K> {
    /// Slot holds a resident page.
    Occupied(K),
    /// Slot has not been filled yet.
    Empty,
}

impl<K> Frame<K> {
    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Frame::Occupied(_))
    }

    /// Returns the resident page, if any.
    #[inline]
    pub fn page(&self) -> Option<&K> {
        match self {
            Frame::Occupied(page) => Some(page),
            Frame::Empty => None,
        }
    }
}

/// Empty slots render as `-`.
impl<K: fmt::Display> fmt::Display for Frame<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Occupied(page) => fmt::Display::fmt(page, f),
            Frame::Empty => f.write_str("-"),
        }
    }
}

/// One step of the simulation trace.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepRecord<K> {
    /// 1-based step number.
    pub step: usize,
    /// The page referenced at this step.
    pub reference: K,
    /// Frame contents after the step, padded to the frame count.
    pub frames: Vec<Frame<K>>,
    pub access: Access,
    /// Page displaced by this step, if the fault required an eviction.
    pub evicted: Option<K>,
}

impl<K> StepRecord<K> {
    /// Number of occupied frames in the snapshot.
    pub fn resident_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_occupied()).count()
    }

    /// Iterates the resident pages in slot order.
    pub fn resident(&self) -> impl Iterator<Item = &K> {
        self.frames.iter().filter_map(Frame::page)
    }
}
