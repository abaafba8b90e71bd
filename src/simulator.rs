//! MRU page-replacement simulator.
//!
//! Runs the MRU policy over a reference sequence and records one
//! [`StepRecord`] per reference plus aggregate fault statistics.
//!
//! ## Architecture
//!
//! ```text
//!   reference sequence ──► SimulationRun<K> ──────────────► SimulationResult<K>
//!                          ┌──────────────────────────┐     faults, fault_rate,
//!                          │ frames:  FrameSet<K>     │     trace: Vec<StepRecord>
//!                          │ recency: RecencyTable<K> │
//!                          │ trace:   Vec<StepRecord> │
//!                          └──────────────────────────┘
//! ```
//!
//! ## Step Flow
//!
//! ```text
//!   access(page) at position i:
//!     1. resident?            → Hit, nothing moves
//!     2. not resident, free   → Fault, load into next free slot
//!        not resident, full   → Fault, replace MRU victim in its slot
//!     3. recency[page] = i    (hits and faults alike)
//!     4. emit StepRecord { step: i + 1, page, padded frames, Hit/Fault }
//! ```
//!
//! Every run owns fresh state; nothing is shared between runs, so separate
//! sequences can be simulated on separate threads without locking.
//!
//! ## Example Usage
//!
//! ```
//! use mru_sim::simulator::simulate;
//! use mru_sim::trace::Frame;
//!
//! let result = simulate(&[1, 2, 3, 1, 2, 3], 3).unwrap();
//! assert_eq!(result.faults(), 3);
//! assert_eq!(result.fault_rate(), 0.5);
//! assert_eq!(
//!     result.trace()[5].frames,
//!     vec![Frame::Occupied(1), Frame::Occupied(2), Frame::Occupied(3)]
//! );
//! ```

use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::SimulationLimits;
use crate::ds::{FrameSet, RecencyTable};
use crate::error::ConfigError;
#[cfg(feature = "serde")]
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::SimulationMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::SimulationMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MetricsSnapshotProvider, SimulationMetricsRecorder};
use crate::policy::mru::select_victim;
use crate::trace::{Access, StepRecord};

/// Runs MRU over `sequence` with `frame_count` frames.
///
/// Fails only if `frame_count` is zero. An empty sequence is not an error.
pub fn simulate<K>(sequence: &[K], frame_count: usize) -> Result<SimulationResult<K>, ConfigError>
where
    K: Clone + Eq + Hash,
{
    Ok(ReplacementSimulator::new(frame_count)?.simulate(sequence))
}

/// Configured MRU simulator.
///
/// Holds only the frame count (and optional caller limits); each call to
/// [`simulate`](Self::simulate) builds its own state, so one simulator can
/// be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacementSimulator {
    frame_count: usize,
    limits: Option<SimulationLimits>,
}

impl ReplacementSimulator {
    /// Creates a simulator with `frame_count` frames.
    ///
    /// # Example
    ///
    /// ```
    /// use mru_sim::simulator::ReplacementSimulator;
    ///
    /// let sim = ReplacementSimulator::new(4).unwrap();
    /// assert_eq!(sim.frame_count(), 4);
    /// assert!(ReplacementSimulator::new(0).is_err());
    /// ```
    pub fn new(frame_count: usize) -> Result<Self, ConfigError> {
        if frame_count == 0 {
            return Err(ConfigError::new("frame_count must be >= 1"));
        }
        Ok(Self {
            frame_count,
            limits: None,
        })
    }

    pub(crate) fn with_limits(
        frame_count: usize,
        limits: SimulationLimits,
    ) -> Result<Self, ConfigError> {
        let mut sim = Self::new(frame_count)?;
        limits.check_frame_count(frame_count)?;
        sim.limits = Some(limits);
        Ok(sim)
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Caller limits attached through [`SimulatorBuilder`](crate::builder::SimulatorBuilder).
    #[inline]
    pub fn limits(&self) -> Option<&SimulationLimits> {
        self.limits.as_ref()
    }

    /// Starts a stepwise run with fresh frames and recency state.
    pub fn start<K>(&self) -> SimulationRun<K>
    where
        K: Clone + Eq + Hash,
    {
        SimulationRun::new(self.frame_count)
    }

    /// Runs the whole sequence and returns the result.
    ///
    /// Attached limits are *not* checked here; see [`try_simulate`](Self::try_simulate).
    pub fn simulate<K>(&self, sequence: &[K]) -> SimulationResult<K>
    where
        K: Clone + Eq + Hash,
    {
        debug!(
            frame_count = self.frame_count,
            references = sequence.len(),
            "starting MRU simulation"
        );

        let mut run = SimulationRun::with_capacity(self.frame_count, sequence.len());
        for page in sequence {
            run.access(page.clone());
        }
        let result = run.finish();

        debug!(
            faults = result.faults,
            references = result.total_references(),
            fault_rate = result.fault_rate,
            "MRU simulation finished"
        );
        result
    }

    /// Checks `sequence` against the attached limits, then runs it.
    pub fn try_simulate<K>(&self, sequence: &[K]) -> Result<SimulationResult<K>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        if let Some(limits) = &self.limits {
            limits.check_sequence_len(sequence.len())?;
        }
        Ok(self.simulate(sequence))
    }
}

/// In-progress simulation, advanced one reference at a time.
///
/// Obtained from [`ReplacementSimulator::start`].
///
/// ```
/// use mru_sim::simulator::ReplacementSimulator;
/// use mru_sim::trace::Access;
///
/// let sim = ReplacementSimulator::new(2).unwrap();
/// let mut run = sim.start();
/// assert_eq!(run.access('a').access, Access::Fault);
/// assert_eq!(run.access('a').access, Access::Hit);
/// assert_eq!(run.finish().faults(), 1);
/// ```
#[derive(Debug)]
pub struct SimulationRun<K> {
    frames: FrameSet<K>,
    recency: RecencyTable<K>,
    trace: Vec<StepRecord<K>>,
    faults: usize,
    #[cfg(feature = "metrics")]
    metrics: SimulationMetrics,
}

impl<K> SimulationRun<K>
where
    K: Clone + Eq + Hash,
{
    fn new(frame_count: usize) -> Self {
        Self::with_capacity(frame_count, 0)
    }

    fn with_capacity(frame_count: usize, references: usize) -> Self {
        Self {
            frames: FrameSet::new(frame_count),
            recency: RecencyTable::with_capacity(references),
            trace: Vec::with_capacity(references),
            faults: 0,
            #[cfg(feature = "metrics")]
            metrics: SimulationMetrics::default(),
        }
    }

    /// Serves one reference and returns the step it produced.
    pub fn access(&mut self, page: K) -> &StepRecord<K> {
        let position = self.trace.len();
        #[cfg(feature = "metrics")]
        self.metrics.record_reference();

        let access = if self.frames.contains(&page) {
            #[cfg(feature = "metrics")]
            self.metrics.record_hit();
            Access::Hit
        } else {
            #[cfg(feature = "metrics")]
            self.metrics.record_fault();
            self.faults += 1;
            Access::Fault
        };

        let evicted = if access.is_fault() {
            self.load(page.clone(), position)
        } else {
            None
        };

        self.recency.record(page.clone(), position);

        self.trace.push(StepRecord {
            step: position + 1,
            reference: page,
            frames: self.frames.snapshot(),
            access,
            evicted,
        });
        &self.trace[position]
    }

    /// Brings a faulting page in, returning the page it displaced.
    fn load(&mut self, page: K, position: usize) -> Option<K> {
        if !self.frames.is_full() {
            self.frames.push(page);
            #[cfg(feature = "metrics")]
            self.metrics.record_fill();
            return None;
        }

        let (slot, last_seen, scanned) = {
            let victim = select_victim(&self.frames, &self.recency)?;
            (victim.slot, victim.last_seen, victim.scanned)
        };
        #[cfg(feature = "metrics")]
        {
            for _ in 0..scanned {
                self.metrics.record_victim_scan_step();
            }
            self.metrics.record_eviction();
        }

        trace!(
            step = position + 1,
            slot,
            victim_last_seen = ?last_seen,
            scanned,
            "replacing most recently used page"
        );
        self.frames.replace(slot, page)
    }

    /// Current frame contents.
    #[inline]
    pub fn frames(&self) -> &FrameSet<K> {
        &self.frames
    }

    #[inline]
    pub fn recency(&self) -> &RecencyTable<K> {
        &self.recency
    }

    /// Trace emitted so far.
    #[inline]
    pub fn trace(&self) -> &[StepRecord<K>] {
        &self.trace
    }

    /// Number of references served so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.trace.len()
    }

    #[inline]
    pub fn faults(&self) -> usize {
        self.faults
    }

    /// Ends the run and computes the summary.
    pub fn finish(self) -> SimulationResult<K> {
        SimulationResult::new(self.faults, self.trace)
    }
}

#[cfg(feature = "metrics")]
impl<K> SimulationRun<K>
where
    K: Clone + Eq + Hash,
{
    /// Returns a snapshot of the run's counters.
    pub fn metrics_snapshot(&self) -> SimulationMetricsSnapshot {
        SimulationMetricsSnapshot {
            references: self.metrics.references,
            hits: self.metrics.hits,
            faults: self.metrics.faults,
            fills: self.metrics.fills,
            evictions: self.metrics.evictions,
            victim_scan_steps: self.metrics.victim_scan_steps,
            resident: self.frames.len(),
            frame_count: self.frames.capacity(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<K> MetricsSnapshotProvider<SimulationMetricsSnapshot> for SimulationRun<K>
where
    K: Clone + Eq + Hash,
{
    fn snapshot(&self) -> SimulationMetricsSnapshot {
        self.metrics_snapshot()
    }
}

/// Outcome of a simulation: fault statistics and the full trace.
///
/// With the `serde` feature, deserialization recomputes the statistics from
/// the trace and rejects payloads whose `faults` or `fault_rate` disagree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawSimulationResult<K>",
        bound(deserialize = "K: Deserialize<'de>")
    )
)]
pub struct SimulationResult<K> {
    faults: usize,
    fault_rate: f64,
    trace: Vec<StepRecord<K>>,
}

impl<K> SimulationResult<K> {
    fn new(faults: usize, trace: Vec<StepRecord<K>>) -> Self {
        let fault_rate = if trace.is_empty() {
            0.0
        } else {
            faults as f64 / trace.len() as f64
        };
        Self {
            faults,
            fault_rate,
            trace,
        }
    }

    #[inline]
    pub fn faults(&self) -> usize {
        self.faults
    }

    /// `faults / total_references`, or `0.0` for an empty sequence.
    #[inline]
    pub fn fault_rate(&self) -> f64 {
        self.fault_rate
    }

    /// Fault rate as a percentage (`50.0` for half the references faulting).
    #[inline]
    pub fn fault_rate_percent(&self) -> f64 {
        self.fault_rate * 100.0
    }

    #[inline]
    pub fn total_references(&self) -> usize {
        self.trace.len()
    }

    #[inline]
    pub fn hits(&self) -> usize {
        self.trace.len().saturating_sub(self.faults)
    }

    pub fn hit_rate(&self) -> f64 {
        if self.trace.is_empty() {
            0.0
        } else {
            self.hits() as f64 / self.trace.len() as f64
        }
    }

    /// Number of faults that displaced a resident page.
    pub fn evictions(&self) -> usize {
        self.trace.iter().filter(|r| r.evicted.is_some()).count()
    }

    #[inline]
    pub fn trace(&self) -> &[StepRecord<K>] {
        &self.trace
    }

    pub fn into_trace(self) -> Vec<StepRecord<K>> {
        self.trace
    }
}

/// Wire form of [`SimulationResult`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSimulationResult<K> {
    faults: usize,
    fault_rate: f64,
    trace: Vec<StepRecord<K>>,
}

#[cfg(feature = "serde")]
impl<K> TryFrom<RawSimulationResult<K>> for SimulationResult<K> {
    type Error = InvariantError;

    fn try_from(raw: RawSimulationResult<K>) -> Result<Self, Self::Error> {
        for (i, record) in raw.trace.iter().enumerate() {
            if record.step != i + 1 {
                return Err(InvariantError::new(format!(
                    "trace record {i} has step {}, expected {}",
                    record.step,
                    i + 1
                )));
            }
        }

        let counted = raw.trace.iter().filter(|r| r.access.is_fault()).count();
        if raw.faults != counted {
            return Err(InvariantError::new(format!(
                "faults is {}, but the trace records {counted}",
                raw.faults
            )));
        }

        let result = Self::new(counted, raw.trace);
        if (raw.fault_rate - result.fault_rate).abs() > 1e-9 {
            return Err(InvariantError::new(format!(
                "fault_rate is {}, but the trace gives {}",
                raw.fault_rate, result.fault_rate
            )));
        }
        Ok(result)
    }
}
