//! Independent simulations over named reference sequences.
//!
//! A front end may supply several sequences at once (for example one per
//! column of an imported table). Each case is simulated with fresh state and
//! results come back in input order. Cases with no references are skipped.
//!
//! With the `concurrency` feature, [`simulate_cases_parallel`] runs every case
//! on its own scoped thread. Runs share nothing but the (immutable, `Copy`)
//! simulator, so no locking is involved.
//!
//! ```
//! use mru_sim::cases::simulate_cases;
//! use mru_sim::simulator::ReplacementSimulator;
//!
//! let sim = ReplacementSimulator::new(3).unwrap();
//! let results = simulate_cases(
//!     &sim,
//!     vec![("loop", vec![1, 2, 3, 1, 2, 3]), ("empty", vec![]), ("one", vec![9])],
//! )
//! .unwrap();
//!
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].name, "loop");
//! assert_eq!(results[0].result.faults(), 3);
//! assert_eq!(results[1].name, "one");
//! ```

use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::simulator::{ReplacementSimulator, SimulationResult};

/// Result of one named case.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaseResult<K> {
    pub name: String,
    pub result: SimulationResult<K>,
}

/// Drops empty cases and checks the rest against the simulator's limits.
///
/// Every case is checked before any runs, so a bad case fails the batch
/// without partial output.
fn prepare<K, I, S>(
    simulator: &ReplacementSimulator,
    cases: I,
) -> Result<Vec<(String, Vec<K>)>, ConfigError>
where
    I: IntoIterator<Item = (S, Vec<K>)>,
    S: Into<String>,
{
    let mut prepared = Vec::new();
    for (name, references) in cases {
        let name = name.into();
        if references.is_empty() {
            debug!(case = %name, "skipping empty case");
            continue;
        }
        if let Some(limits) = simulator.limits() {
            limits
                .check_sequence_len(references.len())
                .map_err(|err| ConfigError::new(format!("case `{name}`: {err}")))?;
        }
        prepared.push((name, references));
    }
    Ok(prepared)
}

/// Simulates each case in order on the current thread.
pub fn simulate_cases<K, I, S>(
    simulator: &ReplacementSimulator,
    cases: I,
) -> Result<Vec<CaseResult<K>>, ConfigError>
where
    K: Clone + Eq + Hash,
    I: IntoIterator<Item = (S, Vec<K>)>,
    S: Into<String>,
{
    let prepared = prepare(simulator, cases)?;
    Ok(prepared
        .into_iter()
        .map(|(name, references)| CaseResult {
            result: simulator.simulate(&references),
            name,
        })
        .collect())
}

/// Simulates each case on its own scoped thread; results keep input order.
#[cfg(feature = "concurrency")]
pub fn simulate_cases_parallel<K, I, S>(
    simulator: &ReplacementSimulator,
    cases: I,
) -> Result<Vec<CaseResult<K>>, ConfigError>
where
    K: Clone + Eq + Hash + Send + Sync,
    I: IntoIterator<Item = (S, Vec<K>)>,
    S: Into<String>,
{
    let prepared = prepare(simulator, cases)?;
    let sim = *simulator;

    let results = std::thread::scope(|scope| {
        let handles: Vec<_> = prepared
            .into_iter()
            .map(|(name, references)| {
                scope.spawn(move || CaseResult {
                    result: sim.simulate(&references),
                    name,
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });
    Ok(results)
}
