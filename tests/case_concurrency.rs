// ==============================================
// CASE CONCURRENCY TESTS (integration)
// ==============================================
//
// Independent cases share no mutable state, so running them on many threads
// must produce exactly what a sequential pass produces.

use std::sync::Arc;
use std::thread;

use mru_sim::prelude::*;

fn cases(count: u32) -> Vec<(String, Vec<u32>)> {
    (0..count)
        .map(|c| {
            let seq = (0..20).map(|i| (i * 7 + c * 3) % (c % 5 + 4)).collect();
            (format!("column_{c}"), seq)
        })
        .collect()
}

#[test]
fn parallel_cases_keep_input_order() {
    let sim = ReplacementSimulator::new(3).unwrap();
    let results = simulate_cases_parallel(&sim, cases(16)).unwrap();

    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    let expected: Vec<String> = (0..16).map(|c| format!("column_{c}")).collect();
    assert_eq!(names, expected);
}

#[test]
fn parallel_cases_match_sequential() {
    let sim = SimulatorBuilder::new(4)
        .limits(SimulationLimits::default())
        .try_build()
        .unwrap();

    let sequential = simulate_cases(&sim, cases(12)).unwrap();
    let parallel = simulate_cases_parallel(&sim, cases(12)).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn parallel_limits_checked_before_any_run() {
    let sim = SimulatorBuilder::new(3)
        .limits(SimulationLimits::default())
        .try_build()
        .unwrap();
    let mut input = cases(4);
    input.push(("too_long".to_string(), (0..30).collect()));

    let err = simulate_cases_parallel(&sim, input).unwrap_err();
    assert!(err.message().starts_with("case `too_long`"));
}

#[test]
fn shared_simulator_across_threads() {
    let sim = Arc::new(ReplacementSimulator::new(3).unwrap());
    let seq: Vec<u32> = vec![7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
    let expected = sim.simulate(&seq);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let sim = Arc::clone(&sim);
            let seq = seq.clone();
            thread::spawn(move || sim.simulate(&seq))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
