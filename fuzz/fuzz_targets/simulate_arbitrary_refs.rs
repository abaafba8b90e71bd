#![no_main]

use libfuzzer_sys::fuzz_target;
use mru_sim::simulator::{ReplacementSimulator, simulate};

// Fuzz the simulator with arbitrary reference strings.
//
// Checks on every input:
// - one trace record per reference
// - fault count agrees with the trace
// - occupied frames never exceed the frame count
// - the batch run and a stepwise run agree
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let frame_count = (data[0] as usize % 16) + 1;
    let pages: Vec<u8> = data[1..].iter().map(|b| b % 32).collect();

    let result = match simulate(&pages, frame_count) {
        Ok(result) => result,
        Err(_) => unreachable!("frame_count is always >= 1"),
    };

    assert_eq!(result.trace().len(), pages.len());
    let faults = result.trace().iter().filter(|r| r.access.is_fault()).count();
    assert_eq!(result.faults(), faults);
    for record in result.trace() {
        assert_eq!(record.frames.len(), frame_count);
        assert!(record.resident_count() <= frame_count);
    }

    let Ok(sim) = ReplacementSimulator::new(frame_count) else {
        return;
    };
    let mut run = sim.start();
    for &page in &pages {
        run.access(page);
        if let Err(err) = run.frames().check_invariants() {
            panic!("frame invariants broken: {err}");
        }
    }
    assert_eq!(run.finish(), result);
});
