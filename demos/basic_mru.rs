use mru_sim::prelude::*;

fn main() -> Result<(), ConfigError> {
    let sim = SimulatorBuilder::new(3)
        .limits(SimulationLimits::default())
        .try_build()?;

    let pages = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
    let result = sim.try_simulate(&pages)?;

    println!("Step | Page | Frames      | Result");
    for record in result.trace() {
        let frames: Vec<String> = record.frames.iter().map(ToString::to_string).collect();
        println!(
            "{:>4} | {:>4} | {:<11} | {}",
            record.step,
            record.reference,
            frames.join(" | "),
            record.access
        );
    }

    println!();
    println!("Total references: {}", result.total_references());
    println!("Page faults:      {}", result.faults());
    println!("Fault rate:       {:.2}%", result.fault_rate_percent());
    Ok(())
}
