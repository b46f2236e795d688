use bully::{SimulationConfig, SimulationOptions};
use std::error::Error;
use std::process;

fn main() {
    let logger = bully::create_root_logger_for_stdout("bully-5");

    let result = run(&logger);
    if let Err(e) = &result {
        slog::error!(logger, "Simulation failed: {}", e);
    }

    // Dropping the root logger flushes the async drain, process::exit() would skip that.
    drop(logger);
    if result.is_err() {
        process::exit(1);
    }
}

fn run(logger: &slog::Logger) -> Result<(), Box<dyn Error>> {
    let mut simulation = bully::try_create_simulation(SimulationConfig {
        info_logger: logger.clone(),
        options: SimulationOptions {
            cluster_size: Some(5),
            ..SimulationOptions::default()
        },
    })?;

    slog::info!(logger, "Initial state:");
    simulation.show();

    slog::info!(logger, "On killing the leader 4:");
    simulation.kill_leader_and_elect()?;
    simulation.show();

    Ok(())
}
