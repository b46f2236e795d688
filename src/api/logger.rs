use chrono::Utc;
use slog::Drain;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

pub fn create_root_logger_for_stdout(simulation_name: &str) -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    slog::Logger::root(drain, slog::o!("Simulation" => simulation_name.to_string()))
}

/// Logs to `{directory}/{simulation_name}/{timestamp}_info.log`, creating the sub-directory if
/// needed.
pub fn create_root_logger_for_file<P: AsRef<Path>>(directory: P, simulation_name: &str) -> io::Result<slog::Logger> {
    let log_directory = directory.as_ref().join(simulation_name);
    fs::create_dir_all(&log_directory)?;

    let now = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_directory.join(format!("{}_info.log", now)))?;

    let decorator = slog_term::PlainDecorator::new(file);
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    Ok(slog::Logger::root(
        drain,
        slog::o!("Simulation" => simulation_name.to_string()),
    ))
}

/// Swallows everything. Handy when only the event channel matters.
pub fn create_discard_logger() -> slog::Logger {
    slog::Logger::root(slog::Discard, slog::o!())
}
