//! This mod holds the driver-facing API: configuring a simulation, observing it, and logging it.
mod event_bus;
mod logger;
mod options;
mod wiring;

pub use event_bus::event_channel;
pub use event_bus::ChannelObserver;
pub use event_bus::ElectionEventListener;
pub use event_bus::LoggingObserver;
pub use logger::create_discard_logger;
pub use logger::create_root_logger_for_file;
pub use logger::create_root_logger_for_stdout;
pub use options::SimulationOptions;
pub use wiring::try_create_simulation;
pub use wiring::Simulation;
pub use wiring::SimulationConfig;
pub use wiring::SimulationCreationError;
