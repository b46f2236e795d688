mod api;
mod election;

pub use api::create_discard_logger;
pub use api::create_root_logger_for_file;
pub use api::create_root_logger_for_stdout;
pub use api::event_channel;
pub use api::try_create_simulation;
pub use api::ChannelObserver;
pub use api::ElectionEventListener;
pub use api::LoggingObserver;
pub use api::Simulation;
pub use api::SimulationConfig;
pub use api::SimulationCreationError;
pub use api::SimulationOptions;
pub use election::Cluster;
pub use election::ElectionError;
pub use election::ElectionEvent;
pub use election::ElectionObserver;
pub use election::ElectionOutcome;
pub use election::ElectionReply;
pub use election::NoOpObserver;
pub use election::Participant;
pub use election::PeerTransport;
pub use election::Priority;
pub use election::RejectReason;

// `crate::{root_mod}` holds no code, just `mod` and `pub use`. Nothing below the root is `pub mod`;
// types are exported one by one.
