mod cluster;
mod error;
mod events;
mod participant;
mod priority;

pub use cluster::Cluster;
pub use cluster::ElectionOutcome;
pub use error::ElectionError;
pub use events::ElectionEvent;
pub use events::ElectionObserver;
pub use events::NoOpObserver;
pub use participant::ElectionReply;
pub use participant::Participant;
pub use participant::PeerTransport;
pub use participant::RejectReason;
pub use priority::Priority;
