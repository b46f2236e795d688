use crate::election::{Priority, RejectReason};

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ElectionError {
    #[error("A cluster needs at least one participant, got {0}")]
    InvalidSize(usize),
    #[error("No participant {id} in a cluster of {size}")]
    InvalidId { id: usize, size: usize },
    #[error("Initiator {id} is not in a cluster of {size}")]
    InvalidInitiator { id: usize, size: usize },
    #[error("No election held: initiator {initiator} refused ({reason})")]
    NoElectionHeld {
        initiator: Priority,
        reason: RejectReason,
    },
    #[error("No participant is alive")]
    NoQuorum,
}
