use crate::election::participant::RejectReason;
use crate::election::Priority;

/// A discrete step of the election protocol, as observed by the group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ElectionEvent {
    /// `by` refused to take part in the election started by `initiator`.
    ElectionRejected {
        by: Priority,
        initiator: Priority,
        reason: RejectReason,
    },
    /// `by` nominated itself and is about to contact every peer.
    ElectionStarted { by: Priority },
    /// An election message was delivered from `from` to `to`.
    MessageRouted { from: Priority, to: Priority },
    /// `by` answered the election message from `initiator` with its own priority.
    Acknowledged { by: Priority, initiator: Priority },
    /// Every participant was told that `winner` is the coordinator, ending the election.
    CoordinatorBroadcast { winner: Priority },
}

/// Sink for protocol events. The election core never does I/O itself; the driver decides what an
/// event turns into by picking the observer.
pub trait ElectionObserver {
    fn on_event(&self, event: &ElectionEvent);
}

pub struct NoOpObserver;

impl ElectionObserver for NoOpObserver {
    fn on_event(&self, _: &ElectionEvent) {}
}

impl ElectionObserver for Vec<Box<dyn ElectionObserver>> {
    fn on_event(&self, event: &ElectionEvent) {
        for observer in self.iter() {
            observer.on_event(event);
        }
    }
}
