use crate::election::{ElectionEvent, Priority};
use std::cmp;
use std::fmt;

/// PeerTransport is the only way a participant's election logic reaches the rest of the group.
/// Delivery is synchronous: the reply to an election message is the return value of `route()`.
pub trait PeerTransport {
    /// Deliver an election message from `from` to `to`. Returns the responder's priority if `to`
    /// acknowledged, or None if it did not answer.
    fn route(&self, from: Priority, to: Priority) -> Option<Priority>;

    fn notify(&self, event: ElectionEvent);
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RejectReason {
    Dead,
    ElectionInProgress,
    HigherPriorityInitiator,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Dead => write!(f, "participant is dead"),
            RejectReason::ElectionInProgress => write!(f, "election already in progress"),
            RejectReason::HigherPriorityInitiator => write!(f, "initiator has higher priority"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ElectionReply {
    Rejected(RejectReason),
    /// A responder's answer to a peer's election message.
    Acknowledged(Priority),
    /// The originator has heard from every peer. The group must broadcast `winner` to end the
    /// election.
    Concluded {
        winner: Priority,
        acknowledged_by: Vec<Priority>,
    },
}

impl ElectionReply {
    pub fn responder(&self) -> Option<Priority> {
        match self {
            ElectionReply::Acknowledged(priority) => Some(*priority),
            _ => None,
        }
    }
}

/// Participant is a single ranked member of the group. Once dead, none of its methods mutate state.
#[derive(Clone, Debug)]
pub struct Participant {
    priority: Priority,
    cluster_size: usize,
    alive: bool,
    coordinator: Priority,
    election_in_progress: bool,
}

impl Participant {
    /// `new()` creates an alive participant that assumes the highest possible priority in a group
    /// of `cluster_size` is the coordinator.
    pub fn new(priority: Priority, cluster_size: usize) -> Self {
        Participant {
            priority,
            cluster_size,
            alive: true,
            coordinator: Priority::new(cluster_size.saturating_sub(1)),
            election_in_progress: false,
        }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_election_in_progress(&self) -> bool {
        self.election_in_progress
    }

    /// Last known coordinator. This is still answered after death, so callers that care must
    /// check `is_alive()` themselves.
    pub fn leader(&self) -> Priority {
        self.coordinator
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn force_set_coordinator(&mut self, coordinator: Priority) {
        if !self.alive {
            return;
        }
        self.coordinator = coordinator;
    }

    /// Only ratchets the coordinator forward.
    pub fn merge_coordinator(&mut self, candidate: Priority) {
        if !self.alive {
            return;
        }
        self.coordinator = cmp::max(self.coordinator, candidate);
    }

    pub(crate) fn conclude_election(&mut self, winner: Priority) {
        self.force_set_coordinator(winner);
        self.election_in_progress = false;
    }

    /// `handle_election()` is called with `initiator == self.priority()` to start an election, and
    /// by the transport when a peer's election message arrives.
    ///
    /// As responder, the participant nominates itself and acknowledges. As originator, it nominates
    /// itself, contacts every other participant in ascending priority order, and folds the
    /// acknowledgements into its coordinator. The caller owns broadcasting the `Concluded` winner.
    pub fn handle_election(&mut self, initiator: Priority, transport: &dyn PeerTransport) -> ElectionReply {
        if let Some(reason) = self.reject_reason(initiator) {
            transport.notify(ElectionEvent::ElectionRejected {
                by: self.priority,
                initiator,
                reason,
            });
            return ElectionReply::Rejected(reason);
        }

        self.election_in_progress = true;
        self.coordinator = self.priority;

        if initiator != self.priority {
            transport.notify(ElectionEvent::Acknowledged {
                by: self.priority,
                initiator,
            });
            return ElectionReply::Acknowledged(self.priority);
        }

        transport.notify(ElectionEvent::ElectionStarted { by: self.priority });
        let mut acknowledged_by = Vec::new();
        for peer in (0..self.cluster_size).map(Priority::new) {
            if peer == self.priority {
                continue;
            }
            if let Some(responder) = transport.route(self.priority, peer) {
                acknowledged_by.push(responder);
                self.merge_coordinator(responder);
            }
        }

        ElectionReply::Concluded {
            winner: self.coordinator,
            acknowledged_by,
        }
    }

    fn reject_reason(&self, initiator: Priority) -> Option<RejectReason> {
        if !self.alive {
            Some(RejectReason::Dead)
        } else if self.election_in_progress {
            Some(RejectReason::ElectionInProgress)
        } else if initiator > self.priority {
            Some(RejectReason::HigherPriorityInitiator)
        } else {
            None
        }
    }
}
