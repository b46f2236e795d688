use crate::election::{
    ElectionError, ElectionEvent, ElectionObserver, ElectionReply, Participant, PeerTransport, Priority, RejectReason,
};
use rand::Rng;
use std::cell::RefCell;

/// The result of an election that ran to completion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionOutcome {
    pub initiator: Priority,
    pub killed: Priority,
    pub winner: Priority,
    /// Peers that acknowledged, in the order they were contacted.
    pub acknowledged_by: Vec<Priority>,
}

/// Cluster owns the fixed roster of participants and carries every message between them. The
/// roster is indexed by priority and never resized.
///
/// A participant stays mutably borrowed for as long as it is handling an election message, so a
/// message routed to a participant that is busy handling one is refused.
pub struct Cluster {
    roster: Vec<RefCell<Participant>>,
    observer: Box<dyn ElectionObserver>,
}

impl Cluster {
    pub fn new(size: usize, observer: Box<dyn ElectionObserver>) -> Result<Self, ElectionError> {
        if size < 1 {
            return Err(ElectionError::InvalidSize(size));
        }

        let roster = (0..size)
            .map(|priority| RefCell::new(Participant::new(Priority::new(priority), size)))
            .collect();

        Ok(Cluster { roster, observer })
    }

    pub fn size(&self) -> usize {
        self.roster.len()
    }

    /// A copy of participant `id` as it is right now. Later changes to the cluster are not
    /// reflected in it.
    pub fn participant(&self, id: Priority) -> Result<Participant, ElectionError> {
        self.slot(id).map(|p| p.borrow().clone())
    }

    pub fn is_alive(&self, id: Priority) -> Result<bool, ElectionError> {
        self.participant(id).map(|p| p.is_alive())
    }

    /// Coordinator as seen by participant `id`, whether or not it is alive.
    pub fn leader_view(&self, id: Priority) -> Result<Priority, ElectionError> {
        self.participant(id).map(|p| p.leader())
    }

    pub fn kill(&self, id: Priority) -> Result<(), ElectionError> {
        self.slot(id)?.borrow_mut().kill();
        Ok(())
    }

    /// Kill `highest` (the highest priority by default), then have `initiator` hold an election.
    /// The whole election, including the final broadcast, completes before this returns.
    pub fn start_election(
        &self,
        initiator: Priority,
        highest: Option<Priority>,
    ) -> Result<ElectionOutcome, ElectionError> {
        if initiator.as_usize() >= self.size() {
            return Err(ElectionError::InvalidInitiator {
                id: initiator.as_usize(),
                size: self.size(),
            });
        }
        let highest = highest.unwrap_or_else(|| Priority::new(self.size() - 1));
        self.kill(highest)?;

        if !self.roster.iter().any(|p| p.borrow().is_alive()) {
            return Err(ElectionError::NoQuorum);
        }

        match self.deliver(initiator, initiator) {
            ElectionReply::Concluded {
                winner,
                acknowledged_by,
            } => Ok(ElectionOutcome {
                initiator,
                killed: highest,
                winner,
                acknowledged_by,
            }),
            ElectionReply::Rejected(reason) => Err(ElectionError::NoElectionHeld { initiator, reason }),
            // Participant::handle_election() only acknowledges messages from another initiator.
            ElectionReply::Acknowledged(_) => unreachable!("Self-initiated election was acknowledged"),
        }
    }

    /// Same as `start_election()` with the initiator drawn uniformly from every priority except
    /// `highest`, the one about to be killed.
    pub fn start_election_with_random_initiator<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        highest: Option<Priority>,
    ) -> Result<ElectionOutcome, ElectionError> {
        let highest = highest.unwrap_or_else(|| Priority::new(self.size() - 1));
        let initiator = if self.size() > 1 {
            // Draw from n-1 slots and step over the killed one.
            let drawn = rng.gen_range(0..self.size() - 1);
            if drawn >= highest.as_usize() {
                drawn + 1
            } else {
                drawn
            }
        } else {
            0
        };

        self.start_election(Priority::new(initiator), Some(highest))
    }

    /// Deliver an election message from `initiator` to `target` and return the responder, if any.
    pub fn route_to(&self, target: Priority, initiator: Priority) -> Result<Option<Priority>, ElectionError> {
        self.slot(target)?;
        self.slot(initiator)?;
        Ok(PeerTransport::route(self, initiator, target))
    }

    /// Announce `winner` to every participant, dead or alive, and end the election everywhere.
    pub fn broadcast_coordinator(&self, winner: Priority) {
        self.notify(ElectionEvent::CoordinatorBroadcast { winner });
        for participant in self.roster.iter() {
            participant.borrow_mut().conclude_election(winner);
        }
    }

    /// `(priority, coordinator view)` of every alive participant, ascending by priority.
    pub fn snapshot(&self) -> Vec<(Priority, Priority)> {
        self.roster
            .iter()
            .map(|p| p.borrow())
            .filter(|p| p.is_alive())
            .map(|p| (p.priority(), p.leader()))
            .collect()
    }

    fn slot(&self, id: Priority) -> Result<&RefCell<Participant>, ElectionError> {
        self.roster.get(id.as_usize()).ok_or(ElectionError::InvalidId {
            id: id.as_usize(),
            size: self.size(),
        })
    }

    fn deliver(&self, to: Priority, initiator: Priority) -> ElectionReply {
        let reply = match self.roster[to.as_usize()].try_borrow_mut() {
            Ok(mut participant) => participant.handle_election(initiator, self),
            Err(_) => {
                let reason = RejectReason::ElectionInProgress;
                self.notify(ElectionEvent::ElectionRejected {
                    by: to,
                    initiator,
                    reason,
                });
                ElectionReply::Rejected(reason)
            }
        };

        if let ElectionReply::Concluded { winner, .. } = &reply {
            self.broadcast_coordinator(*winner);
        }

        reply
    }
}

impl PeerTransport for Cluster {
    fn route(&self, from: Priority, to: Priority) -> Option<Priority> {
        if to.as_usize() >= self.size() {
            return None;
        }

        self.notify(ElectionEvent::MessageRouted { from, to });
        self.deliver(to, from).responder()
    }

    fn notify(&self, event: ElectionEvent) {
        self.observer.on_event(&event);
    }
}
