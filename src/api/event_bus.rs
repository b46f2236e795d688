use crate::election::{ElectionEvent, ElectionObserver};
use tokio::sync::mpsc;

// Unlike a watch channel, every event is queued, so a consumer sees the full protocol trace even if
// it only starts reading after the election has finished.

/// `event_channel()` creates an observer to hand to the cluster and the listener that receives
/// everything it observes.
pub fn event_channel() -> (ChannelObserver, ElectionEventListener) {
    let (snd, rcv) = mpsc::unbounded_channel();

    (ChannelObserver { snd }, ElectionEventListener { rcv })
}

pub struct ChannelObserver {
    snd: mpsc::UnboundedSender<ElectionEvent>,
}

impl ElectionObserver for ChannelObserver {
    fn on_event(&self, event: &ElectionEvent) {
        // Listener may have been dropped, nobody cares about the event then.
        let _ = self.snd.send(event.clone());
    }
}

pub struct ElectionEventListener {
    rcv: mpsc::UnboundedReceiver<ElectionEvent>,
}

impl ElectionEventListener {
    /// `next_event()` returns the next observed event, or None once the cluster is gone and every
    /// event has been read.
    pub async fn next_event(&mut self) -> Option<ElectionEvent> {
        self.rcv.recv().await
    }

    /// Non-blocking version of `next_event()`. Returns None if nothing is queued right now.
    pub fn try_next_event(&mut self) -> Option<ElectionEvent> {
        self.rcv.try_recv().ok()
    }

    pub fn drain(&mut self) -> Vec<ElectionEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_next_event() {
            events.push(event);
        }
        events
    }
}

/// Writes every protocol event to the info log.
pub struct LoggingObserver {
    logger: slog::Logger,
}

impl LoggingObserver {
    pub fn new(logger: slog::Logger) -> Self {
        LoggingObserver { logger }
    }
}

impl ElectionObserver for LoggingObserver {
    fn on_event(&self, event: &ElectionEvent) {
        let logger = &self.logger;
        match event {
            ElectionEvent::ElectionRejected { by, initiator, reason } => {
                slog::info!(
                    logger,
                    "{} does not respond to the election message from {}: {}",
                    by,
                    initiator,
                    reason
                );
            }
            ElectionEvent::ElectionStarted { by } => {
                slog::info!(logger, "{} is holding an election", by);
            }
            ElectionEvent::MessageRouted { from, to } => {
                slog::debug!(logger, "{} sends election message to {}", from, to);
            }
            ElectionEvent::Acknowledged { by, initiator } => {
                slog::info!(logger, "{} acknowledges {}, available for leadership", by, initiator);
            }
            ElectionEvent::CoordinatorBroadcast { winner } => {
                slog::info!(logger, "Announcing {} as coordinator to all participants, election over", winner);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::election::Priority;

    #[tokio::test]
    async fn listener_receives_events_in_order() {
        let (observer, mut listener) = event_channel();
        let first = ElectionEvent::ElectionStarted { by: Priority::new(0) };
        let second = ElectionEvent::CoordinatorBroadcast { winner: Priority::new(1) };

        observer.on_event(&first);
        observer.on_event(&second);
        drop(observer);

        assert_eq!(Some(first), listener.next_event().await);
        assert_eq!(Some(second), listener.next_event().await);
        assert_eq!(None, listener.next_event().await);
    }

    #[test]
    fn observer_outlives_listener() {
        let (observer, listener) = event_channel();
        drop(listener);

        observer.on_event(&ElectionEvent::ElectionStarted { by: Priority::new(0) });
    }

    #[test]
    fn try_next_event_does_not_block() {
        let (_observer, mut listener) = event_channel();

        assert_eq!(None, listener.try_next_event());
        assert!(listener.drain().is_empty());
    }
}
