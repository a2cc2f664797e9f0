//! Event broadcast for a child browsing context.
//!
//! The host feeds everything observable about a frame (inbound messages,
//! load completions, removal from the document) into one [`ContextEvents`]
//! bus. Consumers subscribe and race those events against the abort signal;
//! nothing here decides what settles a navigation.

use tokio::sync::broadcast;

use framelet_protocol::ChildMessage;

/// Something that happened to a child browsing context.
#[derive(Debug, Clone)]
pub enum ContextEvent {
    /// The child context posted a message.
    Message(ChildMessage),
    /// A navigation inside the frame finished loading.
    Loaded {
        /// URL the frame settled on, as far as the host can tell.
        url: String,
    },
    /// The frame element left the document.
    Removed,
}

/// Broadcast bus for the events of one child frame.
///
/// Emission never blocks and never fails: events emitted with no live
/// subscriber are simply dropped, matching fire-and-forget DOM events.
pub struct ContextEvents {
    tx: broadcast::Sender<ContextEvent>,
}

impl ContextEvents {
    /// Creates a bus with the given broadcast capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emits an event to all current subscribers.
    pub fn emit(&self, event: ContextEvent) {
        let _ = self.tx.send(event);
    }

    /// Subscribes to all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<ContextEvent> {
        self.tx.subscribe()
    }

    /// Subscribes and wraps the receiver in a lag-tolerant stream.
    pub fn stream(&self) -> ContextEventStream {
        ContextEventStream {
            rx: self.tx.subscribe(),
        }
    }

    /// Returns the number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ContextEvents {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Receiver wrapper that logs and continues on broadcast lag.
///
/// A slow consumer losing a few events must not break the processing loop;
/// `None` is returned only when the bus itself is gone.
pub struct ContextEventStream {
    rx: broadcast::Receiver<ContextEvent>,
}

impl ContextEventStream {
    /// Receives the next event, or `None` when the bus closed.
    pub async fn recv(&mut self) -> Option<ContextEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(dropped = n, "context event stream lagged");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use framelet_protocol::Origin;
    use serde_json::json;

    #[tokio::test]
    async fn delivers_to_every_subscriber() {
        let events = ContextEvents::default();
        let mut first = events.subscribe();
        let mut second = events.subscribe();

        events.emit(ContextEvent::Loaded {
            url: "about:blank".into(),
        });

        assert!(matches!(first.recv().await, Ok(ContextEvent::Loaded { .. })));
        assert!(matches!(second.recv().await, Ok(ContextEvent::Loaded { .. })));
    }

    #[tokio::test]
    async fn emit_without_subscribers_is_dropped() {
        let events = ContextEvents::default();
        events.emit(ContextEvent::Removed);

        // Only events emitted after subscription are seen.
        let mut stream = events.stream();
        events.emit(ContextEvent::Loaded {
            url: "about:blank".into(),
        });
        assert!(matches!(
            stream.recv().await,
            Some(ContextEvent::Loaded { .. })
        ));
    }

    #[tokio::test]
    async fn stream_survives_lag() {
        let events = ContextEvents::new(2);
        let mut stream = events.stream();

        for i in 0..8 {
            let origin = Origin::parse("https://app.example").unwrap();
            events.emit(ContextEvent::Message(ChildMessage::new(
                origin,
                json!({ "seq": i }),
            )));
        }
        events.emit(ContextEvent::Removed);

        // Lagged events are dropped, but the stream keeps yielding.
        let mut saw_removed = false;
        while let Some(event) = stream.recv().await {
            if matches!(event, ContextEvent::Removed) {
                saw_removed = true;
                break;
            }
        }
        assert!(saw_removed);
    }

    #[tokio::test]
    async fn stream_ends_when_bus_dropped() {
        let events = ContextEvents::default();
        let mut stream = events.stream();
        drop(events);
        assert!(stream.recv().await.is_none());
    }
}
