//! Topic-based event bus implementation.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{Notice, RoundEvent, TimerEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, strum::EnumIter)]
pub enum Topic {
    /// Phase changes and rejected actions
    Round,
    /// Discussion countdown
    Timer,
    /// Fallbacks, aborted starts and other notices
    Notice,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize)]
pub enum SessionEvent {
    Round(RoundEvent),
    Timer(TimerEvent),
    Notice(Notice),
}

impl SessionEvent {
    pub fn topic(&self) -> Topic {
        match self {
            SessionEvent::Round(_) => Topic::Round,
            SessionEvent::Timer(_) => Topic::Timer,
            SessionEvent::Notice(_) => Topic::Notice,
        }
    }
}

impl From<RoundEvent> for SessionEvent {
    fn from(event: RoundEvent) -> Self {
        SessionEvent::Round(event)
    }
}

impl From<TimerEvent> for SessionEvent {
    fn from(event: TimerEvent) -> Self {
        SessionEvent::Timer(event)
    }
}

impl From<Notice> for SessionEvent {
    fn from(event: Notice) -> Self {
        SessionEvent::Notice(event)
    }
}

/// Topic-based event bus
///
/// Consumers subscribe to the topics they care about. Publishing never
/// blocks; events without subscribers are dropped.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<SessionEvent>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        use strum::IntoEnumIterator;

        let channels = Topic::iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<SessionEvent>) {
        let event = event.into();
        let topic = event.topic();

        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<SessionEvent> {
        match self.channels.get(&topic) {
            Some(tx) => tx.subscribe(),
            // Every topic is created in `with_capacity`.
            None => broadcast::channel(1).1,
        }
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<SessionEvent>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
