//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{GameStateEvent, OutputEvent, TickEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Registry changes (actions applied or failed)
    GameState,
    /// Rendered text produced for a player
    Output,
    /// Tick completion summaries
    Tick,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::GameState, Topic::Output, Topic::Tick];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    GameState(GameStateEvent),
    Output(OutputEvent),
    Tick(TickEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::GameState(_) => Topic::GameState,
            Event::Output(_) => Topic::Output,
            Event::Tick(_) => Topic::Tick,
        }
    }
}

/// Topic-based event bus
///
/// The channel map is fixed at construction, so publishing and subscribing
/// never lock.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        // Every topic in `Topic::ALL` is inserted by `with_capacity`.
        &self.channels[&topic]
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_events_reach_only_their_topic() {
        let bus = EventBus::with_capacity(4);
        let mut output_rx = bus.subscribe(Topic::Output);
        let mut tick_rx = bus.subscribe(Topic::Tick);

        bus.publish(Event::Output(OutputEvent {
            text: "hello".into(),
        }));

        match output_rx.recv().await.unwrap() {
            Event::Output(event) => assert_eq!(event.text, "hello"),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(tick_rx.try_recv().is_err());
    }

    #[test]
    fn test_publish_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(Event::Tick(TickEvent {
            tick: 1,
            applied: 0,
            failed: 0,
            skipped: 0,
        }));
    }

    #[test]
    fn test_subscribe_multiple() {
        let bus = EventBus::new();
        let receivers = bus.subscribe_multiple(&[Topic::GameState, Topic::Tick]);
        assert_eq!(receivers.len(), 2);
        assert!(receivers.contains_key(&Topic::Tick));
    }
}
