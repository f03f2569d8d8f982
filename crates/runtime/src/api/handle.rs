//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! applying ticks, querying the registry, or streaming events from specific
//! topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use house_core::{Action, TickReport};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Registry sizes at the moment of the query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HouseSummary {
    pub rooms: usize,
    pub mob_classes: usize,
    pub mobs: usize,
}

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Apply a batch of actions as one tick.
    ///
    /// Action failures are reported inside the returned [`TickReport`]; an
    /// `Err` here means the worker itself is gone.
    pub async fn apply_tick(&self, actions: Vec<Action>) -> Result<TickReport> {
        self.request(|reply| Command::ApplyTick { actions, reply })
            .await
    }

    /// Apply a single action as a tick of its own.
    pub async fn apply(&self, action: Action) -> Result<TickReport> {
        self.apply_tick(vec![action]).await
    }

    /// Room the named mob is currently in, if the mob exists and is placed.
    pub async fn location(&self, mob: impl Into<String>) -> Result<Option<String>> {
        let mob = mob.into();
        self.request(|reply| Command::QueryLocation { mob, reply })
            .await
    }

    /// Registry sizes.
    pub async fn summary(&self) -> Result<HouseSummary> {
        self.request(|reply| Command::QuerySummary { reply }).await
    }

    /// Instantiate a mob class into the house.
    pub async fn spawn(
        &self,
        class: impl Into<String>,
        name: impl Into<String>,
        room: Option<String>,
    ) -> Result<()> {
        let (class, name) = (class.into(), name.into());
        self.request(|reply| Command::Spawn {
            class,
            name,
            room,
            reply,
        })
        .await??;
        Ok(())
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::GameState` - Actions applied and failed
    /// - `Topic::Output` - Rendered describe text
    /// - `Topic::Tick` - Tick summaries
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }
}
