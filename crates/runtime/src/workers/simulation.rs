//! Simulation worker that owns the authoritative [`house_core::House`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), applies ticks
//! via [`house_core::HouseEngine`], and publishes events to the EventBus.

use tokio::sync::{mpsc, oneshot};

use house_core::{
    Action, ActionOutcome, ActionResult, ErrorSeverity, GameConfig, House, HouseEngine,
    HouseError, TickReport,
};
use tracing::{debug, error, info, warn};

use crate::api::HouseSummary;
use crate::events::{Event, EventBus, GameStateEvent, OutputEvent, TickEvent};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Apply a batch of actions as one tick.
    ApplyTick {
        actions: Vec<Action>,
        reply: oneshot::Sender<TickReport>,
    },
    /// Look up the room a mob is in.
    QueryLocation {
        mob: String,
        reply: oneshot::Sender<Option<String>>,
    },
    /// Count rooms, classes and mobs.
    QuerySummary { reply: oneshot::Sender<HouseSummary> },
    /// Instantiate a mob class outside of the tick pipeline.
    Spawn {
        class: String,
        name: String,
        room: Option<String>,
        reply: oneshot::Sender<Result<(), HouseError>>,
    },
}

/// Background task that processes house commands.
///
/// Commands are handled strictly one at a time, so every tick observes the
/// complete effects of the ticks before it.
pub struct SimulationWorker {
    house: House,
    config: GameConfig,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    tick: u64,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        house: House,
        config: GameConfig,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            target: "runtime::worker",
            rooms = house.room_count(),
            mobs = house.mob_count(),
            policy = %config.failure_policy,
            "SimulationWorker initialized"
        );

        Self {
            house,
            config,
            command_rx,
            event_bus,
            tick: 0,
        }
    }

    /// Main worker loop. Returns once every handle has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!(target: "runtime::worker", ticks = self.tick, "SimulationWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::ApplyTick { actions, reply } => {
                let report = self.apply_tick(&actions);
                if reply.send(report).is_err() {
                    debug!("ApplyTick reply channel closed (caller dropped)");
                }
            }
            Command::QueryLocation { mob, reply } => {
                let location = self.house.location(&mob).map(str::to_owned);
                if reply.send(location).is_err() {
                    debug!("QueryLocation reply channel closed (caller dropped)");
                }
            }
            Command::QuerySummary { reply } => {
                let summary = HouseSummary {
                    rooms: self.house.room_count(),
                    mob_classes: self.house.catalog().len(),
                    mobs: self.house.mob_count(),
                };
                if reply.send(summary).is_err() {
                    debug!("QuerySummary reply channel closed (caller dropped)");
                }
            }
            Command::Spawn {
                class,
                name,
                room,
                reply,
            } => {
                let result = self
                    .house
                    .spawn(&class, &name, room.as_deref())
                    .map(|_| ());
                match &result {
                    Ok(()) => info!(
                        target: "runtime::worker",
                        class = %class,
                        mob = %name,
                        room = ?room,
                        "Mob spawned"
                    ),
                    Err(e) => warn!(target: "runtime::worker", error = %e, "Spawn rejected"),
                }
                if reply.send(result).is_err() {
                    debug!("Spawn reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Runs one tick through the engine and publishes its events.
    fn apply_tick(&mut self, actions: &[Action]) -> TickReport {
        self.tick += 1;
        let tick = self.tick;

        let mut engine = HouseEngine::with_config(&mut self.house, &self.config);
        let report = engine.tick(actions);

        for outcome in &report.outcomes {
            self.publish_outcome(tick, outcome);
        }

        let event = TickEvent {
            tick,
            applied: report.successes().count(),
            failed: report.failures().count(),
            skipped: report.skipped,
        };
        debug!(
            target: "runtime::worker",
            tick,
            applied = event.applied,
            failed = event.failed,
            skipped = event.skipped,
            "Tick complete"
        );
        self.event_bus.publish(Event::Tick(event));

        report
    }

    fn publish_outcome(&self, tick: u64, outcome: &ActionOutcome) {
        let action = outcome.action.clone();

        match &outcome.result {
            Ok(result) => {
                if let ActionResult::Described { text, .. } = result {
                    self.event_bus
                        .publish(Event::Output(OutputEvent { text: text.clone() }));
                }
                self.event_bus
                    .publish(Event::GameState(GameStateEvent::ActionApplied {
                        tick,
                        action,
                        result: result.clone(),
                    }));
            }
            Err(err) => {
                let severity = err.severity_for(action.source);
                match severity {
                    ErrorSeverity::Internal => error!(
                        target: "runtime::worker",
                        tick,
                        action = action.as_snake_case(),
                        phase = err.phase().as_str(),
                        error = %err,
                        "Action failed: registry inconsistent"
                    ),
                    ErrorSeverity::Validation => debug!(
                        target: "runtime::worker",
                        tick,
                        action = action.as_snake_case(),
                        phase = err.phase().as_str(),
                        error = %err,
                        "Action rejected"
                    ),
                }
                self.event_bus
                    .publish(Event::GameState(GameStateEvent::ActionFailed {
                        tick,
                        phase: err.phase(),
                        error: err.reason(),
                        severity,
                        action,
                    }));
            }
        }
    }
}
