//! World state and action pipeline for the house.
//!
//! `house-core` defines the canonical registry of rooms and mobs, the closed
//! set of actions that mutate it, and the engine that applies batches of
//! actions one tick at a time. It performs no I/O; loaders and the runtime
//! depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionKind, ActionResult, ActionSource, ActionTransition, DescribeAction,
    DescribeError, MoveAction, MoveError, TravelAction, TravelError,
};
pub use config::{FailurePolicy, GameConfig};
pub use engine::{
    ActionOutcome, ExecuteError, HouseEngine, TickReport, TransitionPhase, TransitionPhaseError,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Direction, DirectionError, ExitError, HealthDescriptor, House, HouseError,
    InitializationError, Mob, MobCatalog, MobClass, OrphanedExit, Room,
};
