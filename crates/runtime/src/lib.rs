//! Runtime orchestration for the house simulation.
//!
//! This crate wires a [`house_core::House`] into a background worker and exposes
//! it through a cloneable [`RuntimeHandle`]. Player text arrives through a
//! [`Transport`], is parsed into actions by [`input`], and is applied one tick at
//! a time by the worker. Results are written back to the transport and
//! published on the [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`transport`] abstracts the line-oriented connection to a player
//! - [`input`] turns player text into actions
//! - [`session`] drives one player connection
//! - [`workers`] keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod input;
pub mod runtime;
pub mod session;
pub mod transport;

mod workers;

pub use api::{HouseSummary, Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, GameStateEvent, OutputEvent, TickEvent, Topic};
pub use input::{CommandError, PlayerCommand, parse_command};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use session::Session;
pub use transport::{RawTransport, Transport, TransportError};
