//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive the house.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use house_core::{GameConfig, House};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl RuntimeConfig {
    pub const COMMAND_BUFFER_ENV: &'static str = "HOUSE_COMMAND_BUFFER";
    pub const EVENT_BUFFER_ENV: &'static str = "HOUSE_EVENT_BUFFER";

    /// Defaults, with channel sizes overridden from the environment.
    ///
    /// Unset, unparsable or zero values keep the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            command_buffer_size: buffer_from_env(
                Self::COMMAND_BUFFER_ENV,
                defaults.command_buffer_size,
            ),
            event_buffer_size: buffer_from_env(Self::EVENT_BUFFER_ENV, defaults.event_buffer_size),
            ..defaults
        }
    }

    pub fn with_game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = game_config;
        self
    }
}

fn buffer_from_env(key: &str, default: usize) -> usize {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(size) if size > 0 => size,
            _ => {
                tracing::warn!(key, value = %raw, default, "Ignoring invalid buffer size");
                default
            }
        },
        Err(_) => default,
    }
}

/// Main runtime that orchestrates the house simulation
///
/// Runtime owns the worker task. [`RuntimeHandle`] provides a cloneable
/// façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every outstanding handle has been dropped, so
    /// clones held elsewhere must be released first.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    house: Option<House>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            house: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the house the worker will own
    pub fn house(mut self, house: House) -> Self {
        self.house = Some(house);
        self
    }

    /// Build the runtime and spawn its worker.
    ///
    /// Fails on zero-sized channel buffers. Must be called from within a
    /// tokio runtime.
    pub fn build(self) -> Result<Runtime> {
        let house = self.house.ok_or(RuntimeError::MissingHouse)?;
        if self.config.command_buffer_size == 0 {
            return Err(RuntimeError::InvalidConfig("command_buffer_size must be non-zero"));
        }
        if self.config.event_buffer_size == 0 {
            return Err(RuntimeError::InvalidConfig("event_buffer_size must be non-zero"));
        }

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let sim_worker =
            SimulationWorker::new(house, self.config.game_config, command_rx, event_bus);

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            sim_worker_handle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_house() {
        let result = Runtime::builder().build();
        assert!(matches!(result, Err(RuntimeError::MissingHouse)));
    }

    #[test]
    fn test_build_rejects_zero_buffers() {
        let config = RuntimeConfig {
            command_buffer_size: 0,
            ..RuntimeConfig::default()
        };
        let result = Runtime::builder().config(config).house(House::new()).build();
        assert!(matches!(result, Err(RuntimeError::InvalidConfig(_))));

        let config = RuntimeConfig {
            event_buffer_size: 0,
            ..RuntimeConfig::default()
        };
        let result = Runtime::builder().config(config).house(House::new()).build();
        assert!(matches!(result, Err(RuntimeError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_shutdown_after_build() {
        let runtime = Runtime::builder().house(House::new()).build().unwrap();
        let summary = runtime.handle().summary().await.unwrap();
        assert_eq!(summary.rooms, 0);
        runtime.shutdown().await.unwrap();
    }

    #[test]
    fn test_buffer_from_env_falls_back() {
        assert_eq!(buffer_from_env("HOUSE_TEST_UNSET_BUFFER", 7), 7);
    }
}
