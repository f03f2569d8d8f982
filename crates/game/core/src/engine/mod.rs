//! Action execution pipeline and tick loop.
//!
//! The [`HouseEngine`] is the only sanctioned way to mutate a [`House`] during
//! play. It routes each [`Action`] through its three transition phases and
//! surfaces rich error information for the runtime.

mod errors;
mod tick;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use tick::{ActionOutcome, TickReport};

use crate::action::{Action, ActionResult};
use crate::config::{FailurePolicy, GameConfig};
use crate::state::House;

/// Applies actions to a borrowed house.
///
/// The engine holds the house exclusively for its lifetime, so exactly one
/// tick can be in flight at any time.
pub struct HouseEngine<'a> {
    house: &'a mut House,
    policy: FailurePolicy,
}

impl<'a> HouseEngine<'a> {
    /// Creates an engine using the default [`FailurePolicy::Continue`].
    pub fn new(house: &'a mut House) -> Self {
        Self {
            house,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_config(house: &'a mut House, config: &GameConfig) -> Self {
        Self {
            house,
            policy: config.failure_policy,
        }
    }

    pub fn house(&self) -> &House {
        self.house
    }

    /// Executes a single action.
    ///
    /// Validation runs before any mutation, so a failed action leaves the
    /// house exactly as it found it.
    pub fn execute(&mut self, action: &Action) -> Result<ActionResult, ExecuteError> {
        transition::execute_transition(&action.kind, self.house)
    }
}
