//! Event types for different topics.

use house_core::{Action, ActionResult, ErrorSeverity, TransitionPhase};
use serde::{Deserialize, Serialize};

/// Events related to registry changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// An action was applied to the house
    ActionApplied {
        tick: u64,
        action: Action,
        result: ActionResult,
    },

    /// An action failed during the execution pipeline. The house is unchanged
    /// by it.
    ActionFailed {
        tick: u64,
        action: Action,
        phase: TransitionPhase,
        error: String,
        severity: ErrorSeverity,
    },
}

/// Text rendered for the player who issued a describe action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputEvent {
    pub text: String,
}

/// Summary published once a tick has been processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickEvent {
    pub tick: u64,
    pub applied: usize,
    pub failed: usize,
    /// Actions left unapplied because the batch was aborted
    pub skipped: usize,
}
