//! Error types for action execution pipeline.

use crate::action::{ActionSource, ActionTransition, DescribeAction, MoveAction, TravelAction};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("travel action failed: {0}")]
    Travel(TransitionPhaseError<<TravelAction as ActionTransition>::Error>),

    #[error("describe action failed: {0}")]
    Describe(TransitionPhaseError<<DescribeAction as ActionTransition>::Error>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::Move(e) => e.phase,
            ExecuteError::Travel(e) => e.phase,
            ExecuteError::Describe(e) => e.phase,
        }
    }

    /// The underlying domain error, without the phase prefix.
    ///
    /// This is the text to show whoever issued the action.
    pub fn reason(&self) -> String {
        match self {
            ExecuteError::Move(e) => e.error.to_string(),
            ExecuteError::Travel(e) => e.error.to_string(),
            ExecuteError::Describe(e) => e.error.to_string(),
        }
    }

    /// Severity of this failure for an action issued by `source`.
    ///
    /// Bad references typed by a player are the player's mistake. The same
    /// references coming from a script mean the world data is inconsistent.
    pub fn severity_for(&self, source: ActionSource) -> ErrorSeverity {
        match (self.severity(), source) {
            (ErrorSeverity::Validation, ActionSource::Script) => ErrorSeverity::Internal,
            (severity, _) => severity,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Move(e) => e.error.severity(),
            ExecuteError::Travel(e) => e.error.severity(),
            ExecuteError::Describe(e) => e.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Move(e) => e.error.error_code(),
            ExecuteError::Travel(e) => e.error.error_code(),
            ExecuteError::Describe(e) => e.error.error_code(),
        }
    }
}
