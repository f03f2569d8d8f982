//! Action transition dispatch and execution logic.

use crate::action::{ActionKind, ActionResult, ActionTransition};
use crate::state::House;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the house and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    house: &mut House,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(house)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(house)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(house)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action kind to its transition and wraps the result in [`ActionResult`].
pub(super) fn execute_transition(
    kind: &ActionKind,
    house: &mut House,
) -> Result<ActionResult, ExecuteError> {
    match kind {
        ActionKind::Move(transition) => {
            let from = drive_transition(transition, house).map_err(ExecuteError::Move)?;
            Ok(ActionResult::Moved {
                mob: transition.mob.clone(),
                from,
                to: transition.destination.clone(),
            })
        }
        ActionKind::Travel(transition) => {
            let (from, to) = drive_transition(transition, house).map_err(ExecuteError::Travel)?;
            Ok(ActionResult::Moved {
                mob: transition.mob.clone(),
                from: Some(from),
                to,
            })
        }
        ActionKind::Describe(transition) => {
            let text = drive_transition(transition, house).map_err(ExecuteError::Describe)?;
            Ok(ActionResult::Described {
                subject: transition.subject.clone(),
                text,
            })
        }
    }
}
