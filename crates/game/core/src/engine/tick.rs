use crate::action::{Action, ActionResult};
use crate::config::FailurePolicy;
use crate::error::ErrorSeverity;

use super::{ExecuteError, HouseEngine};

/// Result of applying one action within a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Position of the action in the submitted batch.
    pub index: usize,
    pub action: Action,
    pub result: Result<ActionResult, ExecuteError>,
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Severity of the failure, taking the action's source into account.
    pub fn severity(&self) -> Option<ErrorSeverity> {
        self.result
            .as_ref()
            .err()
            .map(|error| error.severity_for(self.action.source))
    }
}

/// Everything that happened during one tick, in application order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub outcomes: Vec<ActionOutcome>,
    /// Actions left unapplied because the batch was aborted.
    pub skipped: usize,
}

impl TickReport {
    pub fn failures(&self) -> impl Iterator<Item = &ActionOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }

    pub fn successes(&self) -> impl Iterator<Item = &ActionOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_success())
    }

    /// True when every submitted action was applied successfully.
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.outcomes.iter().all(ActionOutcome::is_success)
    }

    pub fn was_aborted(&self) -> bool {
        self.skipped > 0
    }
}

/// Tick methods for HouseEngine.
impl HouseEngine<'_> {
    /// Applies `actions` strictly in order against the same house.
    ///
    /// Each action observes the effects of every earlier one. Nothing is
    /// rolled back. After a failure the batch continues or stops according to
    /// the engine's [`FailurePolicy`].
    pub fn tick(&mut self, actions: &[Action]) -> TickReport {
        let mut report = TickReport::default();

        for (index, action) in actions.iter().enumerate() {
            let result = self.execute(action);
            let failed = result.is_err();
            report.outcomes.push(ActionOutcome {
                index,
                action: action.clone(),
                result,
            });

            if failed && self.policy == FailurePolicy::Abort {
                report.skipped = actions.len() - index - 1;
                break;
            }
        }

        report
    }
}
