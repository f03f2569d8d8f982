/// What a tick does after one of its actions fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FailurePolicy {
    /// Record the failure and keep applying the rest of the batch.
    #[default]
    Continue,

    /// Record the failure and skip every remaining action in the batch.
    Abort,
}

/// Game configuration and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Behaviour of a tick when an action fails. Earlier actions are never
    /// rolled back either way.
    pub failure_policy: FailurePolicy,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure_policy(failure_policy: FailurePolicy) -> Self {
        Self { failure_policy }
    }
}
