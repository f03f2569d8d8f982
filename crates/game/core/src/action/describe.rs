use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::state::House;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DescribeError {
    #[error("there is no {0} here")]
    UnknownSubject(String),
}

impl GameError for DescribeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "DESCRIBE_UNKNOWN_SUBJECT"
    }
}

/// Renders a room or a mob by name. Rooms win when both share a name.
///
/// A room's description is followed by one status line per mob inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescribeAction {
    pub subject: String,
}

impl DescribeAction {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    fn render(&self, house: &House) -> Result<String, DescribeError> {
        if let Some(room) = house.room(&self.subject) {
            let mut lines = vec![room.render()];
            lines.extend(house.occupants(room.name()).map(|mob| mob.render()));
            return Ok(lines.join("\n"));
        }

        house
            .mob(&self.subject)
            .map(|mob| mob.render())
            .ok_or_else(|| DescribeError::UnknownSubject(self.subject.clone()))
    }
}

impl ActionTransition for DescribeAction {
    type Error = DescribeError;
    type Result = String;

    fn apply(&self, house: &mut House) -> Result<Self::Result, Self::Error> {
        self.render(house)
    }
}
