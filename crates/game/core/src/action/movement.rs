use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{House, HouseError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("hey! {0} isn't a mob")]
    UnknownMob(String),

    #[error("hey! {0} isn't a room")]
    UnknownRoom(String),

    #[error("{mob} should be in {expected} but is in {actual:?}")]
    LocationMismatch {
        mob: String,
        expected: String,
        actual: Option<String>,
    },

    #[error("registry rejected the move: {0}")]
    Registry(HouseError),
}

impl MoveError {
    fn from_registry(error: HouseError) -> Self {
        match error {
            HouseError::UnknownMob(mob) => Self::UnknownMob(mob),
            HouseError::UnknownRoom(room) => Self::UnknownRoom(room),
            other @ (HouseError::UnknownClass(_) | HouseError::DuplicateMob(_)) => {
                Self::Registry(other)
            }
        }
    }
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownMob(_) | Self::UnknownRoom(_) => ErrorSeverity::Validation,
            Self::LocationMismatch { .. } | Self::Registry(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownMob(_) => "MOVE_UNKNOWN_MOB",
            Self::UnknownRoom(_) => "MOVE_UNKNOWN_ROOM",
            Self::LocationMismatch { .. } => "MOVE_LOCATION_MISMATCH",
            Self::Registry(_) => "MOVE_REGISTRY",
        }
    }
}

/// Puts a mob in any known room.
///
/// There is no adjacency check: in this house a mob can simply be somewhere
/// else on the next tick. Use [`TravelAction`](super::TravelAction) to follow
/// exits instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub mob: String,
    pub destination: String,
}

impl MoveAction {
    pub fn new(mob: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            mob: mob.into(),
            destination: destination.into(),
        }
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    /// Room the mob left, if it had one.
    type Result = Option<String>;

    fn pre_validate(&self, house: &House) -> Result<(), Self::Error> {
        if house.mob(&self.mob).is_none() {
            return Err(MoveError::UnknownMob(self.mob.clone()));
        }
        if house.room(&self.destination).is_none() {
            return Err(MoveError::UnknownRoom(self.destination.clone()));
        }
        Ok(())
    }

    fn apply(&self, house: &mut House) -> Result<Self::Result, Self::Error> {
        house
            .set_location(&self.mob, &self.destination)
            .map_err(MoveError::from_registry)
    }

    fn post_validate(&self, house: &House) -> Result<(), Self::Error> {
        match house.location(&self.mob) {
            Some(room) if room == self.destination => Ok(()),
            actual => Err(MoveError::LocationMismatch {
                mob: self.mob.clone(),
                expected: self.destination.clone(),
                actual: actual.map(str::to_owned),
            }),
        }
    }
}
