use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Direction, ExitError, House, HouseError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TravelError {
    #[error("hey! {0} isn't a mob")]
    UnknownMob(String),

    #[error("{0} isn't anywhere yet")]
    NotPlaced(String),

    #[error(transparent)]
    Exit(#[from] ExitError),

    #[error("{mob} is in {room}, which is not a room")]
    UnknownLocation { mob: String, room: String },

    #[error("the exit {direction} from {room} leads to {target}, which is not a room")]
    DanglingExit {
        room: String,
        direction: Direction,
        target: String,
    },

    /// The route resolved but the registry refused the relocation.
    #[error("registry rejected the move: {0}")]
    Registry(#[from] HouseError),
}

impl GameError for TravelError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownMob(_) | Self::NotPlaced(_) | Self::Exit(_) => ErrorSeverity::Validation,
            Self::UnknownLocation { .. } | Self::DanglingExit { .. } | Self::Registry(_) => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownMob(_) => "TRAVEL_UNKNOWN_MOB",
            Self::NotPlaced(_) => "TRAVEL_NOT_PLACED",
            Self::Exit(ExitError::InvalidDirection(_)) => "TRAVEL_INVALID_DIRECTION",
            Self::Exit(ExitError::NoExit { .. }) => "TRAVEL_NO_EXIT",
            Self::UnknownLocation { .. } => "TRAVEL_UNKNOWN_LOCATION",
            Self::DanglingExit { .. } => "TRAVEL_DANGLING_EXIT",
            Self::Registry(_) => "TRAVEL_REGISTRY",
        }
    }
}

/// Walks a mob out of its current room through the exit named by `direction`.
///
/// `direction` is kept as typed by the issuer so that "not a direction" and
/// "no exit that way" stay distinguishable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelAction {
    pub mob: String,
    pub direction: String,
}

impl TravelAction {
    pub fn new(mob: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            mob: mob.into(),
            direction: direction.into(),
        }
    }

    /// Returns `(origin, destination)` room names.
    fn route<'h>(&self, house: &'h House) -> Result<(&'h str, &'h str), TravelError> {
        if house.mob(&self.mob).is_none() {
            return Err(TravelError::UnknownMob(self.mob.clone()));
        }
        let origin = house
            .location(&self.mob)
            .ok_or_else(|| TravelError::NotPlaced(self.mob.clone()))?;
        let room = house
            .room(origin)
            .ok_or_else(|| TravelError::UnknownLocation {
                mob: self.mob.clone(),
                room: origin.to_owned(),
            })?;

        let (direction, target) = room.resolve_exit(&self.direction)?;
        let destination = house.room(target).ok_or_else(|| TravelError::DanglingExit {
            room: origin.to_owned(),
            direction,
            target: target.to_owned(),
        })?;

        Ok((origin, destination.name()))
    }
}

impl ActionTransition for TravelAction {
    type Error = TravelError;
    /// `(origin, destination)`.
    type Result = (String, String);

    fn pre_validate(&self, house: &House) -> Result<(), Self::Error> {
        self.route(house).map(|_| ())
    }

    fn apply(&self, house: &mut House) -> Result<Self::Result, Self::Error> {
        let (origin, destination) = self.route(house)?;
        let (origin, destination) = (origin.to_owned(), destination.to_owned());

        house.set_location(&self.mob, &destination)?;

        Ok((origin, destination))
    }
}
