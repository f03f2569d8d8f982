//! Action domain - requested mutations of the house.
//!
//! Player commands and scripted events are both turned into [`Action`] values
//! and applied by the [`crate::engine::HouseEngine`]. Every concrete variant
//! implements [`ActionTransition`], so all of them share one failure contract:
//! success with a typed result, or a typed error.
//!
//! # Module Structure
//!
//! - `transition`: the three-phase [`ActionTransition`] trait
//! - `movement`: [`MoveAction`], teleport a mob to any known room
//! - `travel`: [`TravelAction`], follow an exit of the mob's current room
//! - `describe`: [`DescribeAction`], render a room or a mob

mod describe;
mod movement;
mod transition;
mod travel;

pub use describe::{DescribeAction, DescribeError};
pub use movement::{MoveAction, MoveError};
pub use transition::ActionTransition;
pub use travel::{TravelAction, TravelError};

/// Who asked for an action.
///
/// The engine uses this to tell a player's mistake ("there is no such room")
/// apart from a broken script referencing stale data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionSource {
    /// Typed by a player through a transport.
    #[default]
    Player,

    /// Produced by a timed or scripted world event.
    Script,
}

/// All action kinds. Adding a variant forces the engine dispatch to handle it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Move(MoveAction),
    Travel(TravelAction),
    Describe(DescribeAction),
}

impl ActionKind {
    /// Returns the snake_case name of the action, for logging.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            ActionKind::Move(_) => "move",
            ActionKind::Travel(_) => "travel",
            ActionKind::Describe(_) => "describe",
        }
    }
}

impl From<MoveAction> for ActionKind {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<TravelAction> for ActionKind {
    fn from(action: TravelAction) -> Self {
        Self::Travel(action)
    }
}

impl From<DescribeAction> for ActionKind {
    fn from(action: DescribeAction) -> Self {
        Self::Describe(action)
    }
}

/// One requested mutation plus its origin.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub source: ActionSource,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(source: ActionSource, kind: impl Into<ActionKind>) -> Self {
        Self {
            source,
            kind: kind.into(),
        }
    }

    /// Creates an action issued by a player.
    pub fn player(kind: impl Into<ActionKind>) -> Self {
        Self::new(ActionSource::Player, kind)
    }

    /// Creates an action issued by a world script.
    pub fn script(kind: impl Into<ActionKind>) -> Self {
        Self::new(ActionSource::Script, kind)
    }

    pub fn as_snake_case(&self) -> &'static str {
        self.kind.as_snake_case()
    }
}

/// What a successful action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    /// A mob changed rooms (`Move` or `Travel`).
    Moved {
        mob: String,
        from: Option<String>,
        to: String,
    },

    /// Rendered status text for the issuer.
    Described { subject: String, text: String },
}
