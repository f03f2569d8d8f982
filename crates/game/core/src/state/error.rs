//! Registry-level errors raised while building or mutating the [`House`](super::House).

use super::types::Direction;

/// Errors from direct registry mutations (spawning, relocating).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HouseError {
    #[error("no mob class named \"{0}\"")]
    UnknownClass(String),

    #[error("no mob named \"{0}\"")]
    UnknownMob(String),

    #[error("no room named \"{0}\"")]
    UnknownRoom(String),

    #[error("a mob named \"{0}\" already exists")]
    DuplicateMob(String),
}

/// An exit whose destination is not a loaded room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrphanedExit {
    pub room: String,
    pub direction: Direction,
    pub target: String,
}

impl std::fmt::Display for OrphanedExit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} --{}--> {} (missing)",
            self.room, self.direction, self.target
        )
    }
}

/// Errors that make a freshly built registry unusable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error("{} exit(s) lead to unknown rooms: {}", .0.len(), display_list(.0))]
    DanglingExits(Vec<OrphanedExit>),
}

fn display_list(exits: &[OrphanedExit]) -> String {
    exits
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
