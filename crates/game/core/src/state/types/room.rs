use std::collections::BTreeMap;

use super::direction::{Direction, DirectionError};

/// Why an exit lookup did not produce a destination.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExitError {
    /// The token is not a direction at all.
    #[error("That isn't a direction you can go.")]
    InvalidDirection(#[source] DirectionError),

    /// The direction is valid but the room has no exit that way.
    #[error("There's no obvious exit in that direction.")]
    NoExit { direction: Direction },
}

/// A named location in the house.
///
/// Rooms are immutable once built. Exits name their destination room instead of
/// holding it, so they can dangle until [`crate::House::validate_exits`] runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    name: String,
    description: String,
    exits: BTreeMap<Direction, String>,
}

impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the exit in `direction`.
    pub fn with_exit(mut self, direction: Direction, destination: impl Into<String>) -> Self {
        self.exits.insert(direction, destination.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn exit(&self, direction: Direction) -> Option<&str> {
        self.exits.get(&direction).map(String::as_str)
    }

    pub fn exits(&self) -> impl Iterator<Item = (Direction, &str)> {
        self.exits
            .iter()
            .map(|(direction, destination)| (*direction, destination.as_str()))
    }

    /// Resolves a free-text direction token to the destination room name.
    pub fn exit_towards(&self, token: &str) -> Result<&str, ExitError> {
        self.resolve_exit(token).map(|(_, destination)| destination)
    }

    /// Like [`Room::exit_towards`], also returning the parsed direction.
    pub fn resolve_exit(&self, token: &str) -> Result<(Direction, &str), ExitError> {
        let direction = Direction::parse(token).map_err(ExitError::InvalidDirection)?;
        self.exit(direction)
            .map(|destination| (direction, destination))
            .ok_or(ExitError::NoExit { direction })
    }

    /// Multi-line status text: name, description, then one line per exit.
    pub fn render(&self) -> String {
        let mut lines = vec![self.name.clone(), self.description.clone()];
        lines.extend(
            self.exits
                .keys()
                .map(|direction| format!("An exit lies to the {direction}.")),
        );
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room1() -> Room {
        Room::new("Room1", "A bare room.").with_exit(Direction::North, "Room2")
    }

    #[test]
    fn exit_towards_known_direction() {
        assert_eq!(room1().exit_towards("north"), Ok("Room2"));
        assert_eq!(room1().exit_towards("NORTH"), Ok("Room2"));
    }

    #[test]
    fn exit_towards_missing_exit() {
        assert_eq!(
            room1().exit_towards("south"),
            Err(ExitError::NoExit {
                direction: Direction::South
            })
        );
    }

    #[test]
    fn exit_towards_garbage_is_not_a_missing_exit() {
        let err = room1().exit_towards("sdlkfjsd").unwrap_err();
        assert!(matches!(err, ExitError::InvalidDirection(_)));
        assert_eq!(err.to_string(), "That isn't a direction you can go.");
    }

    #[test]
    fn render_lists_name_description_and_exits() {
        let room = room1().with_exit(Direction::Down, "Cellar");
        let rendered = room.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Room1");
        assert_eq!(lines[1], "A bare room.");
        assert!(lines.contains(&"An exit lies to the north."));
        assert!(lines.contains(&"An exit lies to the down."));
    }

    #[test]
    fn render_without_exits() {
        assert_eq!(Room::new("Attic", "Dusty.").render(), "Attic\nDusty.");
    }
}
