use core::str::FromStr;

/// The six ways a mob can leave a room.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

/// A token that is not one of the six canonical directions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized direction \"{token}\"")]
pub struct DirectionError {
    pub token: String,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Canonicalizes a free-text token, ignoring ASCII case.
    pub fn parse(token: &str) -> Result<Self, DirectionError> {
        Self::from_str(token).map_err(|_| DirectionError {
            token: token.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_canonical_token() {
        for direction in Direction::ALL {
            assert_eq!(Direction::parse(direction.as_ref()), Ok(direction));
        }
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(Direction::parse("NoRtH"), Ok(Direction::North));
        assert_eq!(Direction::parse("DOWN"), Ok(Direction::Down));
        assert_eq!(Direction::parse("Up"), Ok(Direction::Up));
    }

    #[test]
    fn rejects_anything_else() {
        for token in ["", "sdlkfjsd", "northeast", "n", " north", "portal"] {
            let err = Direction::parse(token).unwrap_err();
            assert_eq!(err.token, token);
        }
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(Direction::West.to_string(), "west");
    }
}
