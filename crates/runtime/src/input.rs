//! Player text → commands.
//!
//! Grammar (verbs are case-insensitive, names are not):
//!
//! ```text
//! look <name>               describe a room or mob (also: describe, l)
//! move <mob> to <room>      place a mob in a room
//! go <mob> <direction>      move a mob through an exit of its room
//! spawn <class> <name> in <room>
//! help
//! quit
//! ```
//!
//! Room and class names may contain spaces; mob names may not, except in
//! `move` where everything before `to` is the mob name.

use house_core::{Action, DescribeAction, MoveAction, TravelAction};
use thiserror::Error;

pub const USAGE: &str = "\
Commands:
  look <name>                     describe a room or mob
  move <mob> to <room>            place a mob in a room
  go <mob> <direction>            follow an exit
  spawn <class> <name> in <room>  create a mob
  help                            show this text
  quit                            leave";

/// What a line of player input asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Apply an action as a tick of its own.
    Act(Action),
    /// Create a mob; handled by the registry directly, not the tick engine.
    Spawn {
        class: String,
        name: String,
        room: String,
    },
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Say something.")]
    Empty,

    #[error("I don't know how to \"{0}\". Type \"help\" for a list of commands.")]
    UnknownVerb(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Parse one line of player input.
pub fn parse_command(line: &str) -> Result<PlayerCommand, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((verb, args)) = words.split_first() else {
        return Err(CommandError::Empty);
    };

    match verb.to_ascii_lowercase().as_str() {
        "look" | "l" | "describe" => parse_look(args),
        "move" => parse_move(args),
        "go" => parse_go(args),
        "spawn" => parse_spawn(args),
        "help" | "?" => Ok(PlayerCommand::Help),
        "quit" | "exit" => Ok(PlayerCommand::Quit),
        _ => Err(CommandError::UnknownVerb((*verb).to_owned())),
    }
}

fn parse_look(args: &[&str]) -> Result<PlayerCommand, CommandError> {
    if args.is_empty() {
        return Err(CommandError::Usage("look <name>"));
    }
    Ok(PlayerCommand::Act(Action::player(DescribeAction::new(
        args.join(" "),
    ))))
}

fn parse_move(args: &[&str]) -> Result<PlayerCommand, CommandError> {
    const USAGE: &str = "move <mob> to <room>";

    let (mob, room) = split_at_keyword(args, "to").ok_or(CommandError::Usage(USAGE))?;
    if mob.is_empty() || room.is_empty() {
        return Err(CommandError::Usage(USAGE));
    }
    Ok(PlayerCommand::Act(Action::player(MoveAction::new(
        mob.join(" "),
        room.join(" "),
    ))))
}

fn parse_go(args: &[&str]) -> Result<PlayerCommand, CommandError> {
    match args {
        [mob, direction] => Ok(PlayerCommand::Act(Action::player(TravelAction::new(
            *mob, *direction,
        )))),
        _ => Err(CommandError::Usage("go <mob> <direction>")),
    }
}

fn parse_spawn(args: &[&str]) -> Result<PlayerCommand, CommandError> {
    const USAGE: &str = "spawn <class> <name> in <room>";

    let (head, room) = split_at_keyword(args, "in").ok_or(CommandError::Usage(USAGE))?;
    let Some((name, class)) = head.split_last() else {
        return Err(CommandError::Usage(USAGE));
    };
    if class.is_empty() || room.is_empty() {
        return Err(CommandError::Usage(USAGE));
    }

    Ok(PlayerCommand::Spawn {
        class: class.join(" "),
        name: (*name).to_owned(),
        room: room.join(" "),
    })
}

/// Splits at the first occurrence of `keyword`, so names on the left may not
/// contain it but names on the right may.
fn split_at_keyword<'a, 'b>(
    args: &'a [&'b str],
    keyword: &str,
) -> Option<(&'a [&'b str], &'a [&'b str])> {
    let index = args
        .iter()
        .position(|word| word.eq_ignore_ascii_case(keyword))?;
    Some((&args[..index], &args[index + 1..]))
}

#[cfg(test)]
mod tests {
    use house_core::{ActionKind, ActionSource};

    use super::*;

    fn action(line: &str) -> Action {
        match parse_command(line) {
            Ok(PlayerCommand::Act(action)) => action,
            other => panic!("expected an action from {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_look_joins_multi_word_names() {
        let action = action("look Living Room");
        assert_eq!(action.source, ActionSource::Player);
        assert_eq!(
            action.kind,
            ActionKind::Describe(DescribeAction::new("Living Room"))
        );
        assert_eq!(
            self::action("DESCRIBE larry").kind,
            ActionKind::Describe(DescribeAction::new("larry"))
        );
    }

    #[test]
    fn test_move() {
        assert_eq!(
            action("move larry to Living Room").kind,
            ActionKind::Move(MoveAction::new("larry", "Living Room"))
        );
        assert_eq!(
            parse_command("move larry Kitchen"),
            Err(CommandError::Usage("move <mob> to <room>"))
        );
        assert!(parse_command("move to Kitchen").is_err());
    }

    #[test]
    fn test_go() {
        assert_eq!(
            action("go larry NORTH").kind,
            ActionKind::Travel(TravelAction::new("larry", "NORTH"))
        );
        assert!(parse_command("go larry").is_err());
    }

    #[test]
    fn test_spawn_with_multi_word_class_and_room() {
        assert_eq!(
            parse_command("spawn Dastardly Auger larry in Living Room"),
            Ok(PlayerCommand::Spawn {
                class: "Dastardly Auger".into(),
                name: "larry".into(),
                room: "Living Room".into(),
            })
        );
        assert!(parse_command("spawn larry in Kitchen").is_err());
        assert!(parse_command("spawn Rat larry in").is_err());
    }

    #[test]
    fn test_control_words() {
        assert_eq!(parse_command("quit"), Ok(PlayerCommand::Quit));
        assert_eq!(parse_command("  Help "), Ok(PlayerCommand::Help));
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::UnknownVerb("dance".into()))
        );
    }
}
