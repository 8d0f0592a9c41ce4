//! Command module
//!
//! Splits a raw input line into a command and an argument, and maps the
//! command onto the fixed set the engine understands.

/// A raw input line split into its command word and (optional) argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub command: String,
    pub argument: String,
}

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Go(String),
    TakeOrDrop,
    Use,
    Unknown(String),
}

/// Split a raw line into (command, argument).
///
/// Any character below code point 33 counts as whitespace. Leading whitespace
/// is skipped, the first word becomes the command, and every non-whitespace
/// character after it is appended to the argument -- whitespace between
/// argument characters is dropped rather than preserved, so `"go  nor th"`
/// yields the argument `north`. Either part may come back empty.
pub fn parse_player_input(raw: &str) -> PlayerInput {
    let mut command = String::new();
    let mut argument = String::new();
    let mut past_command = false;

    for ch in raw.chars() {
        if (ch as u32) < 33 {
            if !command.is_empty() {
                past_command = true;
            }
        } else if past_command {
            argument.push(ch);
        } else {
            command.push(ch);
        }
    }

    PlayerInput { command, argument }
}

/// Map a parsed input onto a `Command`.
///
/// Command words are matched case-sensitively. `take` and `drop` accept an
/// argument but ignore it; anything unrecognized becomes `Unknown` (a normal
/// value, never an error).
pub fn parse_command(input: &PlayerInput) -> Command {
    match input.command.as_str() {
        "quit" | "exit" => Command::Quit,
        "go" => Command::Go(input.argument.clone()),
        "take" | "drop" => Command::TakeOrDrop,
        "use" => Command::Use,
        other => Command::Unknown(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token_is_unchanged_by_padding() {
        let plain = parse_player_input("use");
        for padded in ["  use", "use  ", "\tuse\r\n", "   use   "] {
            assert_eq!(parse_player_input(padded), plain);
        }
    }

    #[test]
    fn interior_spaces_collapse_without_inserting_characters() {
        let input = parse_player_input("  go   north");
        assert_eq!(input.command, "go");
        assert_eq!(input.argument, "north");
    }

    #[test]
    fn multi_word_argument_concatenates() {
        let input = parse_player_input("go  nor th ");
        assert_eq!(input.command, "go");
        assert_eq!(input.argument, "north");
    }

    #[test]
    fn empty_line_yields_empty_parts() {
        let input = parse_player_input("   \t ");
        assert_eq!(input.command, "");
        assert_eq!(input.argument, "");
    }

    #[test]
    fn control_characters_count_as_whitespace() {
        let input = parse_player_input("go\u{1}north");
        assert_eq!(input.command, "go");
        assert_eq!(input.argument, "north");
    }

    #[test]
    fn command_words_are_case_sensitive() {
        assert!(matches!(
            parse_command(&parse_player_input("Go north")),
            Command::Unknown(cmd) if cmd == "Go"
        ));
        assert!(matches!(
            parse_command(&parse_player_input("QUIT")),
            Command::Unknown(cmd) if cmd == "QUIT"
        ));
    }

    #[test]
    fn quit_and_exit_both_quit() {
        assert_eq!(parse_command(&parse_player_input("quit")), Command::Quit);
        assert_eq!(parse_command(&parse_player_input("exit")), Command::Quit);
    }

    #[test]
    fn take_and_drop_ignore_their_argument() {
        assert_eq!(parse_command(&parse_player_input("take bat")), Command::TakeOrDrop);
        assert_eq!(parse_command(&parse_player_input("drop everything now")), Command::TakeOrDrop);
    }

    #[test]
    fn go_carries_its_direction() {
        assert_eq!(
            parse_command(&parse_player_input("go north")),
            Command::Go("north".to_string())
        );
    }

    #[test]
    fn empty_command_is_unknown() {
        assert!(matches!(
            parse_command(&parse_player_input("")),
            Command::Unknown(cmd) if cmd.is_empty()
        ));
    }
}
