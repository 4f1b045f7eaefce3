//! Line mapping from typed text to game commands.

use crate::types::{GameCommand, MAX_PINS};

/// Map a line of input to a command.
///
/// Shots are only accepted when they parse as an integer in `0..=10`; the
/// scorer still applies its own frame-relative checks afterwards.
pub fn parse_command(line: &str) -> Option<GameCommand> {
    match GameCommand::from_str(line)? {
        GameCommand::Shot(pins) if !(0..=i32::from(MAX_PINS)).contains(&pins) => None,
        cmd => Some(cmd),
    }
}

/// Check if a line should end the session.
pub fn should_quit(line: &str) -> bool {
    matches!(parse_command(line), Some(GameCommand::Quit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_counts() {
        assert_eq!(parse_command("0"), Some(GameCommand::Shot(0)));
        assert_eq!(parse_command("7\n"), Some(GameCommand::Shot(7)));
        assert_eq!(parse_command("10"), Some(GameCommand::Shot(10)));
    }

    #[test]
    fn test_out_of_range_and_malformed() {
        assert_eq!(parse_command("11"), None);
        assert_eq!(parse_command("-1"), None);
        assert_eq!(parse_command("five"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_words() {
        assert_eq!(parse_command("reset"), Some(GameCommand::Reset));
        assert!(should_quit("q"));
        assert!(should_quit(" Quit "));
        assert!(!should_quit("3"));
    }
}
