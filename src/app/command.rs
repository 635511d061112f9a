//! Command parsing for the command line

use crate::quiz::{Direction, Mode};

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch mode: :mode <list|quiz>
    Mode(Mode),
    /// Switch direction: :dir <forward|reverse>
    Direction(Direction),
    /// Select a category: :cat <key>
    Category(String),
    /// Show category keys: :cats
    Categories,
    /// Reshuffle and restart: :retry
    Retry,
    /// Restart with missed entries: :retry-wrong
    RetryWrong,
    /// Back to the full list: :home
    Home,
    /// Show help: :help or :h
    Help,
    /// Quit the application: :q or :quit
    Quit,
    /// Clear message: (empty command)
    Nop,
}

/// Result of parsing a command
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(Command),
    /// Unknown command
    UnknownCommand(String),
    /// Command needs an argument
    MissingArgument(String),
    /// Argument could not be understood
    InvalidArgument(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim()).unwrap_or("");

    match cmd.to_lowercase().as_str() {
        "mode" | "m" => {
            if args.is_empty() {
                return ParseResult::MissingArgument("mode".to_string());
            }
            match args.parse() {
                Ok(mode) => ParseResult::Ok(Command::Mode(mode)),
                Err(e) => ParseResult::InvalidArgument(e),
            }
        }
        "dir" | "direction" | "d" => {
            if args.is_empty() {
                return ParseResult::MissingArgument("dir".to_string());
            }
            match args.parse() {
                Ok(direction) => ParseResult::Ok(Command::Direction(direction)),
                Err(e) => ParseResult::InvalidArgument(e),
            }
        }
        "cat" | "category" | "c" => {
            if args.is_empty() {
                ParseResult::MissingArgument("cat".to_string())
            } else {
                ParseResult::Ok(Command::Category(args.to_string()))
            }
        }
        "cats" | "categories" => ParseResult::Ok(Command::Categories),
        "retry" | "r" => ParseResult::Ok(Command::Retry),
        "retry-wrong" | "rw" => ParseResult::Ok(Command::RetryWrong),
        "home" => ParseResult::Ok(Command::Home),
        "help" | "h" | "?" => ParseResult::Ok(Command::Help),
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        _ => ParseResult::UnknownCommand(cmd.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_command() {
        assert_eq!(parse_command("q"), ParseResult::Ok(Command::Quit));
        assert_eq!(parse_command("QUIT"), ParseResult::Ok(Command::Quit));
    }

    #[test]
    fn parse_mode_command() {
        assert_eq!(parse_command("mode quiz"), ParseResult::Ok(Command::Mode(Mode::Quiz)));
        assert_eq!(parse_command("m list"), ParseResult::Ok(Command::Mode(Mode::List)));
        assert!(matches!(parse_command("mode"), ParseResult::MissingArgument(_)));
        assert!(matches!(parse_command("mode exam"), ParseResult::InvalidArgument(_)));
    }

    #[test]
    fn parse_direction_command() {
        assert_eq!(
            parse_command("dir reverse"),
            ParseResult::Ok(Command::Direction(Direction::TargetToSource))
        );
        assert!(matches!(parse_command("dir sideways"), ParseResult::InvalidArgument(_)));
    }

    #[test]
    fn parse_category_keeps_case() {
        assert_eq!(parse_command("cat S1"), ParseResult::Ok(Command::Category("S1".into())));
        assert!(matches!(parse_command("cat"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_retry_commands() {
        assert_eq!(parse_command("retry"), ParseResult::Ok(Command::Retry));
        assert_eq!(parse_command("retry-wrong"), ParseResult::Ok(Command::RetryWrong));
        assert_eq!(parse_command("rw"), ParseResult::Ok(Command::RetryWrong));
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(parse_command("unknown"), ParseResult::UnknownCommand(_)));
    }

    #[test]
    fn parse_empty_is_nop() {
        assert_eq!(parse_command(""), ParseResult::Ok(Command::Nop));
        assert_eq!(parse_command("   "), ParseResult::Ok(Command::Nop));
    }
}
