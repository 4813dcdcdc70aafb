//! Line commands understood by the account view.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::entities::Panel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectPanel(Panel),
    SwitchAccount(String),
    CloseAccount,
    BrowseLocalAccount,
    OpenProfile,
    BrowseAccount(String),
    BrowseHashtag(String),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("{0}")]
    InvalidPanel(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let argument = parts.next();

        let require = |name: &'static str| {
            argument
                .map(ToString::to_string)
                .ok_or(CommandError::MissingArgument(name))
        };

        match verb.to_ascii_lowercase().as_str() {
            "panel" | "p" => require("panel")?
                .parse()
                .map(Self::SelectPanel)
                .map_err(CommandError::InvalidPanel),
            "account" | "a" => require("account").map(Self::SwitchAccount),
            "close" => Ok(Self::CloseAccount),
            "browse" => Ok(Self::BrowseLocalAccount),
            "open" => Ok(Self::OpenProfile),
            "user" | "u" => require("user").map(Self::BrowseAccount),
            "tag" | "t" => require("tag")
                .map(|tag| Self::BrowseHashtag(tag.trim_start_matches('#').to_string())),
            "status" | "s" => Ok(Self::Status),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
commands:
  panel <account|notifications|mentions|dm|favorites|bookmarks>
  account <user@instance>   switch the displayed account
  close                     close the account view
  browse                    browse the displayed account
  open                      open the profile in a browser
  user <name>               browse another account
  tag <name>                browse a hashtag
  status                    show panel state
  quit";

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("panel mentions", Command::SelectPanel(Panel::Mentions) ; "panel")]
    #[test_case("p dm", Command::SelectPanel(Panel::DirectMessages) ; "panel_short")]
    #[test_case("account bob@fosstodon.org", Command::SwitchAccount("bob@fosstodon.org".into()) ; "account")]
    #[test_case("tag #rustlang", Command::BrowseHashtag("rustlang".into()) ; "tag_strips_hash")]
    #[test_case("  QUIT ", Command::Quit ; "case_insensitive")]
    #[test_case("open", Command::OpenProfile ; "open")]
    fn test_parse(line: &str, expected: Command) {
        assert_eq!(line.parse::<Command>(), Ok(expected));
    }

    #[test_case("", CommandError::Empty ; "empty")]
    #[test_case("dance", CommandError::Unknown("dance".into()) ; "unknown")]
    #[test_case("user", CommandError::MissingArgument("user") ; "missing_argument")]
    fn test_parse_errors(line: &str, expected: CommandError) {
        assert_eq!(line.parse::<Command>(), Err(expected));
    }

    #[test]
    fn test_invalid_panel() {
        assert!(matches!(
            "panel timeline".parse::<Command>(),
            Err(CommandError::InvalidPanel(_))
        ));
    }
}
