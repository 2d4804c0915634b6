//! Parsing of shell input lines into commands.

use thiserror::Error;

use crate::router::{Route, RouteError};

/// Commands accepted by the interactive shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    /// Navigate to a path.
    Open(Route),
    /// Reload the whole list.
    Reload,
    /// Update the record shown on the detail page.
    Update,
    /// Return to the list.
    Back,
    /// Dump the current state as JSON.
    State,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Route(#[from] RouteError),
}

pub const HELP: &str = "\
Commands:
  open <path>   navigate to / or /items/<id>
  reload        reload the list
  update        update the item on the current page
  back          return to the list
  state         print the current state
  help          show this message
  quit          exit
";

pub fn parse_command(line: &str) -> Result<UserCommand, InputError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Err(InputError::UnknownCommand(String::new()));
    };

    match command.to_ascii_lowercase().as_str() {
        "open" | "o" => {
            let path = words.next().ok_or(InputError::MissingArgument("open"))?;
            Ok(UserCommand::Open(Route::parse(path)?))
        }
        "reload" | "r" => Ok(UserCommand::Reload),
        "update" | "u" => Ok(UserCommand::Update),
        "back" | "b" => Ok(UserCommand::Back),
        "state" => Ok(UserCommand::State),
        "help" | "?" => Ok(UserCommand::Help),
        "quit" | "q" | "exit" => Ok(UserCommand::Quit),
        other => Err(InputError::UnknownCommand(other.to_string())),
    }
}
