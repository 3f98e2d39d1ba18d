//! Command parsing and dispatch.
//!
//! A line of user input is split on whitespace. The first token, lowercased,
//! selects the command; the rest are its arguments. Extra arguments are
//! ignored.

mod handlers;

pub use handlers::{local_today, Assistant, Reply};

use crate::error::{CommandError, CommandResult};

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old_phone: String, new_phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    RemovePhone { name: String, phone: String },
    Search { query: String },
    Help,
    Exit,
}

impl Command {
    /// Parse a line of input.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// `CommandError::InvalidCommand` for an unknown command word and
    /// `CommandError::MissingArguments` when required arguments are absent.
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();
        let arg = |index: usize| -> CommandResult<String> {
            args.get(index)
                .map(|s| s.to_string())
                .ok_or(CommandError::MissingArguments)
        };

        let command = match word.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add {
                name: arg(0)?,
                phone: arg(1)?,
            },
            "change" => Command::Change {
                name: arg(0)?,
                old_phone: arg(1)?,
                new_phone: arg(2)?,
            },
            "phone" => Command::Phone { name: arg(0)? },
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday {
                name: arg(0)?,
                birthday: arg(1)?,
            },
            "show-birthday" => Command::ShowBirthday { name: arg(0)? },
            "birthdays" => Command::Birthdays,
            "delete" => Command::Delete { name: arg(0)? },
            "remove-phone" => Command::RemovePhone {
                name: arg(0)?,
                phone: arg(1)?,
            },
            "search" => Command::Search { query: arg(0)? },
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            other => return Err(CommandError::InvalidCommand(other.to_string())),
        };

        Ok(Some(command))
    }

    /// The command word, as typed by the user.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add { .. } => "add",
            Command::Change { .. } => "change",
            Command::Phone { .. } => "phone",
            Command::All => "all",
            Command::AddBirthday { .. } => "add-birthday",
            Command::ShowBirthday { .. } => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Delete { .. } => "delete",
            Command::RemovePhone { .. } => "remove-phone",
            Command::Search { .. } => "search",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}
