//! Command handlers for the assistant bot.
//!
//! Every handler returns a `CommandResult`; `Assistant::handle_command`
//! turns the error side into the single line shown to the user.

use super::Command;
use crate::config::Config;
use crate::error::{CommandError, CommandResult};
use crate::matching::ContactMatcher;
use crate::models::{AddressBook, Record};
use crate::observability::{SessionMetrics, Timer};
use chrono::{Local, NaiveDate};

const HELP: &str = "Available commands:
  hello                              greet the bot
  add <name> <phone>                 add a contact or a phone to it
  change <name> <old> <new>          replace a phone number
  phone <name>                       show a contact's phones
  all                                show every contact
  add-birthday <name> <DD.MM.YYYY>   set a contact's birthday
  show-birthday <name>               show a contact's birthday
  birthdays                          upcoming birthdays
  delete <name>                      remove a contact
  remove-phone <name> <phone>        remove one phone number
  search <name|digits>               find contacts by name or phone
  close, exit                        save and quit";

/// What the session should do with a handled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command
    Message(String),

    /// Save the book, print the text and stop
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Exit(text) => text,
        }
    }
}

/// Today's date in the local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Executes commands against an address book.
pub struct Assistant {
    book: AddressBook,
    config: Config,
    matcher: ContactMatcher,
    metrics: SessionMetrics,
    today: fn() -> NaiveDate,
}

impl Assistant {
    /// Create an assistant over `book`.
    pub fn new(book: AddressBook, config: &Config) -> Self {
        Self {
            book,
            config: config.clone(),
            matcher: ContactMatcher::new(),
            metrics: SessionMetrics::new(),
            today: local_today,
        }
    }

    /// Replace the clock used by the `birthdays` command.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Parse and handle one line of input.
    ///
    /// Returns `None` for a blank line.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        match Command::parse(line) {
            Ok(Some(command)) => Some(self.handle_command(command)),
            Ok(None) => None,
            Err(e) => {
                self.metrics.track_command("unparsed", 0, false);
                tracing::debug!(error = ?e, "Command rejected by parser");
                Some(Reply::Message(e.to_string()))
            }
        }
    }

    /// Handle a parsed command, converting any error into its message.
    pub fn handle_command(&mut self, command: Command) -> Reply {
        let keyword = command.keyword();
        let timer = Timer::start();
        let result = self.execute(command);
        self.metrics
            .track_command(keyword, timer.elapsed_us(), result.is_ok());

        result.unwrap_or_else(|e| {
            tracing::debug!(command = keyword, error = ?e, "Command failed");
            Reply::Message(e.to_string())
        })
    }

    fn execute(&mut self, command: Command) -> CommandResult<Reply> {
        let text = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => self.add_contact(&name, &phone)?,
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => self.change_contact(&name, &old_phone, &new_phone)?,
            Command::Phone { name } => self.show_phones(&name)?,
            Command::All => self.show_all(),
            Command::AddBirthday { name, birthday } => self.add_birthday(&name, &birthday)?,
            Command::ShowBirthday { name } => self.show_birthday(&name)?,
            Command::Birthdays => self.birthdays(),
            Command::Delete { name } => self.delete_contact(&name)?,
            Command::RemovePhone { name, phone } => self.remove_phone(&name, &phone)?,
            Command::Search { query } => self.search(&query),
            Command::Help => HELP.to_string(),
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        };
        Ok(Reply::Message(text))
    }

    fn record(&self, name: &str) -> CommandResult<&Record> {
        self.book
            .find_record(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> CommandResult<&mut Record> {
        self.book
            .find_record_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    fn add_contact(&mut self, name: &str, phone: &str) -> CommandResult<String> {
        if let Some(record) = self.book.find_record_mut(name) {
            record.add_phone(phone)?;
            return Ok("Contact updated.".to_string());
        }

        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        self.book.add_record(record);
        tracing::debug!(name = %name, "Contact created");
        Ok("Contact added.".to_string())
    }

    fn change_contact(&mut self, name: &str, old: &str, new: &str) -> CommandResult<String> {
        self.record_mut(name)?.edit_phone(old, new)?;
        Ok("Contact updated.".to_string())
    }

    fn show_phones(&self, name: &str) -> CommandResult<String> {
        let record = self.record(name)?;
        Ok(format!("Contact {}: {}", name, record.phones_display()))
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            "Phonebook is empty".to_string()
        } else {
            self.book.to_string()
        }
    }

    fn add_birthday(&mut self, name: &str, birthday: &str) -> CommandResult<String> {
        self.record_mut(name)?.add_birthday(birthday)?;
        Ok("Birthday added.".to_string())
    }

    fn show_birthday(&self, name: &str) -> CommandResult<String> {
        let birthday = match self.record(name)?.birthday() {
            Some(birthday) => birthday.to_string(),
            None => "not set".to_string(),
        };
        Ok(format!("Contact {}: Birthday is {}", name, birthday))
    }

    fn birthdays(&self) -> String {
        let window = self.config.birthday_window_days;
        let upcoming = self.book.upcoming_birthdays((self.today)(), window);
        if upcoming.is_empty() {
            return format!("No upcoming birthdays in the next {} days.", window);
        }
        upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn delete_contact(&mut self, name: &str) -> CommandResult<String> {
        self.book.delete_record(name)?;
        tracing::debug!(name = %name, "Contact deleted");
        Ok("Contact deleted.".to_string())
    }

    fn remove_phone(&mut self, name: &str, phone: &str) -> CommandResult<String> {
        self.record_mut(name)?.remove_phone(phone)?;
        Ok("Phone removed.".to_string())
    }

    fn search(&mut self, query: &str) -> String {
        let matches = self.matcher.find_matches(
            query,
            &self.book,
            self.config.max_search_results,
            self.config.match_confidence_threshold,
        );
        self.metrics.track_search(matches.len());

        if matches.is_empty() {
            return "No matching contacts found".to_string();
        }
        matches
            .iter()
            .map(|m| m.record.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
