//! Interactive session: the read-eval-print loop around the assistant.
//!
//! The session loads the address book from its repository, answers one
//! command per input line and saves the book when the user closes the
//! session or input ends.

use crate::commands::{local_today, Assistant, Command, Reply};
use crate::config::Config;
use crate::error::{SessionError, SessionResult};
use crate::models::AddressBook;
use crate::repositories::BookRepository;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

/// A single run of the assistant bot.
pub struct Session<R: BookRepository> {
    repository: R,
    config: Config,
    today: fn() -> NaiveDate,
}

impl<R: BookRepository> Session<R> {
    pub fn new(repository: R, config: Config) -> Self {
        Self {
            repository,
            config,
            today: local_today,
        }
    }

    /// Replace the clock used for upcoming birthdays.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Load the stored book, falling back to an empty one if it cannot be read.
    fn load_book(&self) -> AddressBook {
        self.repository.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not load address book, starting empty");
            AddressBook::new()
        })
    }

    /// Run the loop until `close`/`exit` or end of input.
    ///
    /// # Errors
    ///
    /// `SessionError::Save` if the book cannot be written at exit, and
    /// `SessionError::Io` if reading input or writing output fails. Input
    /// that is not valid UTF-8 is decoded lossily and handled like any
    /// other line.
    pub fn run<I: BufRead, O: Write>(&self, mut input: I, output: &mut O) -> SessionResult<()> {
        let book = self.load_book();
        let mut assistant = Assistant::new(book, &self.config).with_today(self.today);

        writeln!(output, "Welcome to the assistant bot!")?;
        let mut buffer = Vec::new();

        loop {
            write!(output, "Enter a command: ")?;
            output.flush()?;

            buffer.clear();
            let reply = if input.read_until(b'\n', &mut buffer)? == 0 {
                tracing::debug!("End of input, closing session");
                writeln!(output)?;
                assistant.handle_command(Command::Exit)
            } else {
                let line = String::from_utf8_lossy(&buffer);
                match assistant.handle_line(&line) {
                    Some(reply) => reply,
                    None => continue,
                }
            };

            match reply {
                Reply::Message(text) => writeln!(output, "{}", text)?,
                Reply::Exit(text) => {
                    self.repository
                        .save(assistant.book())
                        .map_err(SessionError::Save)?;
                    writeln!(output, "{}", text)?;
                    break;
                }
            }
        }

        assistant.metrics().log_summary();
        Ok(())
    }
}
