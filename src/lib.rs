//! Contact Assistant - a command-line bot for managing an address book.
//!
//! The assistant stores contacts with their phone numbers and birthdays,
//! answers one command per line, reports birthdays coming up in the next
//! week and keeps the address book in a JSON file between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones and birthdays
//! - **models**: The contact record and the address book
//! - **matching**: Fuzzy search over names and phone numbers
//! - **commands**: Command parsing and the handlers behind each command
//! - **session**: The read-eval-print loop
//! - **repositories**: Loading and saving the address book
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **observability**: Session counters on top of `tracing`

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod session;

pub use commands::{Assistant, Command, Reply};
pub use config::Config;
pub use error::{BookError, CommandError, ConfigError, SessionError, StorageError};
pub use matching::{ContactMatcher, MatchResult};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileRepository};
pub use session::Session;
