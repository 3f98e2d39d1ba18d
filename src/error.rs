//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record is stored under the given name
    #[error("Contact not found")]
    ContactNotFound(String),
}

/// Errors produced while handling a single command.
///
/// The `Display` output of every variant is the line shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A field failed validation, or a phone was missing from a record
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact does not exist
    #[error("Contact is not found")]
    ContactNotFound(String),

    /// Too few arguments for the command
    #[error("Enter user name and phone/birthday")]
    MissingArguments,

    /// Unrecognised command word
    #[error("Invalid command")]
    InvalidCommand(String),
}

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::ContactNotFound(name) => CommandError::ContactNotFound(name),
        }
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not contain a valid address book
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The address book could not be written at exit
    #[error("Failed to save address book: {0}")]
    Save(#[source] StorageError),

    /// Reading commands or writing replies failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::ContactNotFound("John".to_string());
        assert_eq!(err.to_string(), "Contact not found");

        let err = CommandError::MissingArguments;
        assert_eq!(err.to_string(), "Enter user name and phone/birthday");

        let err = CommandError::InvalidCommand("dance".to_string());
        assert_eq!(err.to_string(), "Invalid command");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a positive number, got: soon".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a positive number, got: soon"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err = CommandError::from(ValidationError::InvalidPhone("1".to_string()));
        assert_eq!(err.to_string(), "Phone number must contain 10 digits");
    }

    #[test]
    fn test_book_error_converts_to_user_message() {
        let err = CommandError::from(BookError::ContactNotFound("Ann".to_string()));
        assert_eq!(err, CommandError::ContactNotFound("Ann".to_string()));
        assert_eq!(err.to_string(), "Contact is not found");
    }
}
