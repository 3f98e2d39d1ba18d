//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or contains non-letter characters.
    InvalidName(String),

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday does not parse as `DD.MM.YYYY`.
    InvalidBirthday(String),

    /// The phone number is not present on the record.
    PhoneNotFound(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(_) => write!(f, "Name must contain only letters"),
            Self::InvalidPhone(_) => write!(f, "Phone number must contain 10 digits"),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
            Self::PhoneNotFound(_) => write!(f, "Phone number is not found"),
        }
    }
}

impl std::error::Error for ValidationError {}
