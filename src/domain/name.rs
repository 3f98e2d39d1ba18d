//! Name value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Unicode letter categories only; letter-like numerals such as `Ⅳ` are rejected
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}+$").expect("Failed to compile name regex"));

/// A contact name.
///
/// Names identify records in the address book, so they are validated at
/// construction time and never change afterwards. Only characters in the
/// Unicode letter categories are accepted.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Name;
///
/// let name = Name::new("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating that it contains only letters.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is empty or
    /// contains anything other than letters.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !NAME_REGEX.is_match(&name) {
            return Err(ValidationError::InvalidName(name));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
