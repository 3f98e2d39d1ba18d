//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format used to read and render birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono's %Y also takes short and signed years, so the shape is checked first
static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth.
///
/// Parsed from `DD.MM.YYYY`; the calendar date is stored, not the raw
/// input, so `1.2.1990` and `01.02.1990` produce the same birthday.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("03.01.1990").unwrap();
/// assert_eq!(birthday.to_string(), "03.01.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is not a
    /// real calendar date in that format with a four-digit year.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// Get the calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// February 29 falls on March 1 when `year` is not a leap year.
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

// Serde support - serialize in the same format users type
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
