//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, any number of phone numbers and an optional birthday.
///
/// The name is the record's identity and cannot change once the record is
/// created. Phones keep insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is not letters only.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneNotFound` if the record has no such phone.
    pub fn remove_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| ValidationError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old` with `new`.
    ///
    /// The replacement is appended at the end, so the edited number moves
    /// behind the others. `new` is validated before anything is removed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneNotFound` if `old` is absent, or
    /// `ValidationError::InvalidPhone` if `new` is malformed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        if self.find_phone(old).is_none() {
            return Err(ValidationError::PhoneNotFound(old.to_string()));
        }
        let new = Phone::new(new)?;
        self.remove_phone(old)?;
        self.phones.push(new);
        Ok(())
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: ",
            self.name,
            self.phones_display()
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "Not available"),
        }
    }
}
