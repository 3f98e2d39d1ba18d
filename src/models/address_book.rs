//! The address book: every record, keyed by contact name.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Default size of the upcoming-birthday window, in days after today.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A birthday falling inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Date to congratulate on, moved off weekends to the next Monday
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(crate::domain::birthday::BIRTHDAY_FORMAT)
        )
    }
}

/// Collection of records keyed by name.
///
/// Iteration follows insertion order. Replacing an existing record keeps
/// its original position. Serializes as a JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name, replacing any record already
    /// stored there. Returns the replaced record.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key.clone(), record);
        if previous.is_none() {
            self.order.push(key);
        }
        previous
    }

    /// Exact, case-sensitive lookup.
    pub fn find_record(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_record_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if there is no such record.
    pub fn delete_record(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Birthdays in the next seven days, counted from today's local date.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(Local::now().date_naive(), DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }

    /// Birthdays whose occurrence this year is between `today` and
    /// `today + window_days`, inclusive.
    ///
    /// The window test uses the real occurrence; the reported date is then
    /// moved from Saturday or Sunday to the following Monday, so it may lie
    /// past the end of the window. Birthdays already passed this year are
    /// not wrapped into next year. Results follow insertion order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let window = i64::from(window_days);

        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let occurrence = birthday.occurrence_in(today.year())?;
                let days_until = (occurrence - today).num_days();
                if !(0..=window).contains(&days_until) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    congratulation_date: next_working_day(occurrence),
                })
            })
            .collect()
    }
}

/// Move a Saturday or Sunday forward to Monday.
fn next_working_day(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift)).unwrap_or(date)
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(mut book: AddressBook) -> Self {
        book.order
            .iter()
            .filter_map(|key| book.records.remove(key))
            .collect()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.iter().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
