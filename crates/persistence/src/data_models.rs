// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The persisted JSON layout and its conversion to and from domain types.
//!
//! Loading re-runs every domain constructor, so a stored record is accepted
//! only if the same values would be accepted from live input.

use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use staffbook::AddressBook;
use staffbook_domain::{
    Address, Attendance, DomainError, Email, HireDate, IdentityNumber, Leave, Name, Person, Phone,
    Tag, TagSet, format_iso,
};

/// The whole persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JsonAddressBook {
    #[serde(default)]
    pub persons: Vec<JsonPerson>,
}

/// One persisted person.
///
/// Identity and data fields are optional here so that a missing field can
/// be reported by name rather than as a generic parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonPerson {
    pub name: Option<String>,
    pub identity_number: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub hire_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub leaves: Vec<JsonLeave>,
    #[serde(default)]
    pub attendance: JsonAttendance,
}

/// One persisted leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonLeave {
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

/// Persisted attendance counters.
///
/// Stored signed so that negative values in a hand-edited file are caught
/// by the domain constructor instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAttendance {
    pub work_day_count: i64,
    pub absent_day_count: i64,
}

impl From<&AddressBook> for JsonAddressBook {
    fn from(book: &AddressBook) -> Self {
        Self {
            persons: book.persons().iter().map(JsonPerson::from).collect(),
        }
    }
}

impl JsonAddressBook {
    /// Rebuilds the address book, validating every record.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidRecord` if any person is invalid or
    /// two persons are the same person.
    pub fn into_address_book(self) -> Result<AddressBook, PersistenceError> {
        let persons: Vec<Person> = self
            .persons
            .into_iter()
            .enumerate()
            .map(|(position, person)| {
                person.into_person().map_err(|err| match err {
                    PersistenceError::InvalidRecord(reason) => {
                        PersistenceError::InvalidRecord(format!("person {}: {reason}", position + 1))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<Person>, PersistenceError>>()?;

        AddressBook::with_persons(persons)
            .map_err(|err| PersistenceError::InvalidRecord(err.to_string()))
    }
}

impl From<&Person> for JsonPerson {
    fn from(person: &Person) -> Self {
        Self {
            name: Some(person.name().value().to_string()),
            identity_number: Some(person.identity_number().value().to_string()),
            phone: Some(person.phone().value().to_string()),
            email: Some(person.email().value().to_string()),
            address: Some(person.address().value().to_string()),
            hire_date: Some(person.hire_date().value().to_string()),
            tags: person.tags().iter().map(|tag| tag.name().to_string()).collect(),
            leaves: person.leaves().iter().map(JsonLeave::from).collect(),
            attendance: JsonAttendance::from(person.attendance()),
        }
    }
}

impl JsonPerson {
    /// Converts this record into a validated `Person`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidRecord` naming the missing field, or
    /// carrying the domain error of the first invalid one. Tags that differ
    /// only in case and leaves that repeat a start date or overlap are
    /// rejected too.
    pub fn into_person(self) -> Result<Person, PersistenceError> {
        let name: Name = required(self.name.as_deref(), "Name", Name::new)?;
        let identity_number: IdentityNumber =
            required(self.identity_number.as_deref(), "NRIC", IdentityNumber::new)?;
        let phone: Phone = required(self.phone.as_deref(), "Phone", Phone::new)?;
        let email: Email = required(self.email.as_deref(), "Email", Email::new)?;
        let address: Address = required(self.address.as_deref(), "Address", Address::new)?;
        let hire_date: HireDate = required(self.hire_date.as_deref(), "HireDate", HireDate::new)?;

        let tags: Vec<Tag> = self
            .tags
            .iter()
            .map(String::as_str)
            .map(Tag::new)
            .collect::<Result<Vec<Tag>, DomainError>>()
            .map_err(invalid)?;
        let leaves: Vec<Leave> = self
            .leaves
            .into_iter()
            .map(JsonLeave::into_leave)
            .collect::<Result<Vec<Leave>, PersistenceError>>()?;
        let attendance: Attendance = self.attendance.into_attendance()?;

        let tags: TagSet = TagSet::try_new(tags).map_err(invalid)?;

        Person::new(
            name,
            identity_number,
            phone,
            email,
            address,
            hire_date,
            tags,
        )
        .with_history(leaves, attendance)
        .map_err(invalid)
    }
}

impl From<&Leave> for JsonLeave {
    fn from(leave: &Leave) -> Self {
        Self {
            start_date: format_iso(leave.start_date()),
            end_date: format_iso(leave.end_date()),
            reason: leave.reason().to_string(),
        }
    }
}

impl JsonLeave {
    /// Converts this record into a validated `Leave`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidRecord` if a date is invalid, the
    /// range is reversed or the reason is empty.
    pub fn into_leave(self) -> Result<Leave, PersistenceError> {
        Leave::new(&self.start_date, &self.end_date, &self.reason).map_err(invalid)
    }
}

impl From<&Attendance> for JsonAttendance {
    fn from(attendance: &Attendance) -> Self {
        Self {
            work_day_count: i64::from(attendance.work_day_count()),
            absent_day_count: i64::from(attendance.absent_day_count()),
        }
    }
}

impl JsonAttendance {
    /// Converts these counters into validated `Attendance`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidRecord` if either count is negative
    /// or more days are absent than worked.
    pub fn into_attendance(self) -> Result<Attendance, PersistenceError> {
        Attendance::new(self.work_day_count, self.absent_day_count).map_err(invalid)
    }
}

fn required<T>(
    value: Option<&str>,
    field: &str,
    build: impl FnOnce(&str) -> Result<T, DomainError>,
) -> Result<T, PersistenceError> {
    let value: &str = value.ok_or_else(|| {
        PersistenceError::InvalidRecord(format!("Person's {field} field is missing!"))
    })?;
    build(value).map_err(invalid)
}

fn invalid(err: DomainError) -> PersistenceError {
    PersistenceError::InvalidRecord(err.to_string())
}
