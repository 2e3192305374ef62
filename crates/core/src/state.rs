// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Index;
use crate::error::CoreError;
use crate::sort::{SortAttribute, SortDirection};
use staffbook_domain::{IdentityNumber, Person};

/// Which persons are currently displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersonFilter {
    /// Every person in the collection.
    #[default]
    All,
    /// Persons whose name contains one of these words, ignoring case.
    NameKeywords(Vec<String>),
}

impl PersonFilter {
    /// Returns true if `person` passes this filter.
    #[must_use]
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(keywords) => person
                .name()
                .value()
                .split_whitespace()
                .any(|word| keywords.iter().any(|k| k.eq_ignore_ascii_case(word))),
        }
    }
}

/// The ordered collection of person records.
///
/// Invariant: no two persons are the same person (same name). The displayed
/// projection is the collection filtered by the current `PersonFilter`, in
/// collection order; index-based commands resolve against that projection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressBook {
    persons: Vec<Person>,
    filter: PersonFilter,
}

impl AddressBook {
    /// Creates an empty address book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            persons: Vec::new(),
            filter: PersonFilter::All,
        }
    }

    /// Creates an address book holding `persons` in the given order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicatePerson` if two entries share a name.
    pub fn with_persons(persons: Vec<Person>) -> Result<Self, CoreError> {
        let mut book: Self = Self::new();
        for person in persons {
            book.add_person(person)?;
        }
        Ok(book)
    }

    /// Returns every person in collection order.
    #[must_use]
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    /// Replaces the active filter.
    pub fn update_filter(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }

    /// Returns the displayed persons in collection order.
    #[must_use]
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.persons
            .iter()
            .filter(|person| self.filter.matches(person))
            .collect()
    }

    /// Returns the collection positions of the displayed persons.
    #[must_use]
    pub fn filtered_positions(&self) -> Vec<usize> {
        self.persons
            .iter()
            .enumerate()
            .filter(|(_, person)| self.filter.matches(person))
            .map(|(position, _)| position)
            .collect()
    }

    /// Maps a displayed-list index to a collection position.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IndexOutOfRange` if fewer persons are displayed.
    pub fn resolve_index(&self, index: Index) -> Result<usize, CoreError> {
        let positions: Vec<usize> = self.filtered_positions();
        positions
            .get(index.zero_based())
            .copied()
            .ok_or(CoreError::IndexOutOfRange {
                index: index.one_based(),
                size: positions.len(),
            })
    }

    /// Returns the collection positions of persons with this identity number.
    #[must_use]
    pub fn positions_with_identity_number(&self, identity_number: &IdentityNumber) -> Vec<usize> {
        self.persons
            .iter()
            .enumerate()
            .filter(|(_, person)| person.identity_number() == identity_number)
            .map(|(position, _)| position)
            .collect()
    }

    /// Returns the person at a collection position.
    #[must_use]
    pub fn person(&self, position: usize) -> Option<&Person> {
        self.persons.get(position)
    }

    /// Returns the person at a collection position for in-place updates of
    /// leave and attendance.
    pub fn person_mut(&mut self, position: usize) -> Option<&mut Person> {
        self.persons.get_mut(position)
    }

    /// Returns true if the collection holds the same person as `person`.
    #[must_use]
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|existing| existing.is_same_person(person))
    }

    /// Appends a person.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicatePerson` if the same person already exists.
    pub fn add_person(&mut self, person: Person) -> Result<(), CoreError> {
        if self.has_person(&person) {
            return Err(CoreError::DuplicatePerson(person.name().clone()));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces the person at `position` with `edited`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicatePerson` if `edited` is the same person as
    /// some other record, or `CoreError::IndexOutOfRange` if `position` is not
    /// in the collection. The collection is unchanged on error.
    pub fn set_person(&mut self, position: usize, edited: Person) -> Result<(), CoreError> {
        let size: usize = self.persons.len();
        let duplicate: bool = self
            .persons
            .iter()
            .enumerate()
            .any(|(other, existing)| other != position && existing.is_same_person(&edited));
        if duplicate {
            return Err(CoreError::DuplicatePerson(edited.name().clone()));
        }

        let slot: &mut Person = self
            .persons
            .get_mut(position)
            .ok_or(CoreError::IndexOutOfRange {
                index: position + 1,
                size,
            })?;
        *slot = edited;
        Ok(())
    }

    /// Removes and returns the person at `position`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IndexOutOfRange` if `position` is not in the
    /// collection.
    pub fn remove_person(&mut self, position: usize) -> Result<Person, CoreError> {
        if position >= self.persons.len() {
            return Err(CoreError::IndexOutOfRange {
                index: position + 1,
                size: self.persons.len(),
            });
        }
        Ok(self.persons.remove(position))
    }

    /// Reorders the whole collection. The sort is stable.
    pub fn sort(&mut self, attribute: SortAttribute, direction: SortDirection) {
        self.persons
            .sort_by(|a, b| direction.apply(attribute.compare(a, b)));
    }
}

/// The outcome of a successfully applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message to show the user.
    pub feedback_to_user: String,
    /// A person whose details should be shown, if any.
    pub person_to_view: Option<Person>,
    /// Usage information should be shown.
    pub show_help: bool,
    /// The session should end.
    pub exit: bool,
}

impl CommandResult {
    /// Creates a result carrying only a message.
    #[must_use]
    pub const fn message(feedback_to_user: String) -> Self {
        Self {
            feedback_to_user,
            person_to_view: None,
            show_help: false,
            exit: false,
        }
    }

    /// Creates a result that also asks the presentation layer to show `person`.
    #[must_use]
    pub const fn viewing(feedback_to_user: String, person: Person) -> Self {
        Self {
            feedback_to_user,
            person_to_view: Some(person),
            show_help: false,
            exit: false,
        }
    }
}
