// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffbook_domain::{DomainError, IdentityNumber, Name, Tag};
use time::Date;

/// Errors that can occur while applying a command to the address book.
///
/// Apart from `DomainViolation` and `InvalidArgument`, every variant means the
/// input was valid but the current state of the collection forbids the
/// operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A sort attribute or direction was not recognized.
    InvalidArgument {
        /// Which argument was rejected.
        argument: &'static str,
        /// The rejected value.
        value: String,
    },
    /// The index does not refer to a person in the displayed list.
    IndexOutOfRange {
        /// The one-based index that was requested.
        index: usize,
        /// The number of persons currently displayed.
        size: usize,
    },
    /// The person already has this tag (compared ignoring case).
    DuplicateTag {
        /// The tag that was requested.
        tag: Tag,
        /// The person's name.
        name: Name,
    },
    /// The person does not have this tag.
    TagNotFound {
        /// The tag that was requested.
        tag: Tag,
        /// The person's name.
        name: Name,
    },
    /// No person has this identity number.
    PersonNotFound(IdentityNumber),
    /// More than one person has this identity number.
    AmbiguousMatch(IdentityNumber),
    /// Another person with the same name already exists.
    DuplicatePerson(Name),
    /// A leave starting on this date is already recorded.
    LeaveExists(Date),
    /// The new leave overlaps an existing one.
    OverlappingLeave {
        /// Start date of the rejected leave.
        start_date: Date,
        /// End date of the rejected leave.
        end_date: Date,
    },
    /// No leave starts on this date.
    LeaveNotFound(Date),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidArgument { argument, value } => {
                write!(f, "Invalid {argument} specified: '{value}'")
            }
            Self::IndexOutOfRange { index, size } => write!(
                f,
                "The person index {index} is invalid: {size} person(s) currently listed"
            ),
            Self::DuplicateTag { tag, name } => {
                write!(f, "Tag \"{tag}\" already exists for {name}.")
            }
            Self::TagNotFound { tag, name } => write!(f, "Tag \"{tag}\" not found for {name}."),
            Self::PersonNotFound(nric) => write!(f, "Person with NRIC {nric} not found"),
            Self::AmbiguousMatch(nric) => {
                write!(f, "Multiple persons found with the same NRIC {nric}")
            }
            Self::DuplicatePerson(name) => {
                write!(f, "A person named '{name}' already exists in the address book")
            }
            Self::LeaveExists(start_date) => {
                write!(f, "Leave already exists starting on {start_date}")
            }
            Self::OverlappingLeave {
                start_date,
                end_date,
            } => write!(
                f,
                "Leave from {start_date} to {end_date} overlaps with existing leave"
            ),
            Self::LeaveNotFound(start_date) => {
                write!(f, "Leave starting on {start_date} not found")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
