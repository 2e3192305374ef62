// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::sort::{SortAttribute, SortDirection};
use staffbook_domain::{Address, Email, HireDate, IdentityNumber, Leave, Name, Phone, Tag};
use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use time::Date;

/// A one-based position in the currently displayed person list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(NonZeroUsize);

impl Index {
    /// Creates an index from a one-based position. Returns `None` for zero.
    #[must_use]
    pub const fn from_one_based(position: usize) -> Option<Self> {
        match NonZeroUsize::new(position) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the one-based position.
    #[must_use]
    pub const fn one_based(self) -> usize {
        self.0.get()
    }

    /// Returns the zero-based position.
    #[must_use]
    pub const fn zero_based(self) -> usize {
        self.0.get() - 1
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a command locates the person it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonTarget {
    /// Position in the displayed list.
    Index(Index),
    /// Identity number, matched across the whole collection.
    IdentityNumber(IdentityNumber),
}

/// The two leave operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveAction {
    /// Record a new leave.
    Add(Leave),
    /// Remove the leave starting on this date.
    Remove(Date),
}

/// Replacement values for an edit. `None` keeps the current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub identity_number: Option<IdentityNumber>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub hire_date: Option<HireDate>,
}

impl EditPersonDescriptor {
    /// Returns true if at least one field would change.
    #[must_use]
    pub const fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.identity_number.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.hire_date.is_some()
    }
}

/// A command represents user intent as data only.
///
/// Every value carried by a command has already passed domain validation, so
/// applying it can only fail because of the state of the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show one person's details.
    View {
        /// Position in the displayed list.
        index: Index,
    },
    /// Add a tag to a person.
    AddTag {
        /// Position in the displayed list.
        index: Index,
        /// Tag to add, in the case the user typed it.
        tag: Tag,
    },
    /// Remove a tag from a person.
    RemoveTag {
        /// Position in the displayed list.
        index: Index,
        /// Tag to remove, matched ignoring case.
        tag: Tag,
    },
    /// Add or remove a leave record.
    Leave {
        /// The person to act on.
        target: PersonTarget,
        /// What to do with their leave.
        action: LeaveAction,
    },
    /// Record one working day for everyone displayed.
    Attendance {
        /// Identity numbers of the people absent today.
        absentees: BTreeSet<IdentityNumber>,
    },
    /// Reorder the whole collection.
    Sort {
        /// Field to order by.
        attribute: SortAttribute,
        /// Ascending or descending.
        direction: SortDirection,
    },
    /// Replace identity or data fields of a person.
    Edit {
        /// Position in the displayed list.
        index: Index,
        /// Fields to replace.
        descriptor: EditPersonDescriptor,
    },
    /// Show only persons whose name contains one of the keywords.
    Find {
        /// Whole-word keywords, matched ignoring case.
        keywords: Vec<String>,
    },
    /// Show all persons.
    List,
    /// Show usage information.
    Help,
    /// End the session.
    Exit,
}
