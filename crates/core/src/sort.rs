// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-attribute orderings used by the sort command.

use crate::error::CoreError;
use staffbook_domain::Person;
use std::cmp::Ordering;
use std::str::FromStr;

/// A person field the collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAttribute {
    Name,
    IdentityNumber,
    Phone,
    Address,
    Email,
    HireDate,
}

impl SortAttribute {
    /// Returns the keyword users type for this attribute.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::IdentityNumber => "nric",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Email => "email",
            Self::HireDate => "hire",
        }
    }

    /// Compares two persons on this attribute.
    ///
    /// Text fields compare ignoring case. Hire dates compare on their
    /// canonical `YYYY-MM-DD` strings, which sort chronologically.
    #[must_use]
    pub fn compare(&self, a: &Person, b: &Person) -> Ordering {
        match self {
            Self::Name => compare_ignore_case(a.name().value(), b.name().value()),
            Self::IdentityNumber => compare_ignore_case(
                a.identity_number().value(),
                b.identity_number().value(),
            ),
            Self::Phone => compare_ignore_case(a.phone().value(), b.phone().value()),
            Self::Address => compare_ignore_case(a.address().value(), b.address().value()),
            Self::Email => compare_ignore_case(a.email().value(), b.email().value()),
            Self::HireDate => a.hire_date().value().cmp(b.hire_date().value()),
        }
    }
}

impl FromStr for SortAttribute {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "nric" => Ok(Self::IdentityNumber),
            "phone" => Ok(Self::Phone),
            "address" => Ok(Self::Address),
            "email" => Ok(Self::Email),
            "hire" => Ok(Self::HireDate),
            _ => Err(CoreError::InvalidArgument {
                argument: "attribute",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SortAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Applies this direction to an ascending ordering.
    #[must_use]
    pub const fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns the word used in feedback messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(CoreError::InvalidArgument {
                argument: "direction",
                value: s.to_string(),
            }),
        }
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
