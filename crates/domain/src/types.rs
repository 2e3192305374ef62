// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::{format_iso, parse_date};
use crate::error::DomainError;
use crate::validation::{
    is_valid_address, is_valid_email, is_valid_identity_number, is_valid_name, is_valid_phone,
    is_valid_tag_name,
};
use std::collections::BTreeSet;
use time::Date;

/// Represents a person's identity number (NRIC).
///
/// Identity numbers are normalized to uppercase on construction, so equality
/// and hashing are case-insensitive with respect to the original input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityNumber {
    /// The normalized (uppercase) value.
    value: String,
}

impl IdentityNumber {
    /// Creates a new `IdentityNumber`.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw identity number (will be normalized to uppercase)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdentityNumber` if the value does not match
    /// the identity number pattern.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !is_valid_identity_number(value) {
            return Err(DomainError::InvalidIdentityNumber(value.to_string()));
        }
        Ok(Self {
            value: value.to_uppercase(),
        })
    }

    /// Returns the normalized identity number.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a person's full name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    value: String,
}

impl Name {
    /// Creates a new `Name`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the name is blank or contains
    /// characters other than letters, digits and spaces.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !is_valid_name(value) {
            return Err(DomainError::InvalidName(value.to_string()));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a person's phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    value: String,
}

impl Phone {
    /// Creates a new `Phone`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPhone` if the value is not at least three
    /// digits.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !is_valid_phone(value) {
            return Err(DomainError::InvalidPhone(value.to_string()));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the phone number.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a person's email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    value: String,
}

impl Email {
    /// Creates a new `Email`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmail` if the value is not a well-formed
    /// `local@domain` address.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !is_valid_email(value) {
            return Err(DomainError::InvalidEmail(value.to_string()));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the email address.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a person's postal address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    value: String,
}

impl Address {
    /// Creates a new `Address`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAddress` if the value is empty or starts
    /// with whitespace.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !is_valid_address(value) {
            return Err(DomainError::InvalidAddress(value.to_string()));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the address.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents the date a person was hired.
///
/// The canonical `YYYY-MM-DD` string is kept alongside the parsed date.
/// Because the layout is fixed-width and zero-padded, ordering the strings
/// lexicographically is the same as ordering the dates chronologically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HireDate {
    /// The canonical date string.
    value: String,
    /// The parsed calendar date.
    date: Date,
}

impl HireDate {
    /// Creates a new `HireDate`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a strict `YYYY-MM-DD` calendar date
    /// or its year falls outside the supported range.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let date: Date = parse_date(value)?;
        Ok(Self {
            value: format_iso(date),
            date,
        })
    }

    /// Returns the canonical `YYYY-MM-DD` string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the parsed calendar date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }
}

impl std::fmt::Display for HireDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a free-text label attached to a person.
///
/// A `Tag` keeps its name exactly as given. Commands that insert tags
/// lowercase the name first, which makes membership effectively
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Creates a new `Tag`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTag` if the name is blank or contains
    /// characters other than letters, digits, spaces, hyphens and apostrophes.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        if !is_valid_tag_name(name) {
            return Err(DomainError::InvalidTag(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    /// Returns the tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of this tag with its name lowercased.
    #[must_use]
    pub fn to_normalized(&self) -> Self {
        Self {
            name: self.name.to_lowercase(),
        }
    }

    /// Returns true if both tags have the same name ignoring case.
    #[must_use]
    pub fn matches_ignore_case(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// An immutable set of unique tags.
///
/// Changing a person's tags means building a new `TagSet` with
/// [`TagSet::with_tag`] or [`TagSet::without_tag`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TagSet {
    tags: BTreeSet<Tag>,
}

impl TagSet {
    /// Creates a `TagSet` from the given tags, dropping exact duplicates.
    #[must_use]
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }

    /// Creates a `TagSet` from restored tags.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvariantViolation` if two tags differ only in
    /// case, which no tag command can produce.
    pub fn try_new(tags: impl IntoIterator<Item = Tag>) -> Result<Self, DomainError> {
        let mut accepted: BTreeSet<Tag> = BTreeSet::new();
        for tag in tags {
            if accepted.iter().any(|existing| existing.matches_ignore_case(&tag)) {
                return Err(DomainError::InvariantViolation {
                    reason: format!("tag '{tag}' is recorded more than once"),
                });
            }
            accepted.insert(tag);
        }
        Ok(Self { tags: accepted })
    }

    /// Returns true if the set contains a tag matching `tag` ignoring case.
    #[must_use]
    pub fn contains_ignore_case(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|existing| existing.matches_ignore_case(tag))
    }

    /// Returns a new set with `tag` added.
    #[must_use]
    pub fn with_tag(&self, tag: Tag) -> Self {
        let mut tags: BTreeSet<Tag> = self.tags.clone();
        tags.insert(tag);
        Self { tags }
    }

    /// Returns a new set with every tag matching `tag` (ignoring case) removed.
    #[must_use]
    pub fn without_tag(&self, tag: &Tag) -> Self {
        Self {
            tags: self
                .tags
                .iter()
                .filter(|existing| !existing.matches_ignore_case(tag))
                .cloned()
                .collect(),
        }
    }

    /// Iterates over the tags in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the set has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = std::collections::btree_set::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
