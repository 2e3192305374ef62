// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::attendance::Attendance;
use crate::error::DomainError;
use crate::leave::Leave;
use crate::types::{Address, Email, HireDate, IdentityNumber, Name, Phone, TagSet};
use std::sync::Arc;

/// An employee record.
///
/// Identity and data fields are immutable: changing one means building a new
/// `Person` (see [`Person::with_tags`]) and replacing the old record. The
/// leave list and attendance counters are the only parts mutated in place.
///
/// The leave list sits behind an `Arc`, so rebuilding a record for a tag or
/// field change shares the history instead of copying it. A write through
/// [`Person::add_leave`] or [`Person::remove_leave_starting`] copies the list
/// only if another record still shares it.
#[derive(Debug, Clone)]
pub struct Person {
    name: Name,
    identity_number: IdentityNumber,
    phone: Phone,
    email: Email,
    address: Address,
    hire_date: HireDate,
    tags: TagSet,
    leaves: Arc<Vec<Leave>>,
    attendance: Attendance,
}

// Equality covers identity and data fields only; leave history and
// attendance are not compared.
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.identity_number == other.identity_number
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
            && self.hire_date == other.hire_date
            && self.tags == other.tags
    }
}

impl Eq for Person {}

impl Person {
    /// Creates a new `Person` with no leave and fresh attendance counters.
    #[must_use]
    pub fn new(
        name: Name,
        identity_number: IdentityNumber,
        phone: Phone,
        email: Email,
        address: Address,
        hire_date: HireDate,
        tags: TagSet,
    ) -> Self {
        Self {
            name,
            identity_number,
            phone,
            email,
            address,
            hire_date,
            tags,
            leaves: Arc::new(Vec::new()),
            attendance: Attendance::default(),
        }
    }

    /// Returns this person with the given leave history and attendance.
    ///
    /// Used when restoring persisted records. The leaves must satisfy the
    /// rules the leave command enforces: no two share a start date and none
    /// overlap.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvariantViolation` if two leaves share a start
    /// date or overlap.
    pub fn with_history(
        mut self,
        leaves: Vec<Leave>,
        attendance: Attendance,
    ) -> Result<Self, DomainError> {
        let mut accepted: Vec<Leave> = Vec::with_capacity(leaves.len());
        for leave in leaves {
            if accepted.contains(&leave) {
                return Err(DomainError::InvariantViolation {
                    reason: format!("more than one leave starts on {}", leave.start_date()),
                });
            }
            if accepted.iter().any(|existing| existing.overlaps(&leave)) {
                return Err(DomainError::InvariantViolation {
                    reason: format!("leave {leave} overlaps another leave"),
                });
            }
            accepted.push(leave);
        }
        self.leaves = Arc::new(accepted);
        self.attendance = attendance;
        Ok(self)
    }

    /// Returns this person carrying the leave history and attendance of
    /// `other`. The leave list is shared, not copied.
    #[must_use]
    pub fn with_history_of(mut self, other: &Self) -> Self {
        self.leaves = Arc::clone(&other.leaves);
        self.attendance = other.attendance;
        self
    }

    /// Returns this person with the tag set replaced.
    #[must_use]
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    /// Returns the name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the identity number.
    #[must_use]
    pub const fn identity_number(&self) -> &IdentityNumber {
        &self.identity_number
    }

    /// Returns the phone number.
    #[must_use]
    pub const fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the hire date.
    #[must_use]
    pub const fn hire_date(&self) -> &HireDate {
        &self.hire_date
    }

    /// Returns the tags.
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Returns the leave records in insertion order.
    #[must_use]
    pub fn leaves(&self) -> &[Leave] {
        self.leaves.as_slice()
    }

    /// Returns true if `other` shares this record's leave list.
    #[must_use]
    pub fn shares_leaves_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.leaves, &other.leaves)
    }

    /// Returns the attendance counters.
    #[must_use]
    pub const fn attendance(&self) -> &Attendance {
        &self.attendance
    }

    /// Returns true if both records have the same name.
    ///
    /// This is the weak identity used to keep the record collection free of
    /// duplicates.
    #[must_use]
    pub fn is_same_person(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Returns true if a leave with the same start date is already recorded.
    #[must_use]
    pub fn has_leave(&self, leave: &Leave) -> bool {
        self.leaves.contains(leave)
    }

    /// Returns true if any recorded leave overlaps `leave`.
    #[must_use]
    pub fn has_overlapping_leave(&self, leave: &Leave) -> bool {
        self.leaves.iter().any(|existing| existing.overlaps(leave))
    }

    /// Appends a leave record.
    pub fn add_leave(&mut self, leave: Leave) {
        Arc::make_mut(&mut self.leaves).push(leave);
    }

    /// Removes and returns the leave starting on `start_date`, if any.
    pub fn remove_leave_starting(&mut self, start_date: time::Date) -> Option<Leave> {
        let position: usize = self
            .leaves
            .iter()
            .position(|leave| leave.start_date() == start_date)?;
        Some(Arc::make_mut(&mut self.leaves).remove(position))
    }

    /// Records one more working day.
    pub const fn increment_work_day(&mut self) {
        self.attendance.increment_work_day();
    }

    /// Records one more absent day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvariantViolation` if the absent count would
    /// exceed the work count.
    pub fn increment_absent_day(&mut self) -> Result<(), DomainError> {
        self.attendance.increment_absent_day()
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; NRIC: {}; Phone: {}; Email: {}; Address: {}; Hired: {}; Tags: ",
            self.name,
            self.identity_number,
            self.phone,
            self.email,
            self.address,
            self.hire_date
        )?;
        let tags: Vec<&str> = self.tags.iter().map(crate::Tag::name).collect();
        write!(f, "[{}]", tags.join(", "))
    }
}
