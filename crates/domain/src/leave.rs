// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave records: a closed date interval with a reason.

use crate::calendar::{format_iso, format_long, parse_date};
use crate::error::DomainError;
use time::Date;

/// A period of approved time off.
///
/// Equality and hashing consider the start date only. Two leaves starting on
/// the same day are the same leave regardless of end date or reason; leave
/// removal and duplicate detection both key on this.
#[derive(Debug, Clone)]
pub struct Leave {
    /// First day of leave (inclusive).
    start_date: Date,
    /// Last day of leave (inclusive).
    end_date: Date,
    /// Free-text reason, never blank.
    reason: String,
}

impl PartialEq for Leave {
    fn eq(&self, other: &Self) -> bool {
        self.start_date == other.start_date
    }
}

impl Eq for Leave {}

impl std::hash::Hash for Leave {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start_date.hash(state);
    }
}

impl Leave {
    /// Creates a new `Leave` from `YYYY-MM-DD` strings.
    ///
    /// # Arguments
    ///
    /// * `start_date` - First day of leave
    /// * `end_date` - Last day of leave, not before `start_date`
    /// * `reason` - Non-blank reason
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either date is not a strict calendar date within the year range
    /// - The reason is blank
    /// - The end date lies before the start date
    pub fn new(start_date: &str, end_date: &str, reason: &str) -> Result<Self, DomainError> {
        let start: Date = parse_date(start_date)?;
        let end: Date = parse_date(end_date)?;
        Self::from_dates(start, end, reason)
    }

    /// Creates a new `Leave` from already-parsed dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the reason is blank or `end_date` precedes
    /// `start_date`.
    pub fn from_dates(start_date: Date, end_date: Date, reason: &str) -> Result<Self, DomainError> {
        if reason.trim().is_empty() {
            return Err(DomainError::EmptyReason);
        }
        if start_date > end_date {
            return Err(DomainError::InvalidDateOrder {
                start_date,
                end_date,
            });
        }

        Ok(Self {
            start_date,
            end_date,
            reason: reason.to_string(),
        })
    }

    /// Returns the first day of leave.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the last day of leave.
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the start date formatted for display, e.g. `10 Mar 2025`.
    #[must_use]
    pub fn formatted_start_date(&self) -> String {
        format_long(self.start_date)
    }

    /// Returns the end date formatted for display, e.g. `15 Mar 2025`.
    #[must_use]
    pub fn formatted_end_date(&self) -> String {
        format_long(self.end_date)
    }

    /// Number of calendar days covered, counting both ends.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }

    /// Returns true if the two closed intervals share at least one day.
    ///
    /// Touching boundaries count as overlapping.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_date <= other.end_date && self.end_date >= other.start_date
    }
}

impl std::fmt::Display for Leave {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {} ({})",
            format_iso(self.start_date),
            format_iso(self.end_date),
            self.reason
        )
    }
}
