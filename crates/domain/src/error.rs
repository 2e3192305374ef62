// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing domain values.
///
/// All variants except `InvariantViolation` describe well-shaped input that
/// fails a value rule. `InvariantViolation` is a contract failure: the parser
/// layer validates before construction, so only persisted data or direct
/// library use can reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identity number does not match the required pattern.
    InvalidIdentityNumber(String),
    /// Name is empty or contains disallowed characters.
    InvalidName(String),
    /// Phone number is not a run of at least three digits.
    InvalidPhone(String),
    /// Email address is malformed.
    InvalidEmail(String),
    /// Address is blank.
    InvalidAddress(String),
    /// Tag contains disallowed characters.
    InvalidTag(String),
    /// Date string is not a real `YYYY-MM-DD` calendar date.
    InvalidDate {
        /// The offending date string.
        date_string: String,
    },
    /// Date is outside the supported year range.
    YearOutOfRange {
        /// The offending date string.
        date_string: String,
        /// Smallest accepted year.
        min: i32,
        /// Largest accepted year.
        max: i32,
    },
    /// Leave end date lies before its start date.
    InvalidDateOrder {
        /// The leave start date.
        start_date: time::Date,
        /// The leave end date.
        end_date: time::Date,
    },
    /// Leave reason is blank.
    EmptyReason,
    /// A domain object was constructed with contradictory data.
    InvariantViolation {
        /// Description of the violated invariant.
        reason: String,
    },
}

impl DomainError {
    /// Returns whether this error is a programming-contract failure rather
    /// than a user-facing validation failure.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentityNumber(value) => write!(
                f,
                "Invalid NRIC '{value}': NRIC should begin with 'S', 'T', 'F', 'G' or 'M', \
                 followed by 7 digits, and end with 1 letter (e.g. S7654321A)"
            ),
            Self::InvalidName(value) => write!(
                f,
                "Invalid name '{value}': names should only contain letters, digits and spaces, \
                 and should not be blank"
            ),
            Self::InvalidPhone(value) => write!(
                f,
                "Invalid phone '{value}': phone numbers should only contain digits and be at \
                 least 3 digits long"
            ),
            Self::InvalidEmail(value) => write!(
                f,
                "Invalid email '{value}': emails should be of the format local-part@domain"
            ),
            Self::InvalidAddress(value) => {
                write!(f, "Invalid address '{value}': addresses should not be blank")
            }
            Self::InvalidTag(value) => write!(
                f,
                "Invalid tag '{value}': tags can only contain letters, digits, spaces, \
                 hyphens and apostrophes"
            ),
            Self::InvalidDate { date_string } => write!(
                f,
                "Invalid date '{date_string}': dates should be valid and in the format YYYY-MM-DD"
            ),
            Self::YearOutOfRange {
                date_string,
                min,
                max,
            } => write!(
                f,
                "Invalid date '{date_string}': year must be between {min} and {max}"
            ),
            Self::InvalidDateOrder {
                start_date,
                end_date,
            } => write!(
                f,
                "Invalid date order: start date {start_date} is after end date {end_date}"
            ),
            Self::EmptyReason => write!(f, "Leave reason should not be empty"),
            Self::InvariantViolation { reason } => write!(f, "Invariant violation: {reason}"),
        }
    }
}

impl std::error::Error for DomainError {}
