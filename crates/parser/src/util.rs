// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversions from raw argument text to validated values.

use crate::error::{IndexError, ParseError};
use staffbook::{Index, PersonTarget};
use staffbook_domain::{IdentityNumber, Leave, Tag, is_valid_identity_number};
use std::collections::BTreeSet;

/// The longest leave, in days counting both ends, that can be requested.
pub const MAX_LEAVE_DURATION: i64 = 30;

/// Parses a one-based index.
///
/// # Errors
///
/// Returns an `IndexError` naming whether the token was negative, zero or
/// not an integer. A leading `+` is not an integer here.
pub fn parse_index(token: &str) -> Result<Index, IndexError> {
    let trimmed: &str = token.trim();

    if !trimmed.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        return Err(IndexError::NotANumber);
    }

    match trimmed.parse::<i128>() {
        Ok(value) if value < 0 => Err(IndexError::Negative),
        Ok(0) => Err(IndexError::Zero),
        Ok(value) => usize::try_from(value)
            .ok()
            .and_then(Index::from_one_based)
            .ok_or(IndexError::NotANumber),
        Err(_) => Err(IndexError::NotANumber),
    }
}

/// Returns the index if `token` is a positive integer, and `None` otherwise.
#[must_use]
pub fn try_parse_index(token: &str) -> Option<Index> {
    parse_index(token).ok()
}

/// Resolves a person target: a positive index if the token is one,
/// otherwise an identity number.
///
/// # Errors
///
/// Returns `ParseError::InvalidTarget` if the token is neither.
pub fn parse_target(token: &str) -> Result<PersonTarget, ParseError> {
    let trimmed: &str = token.trim();

    if let Some(index) = try_parse_index(trimmed) {
        return Ok(PersonTarget::Index(index));
    }
    if is_valid_identity_number(trimmed) {
        return Ok(PersonTarget::IdentityNumber(IdentityNumber::new(trimmed)?));
    }

    Err(ParseError::InvalidTarget {
        value: trimmed.to_string(),
    })
}

/// Parses a tag name, collapsing runs of whitespace to a single space.
///
/// # Errors
///
/// Returns `ParseError::InvalidValue` if the name is not a valid tag.
pub fn parse_tag(raw: &str) -> Result<Tag, ParseError> {
    let collapsed: String = raw.split_whitespace().collect::<Vec<&str>>().join(" ");
    Ok(Tag::new(&collapsed)?)
}

/// Parses a leave request and enforces the maximum duration.
///
/// # Errors
///
/// Returns `ParseError::InvalidValue` for bad dates, a reversed range or an
/// empty reason, and `ParseError::LeaveTooLong` if the leave spans more than
/// [`MAX_LEAVE_DURATION`] days.
pub fn parse_leave(start_date: &str, end_date: &str, reason: &str) -> Result<Leave, ParseError> {
    let leave: Leave = Leave::new(start_date.trim(), end_date.trim(), reason.trim())?;

    let days: i64 = leave.duration_days();
    if days > MAX_LEAVE_DURATION {
        return Err(ParseError::LeaveTooLong {
            days,
            max: MAX_LEAVE_DURATION,
        });
    }

    Ok(leave)
}

/// Parses a whitespace-separated list of identity numbers.
///
/// Repeated identity numbers collapse into one.
///
/// # Errors
///
/// Returns `ParseError::InvalidValue` for the first invalid identity number.
pub fn parse_absentees(raw: &str) -> Result<BTreeSet<IdentityNumber>, ParseError> {
    raw.split_whitespace()
        .map(|token| IdentityNumber::new(token).map_err(ParseError::from))
        .collect()
}
