// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Strict calendar date handling shared by hire dates and leave.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Earliest year accepted for any stored date.
pub const MIN_YEAR: i32 = 1900;

/// Latest year accepted for any stored date.
pub const MAX_YEAR: i32 = 2100;

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const LONG_DATE: &[BorrowedFormatItem<'_>] =
    format_description!("[day] [month repr:short] [year]");

/// Parses a strict `YYYY-MM-DD` date within `[MIN_YEAR, MAX_YEAR]`.
///
/// Impossible dates such as `2025-02-30` are rejected rather than rolled over.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the string is not a real calendar
/// date in the canonical layout, or `DomainError::YearOutOfRange` if the year
/// falls outside the supported range.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    if !has_iso_shape(value) {
        return Err(DomainError::InvalidDate {
            date_string: value.to_string(),
        });
    }

    let date: Date = Date::parse(value, ISO_DATE).map_err(|_| DomainError::InvalidDate {
        date_string: value.to_string(),
    })?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(DomainError::YearOutOfRange {
            date_string: value.to_string(),
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }

    Ok(date)
}

/// Renders a date in the canonical `YYYY-MM-DD` layout.
#[must_use]
pub fn format_iso(date: Date) -> String {
    // Years are bounded to four digits, so formatting cannot fail.
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Renders a date for display, e.g. `10 Mar 2025`.
#[must_use]
pub fn format_long(date: Date) -> String {
    date.format(LONG_DATE).unwrap_or_else(|_| date.to_string())
}

fn has_iso_shape(value: &str) -> bool {
    let bytes: &[u8] = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(position, byte)| match position {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}
