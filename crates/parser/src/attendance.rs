// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ParseError;
use crate::syntax::PREFIX_ATTENDANCE_ABSENT;
use crate::tokenizer::{ArgumentMultimap, tokenize};
use crate::util::parse_absentees;
use staffbook::Command;

pub const ATTENDANCE_USAGE: &str = "attendance: Marks attendance for everyone in the displayed person list. \
NRICs that do not match any person are ignored. Repeated NRICs count once.\n\
Parameters: /absent [NRIC]... (separated by whitespace, may be empty)\n\
Example: attendance /absent S1234567A T7654321B";

/// Parses the arguments of `attendance /absent [NRIC]...`.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the `/absent` prefix is missing or
/// anything precedes it, and `ParseError::InvalidValue` for an invalid
/// identity number.
pub fn parse_attendance(args: &str) -> Result<Command, ParseError> {
    let arguments: ArgumentMultimap = tokenize(args, &[PREFIX_ATTENDANCE_ABSENT]);

    let absent: &str = arguments
        .value(PREFIX_ATTENDANCE_ABSENT)
        .ok_or(ParseError::InvalidFormat {
            usage: ATTENDANCE_USAGE,
        })?;
    if !arguments.preamble().is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: ATTENDANCE_USAGE,
        });
    }

    Ok(Command::Attendance {
        absentees: parse_absentees(absent)?,
    })
}
