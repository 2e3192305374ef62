// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ParseError;
use crate::syntax::{PREFIX_LEAVE_END, PREFIX_LEAVE_START, PREFIX_REASON};
use crate::tokenizer::{ArgumentMultimap, tokenize};
use crate::util::{parse_leave, parse_target};
use staffbook::{Command, LeaveAction, PersonTarget};
use staffbook_domain::parse_date;
use time::Date;

pub const LEAVE_USAGE: &str = "leave: Leave management [add/remove]\n\
- add: Adds a leave to a person\n\
\tUsage: leave add [INDEX or NRIC] /start START_DATE /end END_DATE /reason REASON\n\
\tExample: leave add 1 /start 2025-03-10 /end 2025-03-12 /reason Medical\n\
- remove: Removes the leave starting on the given date\n\
\tUsage: leave remove [INDEX or NRIC] /start START_DATE\n\
\tExample: leave remove S1234567A /start 2025-03-10";

/// Parses the arguments of `leave add|remove TARGET ...`.
///
/// The target is read as a display index when it is a positive integer and
/// as an identity number otherwise.
///
/// # Errors
///
/// Returns a `ParseError` for an unknown subcommand, a missing target or
/// prefix, or any value that fails validation.
pub fn parse_leave_command(args: &str) -> Result<Command, ParseError> {
    let (subcommand, rest) = args
        .trim()
        .split_once(char::is_whitespace)
        .ok_or(ParseError::InvalidFormat { usage: LEAVE_USAGE })?;

    let arguments: ArgumentMultimap = tokenize(
        rest,
        &[PREFIX_LEAVE_START, PREFIX_LEAVE_END, PREFIX_REASON],
    );
    if arguments.preamble().is_empty() {
        return Err(ParseError::InvalidFormat { usage: LEAVE_USAGE });
    }

    match subcommand.to_lowercase().as_str() {
        "add" => {
            let (Some(start), Some(end), Some(reason)) = (
                arguments.value(PREFIX_LEAVE_START),
                arguments.value(PREFIX_LEAVE_END),
                arguments.value(PREFIX_REASON),
            ) else {
                return Err(ParseError::InvalidFormat { usage: LEAVE_USAGE });
            };
            let target: PersonTarget = parse_target(arguments.preamble())?;
            Ok(Command::Leave {
                target,
                action: LeaveAction::Add(parse_leave(start, end, reason)?),
            })
        }
        "remove" => {
            let start: &str = arguments
                .value(PREFIX_LEAVE_START)
                .ok_or(ParseError::InvalidFormat { usage: LEAVE_USAGE })?;
            let target: PersonTarget = parse_target(arguments.preamble())?;
            let start_date: Date = parse_date(start)?;
            Ok(Command::Leave {
                target,
                action: LeaveAction::Remove(start_date),
            })
        }
        _ => Err(ParseError::UnknownSubcommand {
            subcommand: subcommand.to_string(),
            usage: LEAVE_USAGE,
        }),
    }
}
