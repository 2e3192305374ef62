// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text command parsing for Staffbook.
//!
//! A line of input is tokenized, parsed into a validated [`Command`] and
//! then applied to an [`AddressBook`] by [`run_command`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod attendance;
mod edit;
mod error;
mod find;
mod leave;
mod parser;
mod sort;
mod syntax;
mod tag;
mod tokenizer;
mod util;
mod view;

#[cfg(test)]
mod tests;

use staffbook::{AddressBook, Command, CommandResult, apply};
use tracing::{debug, info};

pub use attendance::{ATTENDANCE_USAGE, parse_attendance};
pub use edit::{EDIT_USAGE, parse_edit};
pub use error::{IndexError, ParseError, StaffbookError};
pub use find::{FIND_USAGE, parse_find};
pub use leave::{LEAVE_USAGE, parse_leave_command};
pub use parser::parse_command;
pub use sort::{SORT_USAGE, parse_sort};
pub use syntax::{
    PREFIX_ADDRESS, PREFIX_ATTENDANCE_ABSENT, PREFIX_EMAIL, PREFIX_HIRE, PREFIX_LEAVE_END,
    PREFIX_LEAVE_START, PREFIX_NAME, PREFIX_NRIC, PREFIX_PHONE, PREFIX_REASON,
};
pub use tag::{ADD_TAG_USAGE, REMOVE_TAG_USAGE, parse_add_tag, parse_remove_tag};
pub use tokenizer::{ArgumentMultimap, Prefix, tokenize};
pub use util::{
    MAX_LEAVE_DURATION, parse_absentees, parse_index, parse_leave, parse_tag, parse_target,
    try_parse_index,
};
pub use view::{VIEW_USAGE, parse_view};

/// Parses `input` and applies the resulting command to `book`.
///
/// The address book is left untouched if parsing or execution fails.
///
/// # Errors
///
/// Returns `StaffbookError::Parse` for malformed input and
/// `StaffbookError::Execute` when the book's state rejects the command.
pub fn run_command(book: &mut AddressBook, input: &str) -> Result<CommandResult, StaffbookError> {
    let command: Command = parse_command(input).inspect_err(|err| {
        debug!(error = %err, "Command rejected by parser");
    })?;
    debug!(?command, "Parsed command");

    let result: CommandResult = apply(book, command).inspect_err(|err| {
        debug!(error = %err, "Command rejected by address book");
    })?;
    info!(feedback = %result.feedback_to_user, "Command applied");

    Ok(result)
}
