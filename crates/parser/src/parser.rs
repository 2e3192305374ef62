// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Maps the leading keyword of a line to its command parser.

use crate::attendance::parse_attendance;
use crate::edit::parse_edit;
use crate::error::ParseError;
use crate::find::parse_find;
use crate::leave::parse_leave_command;
use crate::sort::parse_sort;
use crate::tag::{parse_add_tag, parse_remove_tag};
use crate::view::parse_view;
use staffbook::{Command, HELP_MESSAGE};
use tracing::debug;

/// Parses one line of user input into a command.
///
/// Keywords are matched exactly. Everything after the keyword is handed to
/// that command's parser.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for a blank line,
/// `ParseError::UnknownCommand` for an unrecognized keyword, or whatever
/// error the command's parser reports.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: HELP_MESSAGE,
        });
    }

    let (keyword, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    debug!(keyword, args, "Parsing command");

    match keyword {
        "view" => parse_view(args),
        "addtag" => parse_add_tag(args),
        "removetag" => parse_remove_tag(args),
        "leave" => parse_leave_command(args),
        "attendance" => parse_attendance(args),
        "sort" => parse_sort(args),
        "edit" => parse_edit(args),
        "find" => parse_find(args),
        "list" => Ok(Command::List),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand {
            keyword: keyword.to_string(),
        }),
    }
}
