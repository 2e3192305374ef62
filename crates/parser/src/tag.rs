// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsers for `addtag` and `removetag`.

use crate::error::ParseError;
use crate::util::{parse_index, parse_tag};
use staffbook::{Command, Index};
use staffbook_domain::Tag;

pub const ADD_TAG_USAGE: &str = "addtag: Adds a tag to the person identified by the index number used in the displayed person list. \
Existing tags will be retained. Only one tag can be added at a time.\n\
Parameters: INDEX (must be a positive integer) TAG\n\
Example: addtag 1 Software Engineer";

pub const REMOVE_TAG_USAGE: &str = "removetag: Removes a tag from the person identified by the index number used in the displayed person list. \
Only one tag can be removed at a time.\n\
Parameters: INDEX (must be a positive integer) TAG\n\
Example: removetag 1 Software Engineer";

/// Parses the arguments of `addtag INDEX TAG`.
///
/// # Errors
///
/// Returns a `ParseError` if the index or tag is missing or invalid.
pub fn parse_add_tag(args: &str) -> Result<Command, ParseError> {
    let (index, tag) = parse_index_and_tag(args, ADD_TAG_USAGE)?;
    Ok(Command::AddTag { index, tag })
}

/// Parses the arguments of `removetag INDEX TAG`.
///
/// # Errors
///
/// Returns a `ParseError` if the index or tag is missing or invalid.
pub fn parse_remove_tag(args: &str) -> Result<Command, ParseError> {
    let (index, tag) = parse_index_and_tag(args, REMOVE_TAG_USAGE)?;
    Ok(Command::RemoveTag { index, tag })
}

fn parse_index_and_tag(args: &str, usage: &'static str) -> Result<(Index, Tag), ParseError> {
    let (index_token, tag_text) = args
        .trim()
        .split_once(char::is_whitespace)
        .ok_or(ParseError::InvalidFormat { usage })?;

    if tag_text.trim().is_empty() {
        return Err(ParseError::InvalidFormat { usage });
    }

    Ok((parse_index(index_token)?, parse_tag(tag_text)?))
}
