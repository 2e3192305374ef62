// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ParseError;
use staffbook::Command;

pub const FIND_USAGE: &str = "find: Finds all persons whose names contain any of the specified keywords (case-insensitive) \
and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

/// Parses the arguments of `find KEYWORD [MORE_KEYWORDS]...`.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if no keyword is given.
pub fn parse_find(args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat { usage: FIND_USAGE });
    }
    Ok(Command::Find { keywords })
}
