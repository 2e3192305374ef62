// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ParseError;
use crate::util::parse_index;
use staffbook::Command;

pub const VIEW_USAGE: &str = "view: Views details of the person identified by the index number in the displayed person list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: view 1";

/// Parses the arguments of `view INDEX`.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if no index is given, or
/// `ParseError::InvalidIndex` if it is not a positive integer.
pub fn parse_view(args: &str) -> Result<Command, ParseError> {
    let trimmed: &str = args.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat { usage: VIEW_USAGE });
    }

    Ok(Command::View {
        index: parse_index(trimmed)?,
    })
}
