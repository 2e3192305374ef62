// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ParseError;
use staffbook::{Command, SortAttribute, SortDirection};

pub const SORT_USAGE: &str = "sort: Sorts all persons by the specified attribute in the given direction.\n\
Parameters: ATTRIBUTE DIRECTION\n\
ATTRIBUTE must be one of: name, nric, phone, address, email, hire\n\
DIRECTION must be one of: asc (ascending), desc (descending)\n\
Example: sort name asc";

/// Parses the arguments of `sort ATTRIBUTE DIRECTION`.
///
/// Both keywords are matched ignoring case.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` unless exactly two words are given,
/// and `ParseError::InvalidArgument` for an unknown attribute or direction.
pub fn parse_sort(args: &str) -> Result<Command, ParseError> {
    let words: Vec<&str> = args.split_whitespace().collect();
    let [attribute, direction] = words.as_slice() else {
        return Err(ParseError::InvalidFormat { usage: SORT_USAGE });
    };

    let attribute: SortAttribute = attribute
        .parse()
        .map_err(|source| ParseError::InvalidArgument {
            source,
            usage: SORT_USAGE,
        })?;
    let direction: SortDirection = direction
        .parse()
        .map_err(|source| ParseError::InvalidArgument {
            source,
            usage: SORT_USAGE,
        })?;

    Ok(Command::Sort {
        attribute,
        direction,
    })
}
