// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ParseError;
use crate::syntax::{
    PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_HIRE, PREFIX_NAME, PREFIX_NRIC, PREFIX_PHONE,
};
use crate::tokenizer::{ArgumentMultimap, Prefix, tokenize};
use crate::util::parse_index;
use staffbook::{Command, EditPersonDescriptor, Index};
use staffbook_domain::{Address, DomainError, Email, HireDate, IdentityNumber, Name, Phone};

pub const EDIT_USAGE: &str = "edit: Edits the details of the person identified by the index number used in the displayed person list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [/name NAME] [/nric NRIC] [/phone PHONE] [/email EMAIL] [/address ADDRESS] [/hire HIRE_DATE]\n\
Example: edit 1 /phone 91234567 /email johndoe@example.com";

/// Parses the arguments of `edit INDEX [/prefix value]...`.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` without an index, `ParseError::NotEdited`
/// if no field is given, and `ParseError::InvalidValue` for any invalid field.
pub fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let arguments: ArgumentMultimap = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_NRIC,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_HIRE,
        ],
    );

    if arguments.preamble().is_empty() {
        return Err(ParseError::InvalidFormat { usage: EDIT_USAGE });
    }
    let index: Index = parse_index(arguments.preamble())?;

    let descriptor: EditPersonDescriptor = EditPersonDescriptor {
        name: optional(&arguments, PREFIX_NAME, Name::new)?,
        identity_number: optional(&arguments, PREFIX_NRIC, IdentityNumber::new)?,
        phone: optional(&arguments, PREFIX_PHONE, Phone::new)?,
        email: optional(&arguments, PREFIX_EMAIL, Email::new)?,
        address: optional(&arguments, PREFIX_ADDRESS, Address::new)?,
        hire_date: optional(&arguments, PREFIX_HIRE, HireDate::new)?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }

    Ok(Command::Edit { index, descriptor })
}

fn optional<T>(
    arguments: &ArgumentMultimap,
    prefix: Prefix,
    build: impl Fn(&str) -> Result<T, DomainError>,
) -> Result<Option<T>, ParseError> {
    arguments
        .value(prefix)
        .map(build)
        .transpose()
        .map_err(ParseError::from)
}
