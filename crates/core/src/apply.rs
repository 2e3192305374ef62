// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, EditPersonDescriptor, Index, LeaveAction, PersonTarget};
use crate::error::CoreError;
use crate::sort::{SortAttribute, SortDirection};
use crate::state::{AddressBook, CommandResult, PersonFilter};
use staffbook_domain::{IdentityNumber, Leave, Person, Tag, TagSet};
use std::collections::BTreeSet;
use time::Date;

/// Usage summary returned by the help command.
pub const HELP_MESSAGE: &str = "\
Commands:
  view INDEX
  addtag INDEX TAG
  removetag INDEX TAG
  leave add INDEX|NRIC /start YYYY-MM-DD /end YYYY-MM-DD /reason REASON
  leave remove INDEX|NRIC /start YYYY-MM-DD
  attendance /absent [NRIC]...
  sort name|nric|phone|address|email|hire asc|desc
  edit INDEX [/name NAME] [/nric NRIC] [/phone PHONE] [/email EMAIL] [/address ADDRESS] [/hire YYYY-MM-DD]
  find KEYWORD [MORE_KEYWORDS]...
  list
  help
  exit";

/// Applies a command to the address book.
///
/// Each command runs to completion before returning. A failed command leaves
/// the address book exactly as it was: copy-on-write commands build the
/// replacement record before swapping it in, and in-place commands check
/// every precondition before their single mutation.
///
/// # Arguments
///
/// * `book` - The address book to act on
/// * `command` - The validated command
///
/// # Errors
///
/// Returns an error if the current state forbids the command, for example an
/// index beyond the displayed list, a duplicate tag or an overlapping leave.
pub fn apply(book: &mut AddressBook, command: Command) -> Result<CommandResult, CoreError> {
    match command {
        Command::View { index } => view(book, index),
        Command::AddTag { index, tag } => add_tag(book, index, &tag),
        Command::RemoveTag { index, tag } => remove_tag(book, index, &tag),
        Command::Leave { target, action } => {
            let position: usize = resolve_target(book, &target)?;
            match action {
                LeaveAction::Add(leave) => add_leave(book, position, leave),
                LeaveAction::Remove(start_date) => remove_leave(book, position, start_date),
            }
        }
        Command::Attendance { absentees } => mark_attendance(book, &absentees),
        Command::Sort {
            attribute,
            direction,
        } => Ok(sort(book, attribute, direction)),
        Command::Edit { index, descriptor } => edit(book, index, descriptor),
        Command::Find { keywords } => {
            book.update_filter(PersonFilter::NameKeywords(keywords));
            Ok(CommandResult::message(format!(
                "{} person(s) listed!",
                book.filtered_persons().len()
            )))
        }
        Command::List => {
            book.update_filter(PersonFilter::All);
            Ok(CommandResult::message(String::from("Listed all persons")))
        }
        Command::Help => Ok(CommandResult {
            show_help: true,
            ..CommandResult::message(String::from(HELP_MESSAGE))
        }),
        Command::Exit => Ok(CommandResult {
            exit: true,
            ..CommandResult::message(String::from("Exiting Staffbook as requested ..."))
        }),
    }
}

fn person_at(book: &AddressBook, position: usize) -> Result<&Person, CoreError> {
    book.person(position).ok_or(CoreError::IndexOutOfRange {
        index: position + 1,
        size: book.persons().len(),
    })
}

fn person_at_mut(book: &mut AddressBook, position: usize) -> Result<&mut Person, CoreError> {
    let size: usize = book.persons().len();
    book.person_mut(position).ok_or(CoreError::IndexOutOfRange {
        index: position + 1,
        size,
    })
}

fn view(book: &AddressBook, index: Index) -> Result<CommandResult, CoreError> {
    let position: usize = book.resolve_index(index)?;
    let person: &Person = person_at(book, position)?;

    Ok(CommandResult::viewing(
        format!("Viewing details of: {}", person.name()),
        person.clone(),
    ))
}

fn add_tag(book: &mut AddressBook, index: Index, tag: &Tag) -> Result<CommandResult, CoreError> {
    let position: usize = book.resolve_index(index)?;
    let person: &Person = person_at(book, position)?;

    if person.tags().contains_ignore_case(tag) {
        return Err(CoreError::DuplicateTag {
            tag: tag.clone(),
            name: person.name().clone(),
        });
    }

    // The clone shares the leave list with the record it replaces.
    let updated_tags: TagSet = person.tags().with_tag(tag.to_normalized());
    let edited: Person = person.clone().with_tags(updated_tags);
    book.set_person(position, edited.clone())?;
    book.update_filter(PersonFilter::All);

    Ok(CommandResult::viewing(
        format!("Tag \"{tag}\" added successfully to {}.", edited.name()),
        edited,
    ))
}

fn remove_tag(
    book: &mut AddressBook,
    index: Index,
    tag: &Tag,
) -> Result<CommandResult, CoreError> {
    let position: usize = book.resolve_index(index)?;
    let person: &Person = person_at(book, position)?;

    if !person.tags().contains_ignore_case(tag) {
        return Err(CoreError::TagNotFound {
            tag: tag.clone(),
            name: person.name().clone(),
        });
    }

    let updated_tags: TagSet = person.tags().without_tag(tag);
    let edited: Person = person.clone().with_tags(updated_tags);
    let message: String = format!("Tag \"{tag}\" removed successfully from {}.", edited.name());
    book.set_person(position, edited)?;
    book.update_filter(PersonFilter::All);

    Ok(CommandResult::message(message))
}

/// Resolves a leave target to a collection position.
///
/// An index resolves against the displayed list. An identity number is
/// matched across the whole collection and must identify exactly one person.
fn resolve_target(book: &AddressBook, target: &PersonTarget) -> Result<usize, CoreError> {
    match target {
        PersonTarget::Index(index) => book.resolve_index(*index),
        PersonTarget::IdentityNumber(identity_number) => {
            let positions: Vec<usize> = book.positions_with_identity_number(identity_number);
            match positions.as_slice() {
                [] => Err(CoreError::PersonNotFound(identity_number.clone())),
                [position] => Ok(*position),
                _ => Err(CoreError::AmbiguousMatch(identity_number.clone())),
            }
        }
    }
}

fn add_leave(
    book: &mut AddressBook,
    position: usize,
    leave: Leave,
) -> Result<CommandResult, CoreError> {
    let person: &mut Person = person_at_mut(book, position)?;

    if person.has_leave(&leave) {
        return Err(CoreError::LeaveExists(leave.start_date()));
    }
    if person.has_overlapping_leave(&leave) {
        return Err(CoreError::OverlappingLeave {
            start_date: leave.start_date(),
            end_date: leave.end_date(),
        });
    }

    let message: String = format!("Leave added: {leave} for {}", person.name());
    person.add_leave(leave);
    Ok(CommandResult::message(message))
}

fn remove_leave(
    book: &mut AddressBook,
    position: usize,
    start_date: Date,
) -> Result<CommandResult, CoreError> {
    let person: &mut Person = person_at_mut(book, position)?;

    let removed: Leave = person
        .remove_leave_starting(start_date)
        .ok_or(CoreError::LeaveNotFound(start_date))?;

    Ok(CommandResult::message(format!(
        "Leave removed: {removed} for {}",
        person.name()
    )))
}

/// Records one working day for every displayed person and one absent day
/// for each displayed person listed in `absentees`.
///
/// All work-day increments happen before any absent-day increment, so every
/// person's absent count stays within their work count. Identity numbers
/// that match nobody are ignored.
fn mark_attendance(
    book: &mut AddressBook,
    absentees: &BTreeSet<IdentityNumber>,
) -> Result<CommandResult, CoreError> {
    let positions: Vec<usize> = book.filtered_positions();

    for &position in &positions {
        if let Some(person) = book.person_mut(position) {
            person.increment_work_day();
        }
    }

    let mut absent_count: usize = 0;
    for &position in &positions {
        if let Some(person) = book.person_mut(position)
            && absentees.contains(person.identity_number())
        {
            person.increment_absent_day()?;
            absent_count += 1;
        }
    }

    Ok(CommandResult::message(format!(
        "Attendance added: {absent_count} person(s) marked as absent."
    )))
}

fn sort(
    book: &mut AddressBook,
    attribute: SortAttribute,
    direction: SortDirection,
) -> CommandResult {
    book.update_filter(PersonFilter::All);
    book.sort(attribute, direction);

    CommandResult::message(format!(
        "Sorted all persons by {attribute} in {} order.",
        direction.describe()
    ))
}

fn edit(
    book: &mut AddressBook,
    index: Index,
    descriptor: EditPersonDescriptor,
) -> Result<CommandResult, CoreError> {
    let position: usize = book.resolve_index(index)?;
    let person: &Person = person_at(book, position)?;

    let edited: Person = Person::new(
        descriptor.name.unwrap_or_else(|| person.name().clone()),
        descriptor
            .identity_number
            .unwrap_or_else(|| person.identity_number().clone()),
        descriptor.phone.unwrap_or_else(|| person.phone().clone()),
        descriptor.email.unwrap_or_else(|| person.email().clone()),
        descriptor.address.unwrap_or_else(|| person.address().clone()),
        descriptor
            .hire_date
            .unwrap_or_else(|| person.hire_date().clone()),
        person.tags().clone(),
    )
    .with_history_of(person);

    let message: String = format!("Edited Person: {edited}");
    book.set_person(position, edited)?;
    book.update_filter(PersonFilter::All);

    Ok(CommandResult::message(message))
}
