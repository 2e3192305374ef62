// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{index, typical_book};
use crate::{AddressBook, Command, CommandResult, CoreError, EditPersonDescriptor, apply};
use staffbook_domain::{Name, Person, Phone};

#[test]
fn test_edit_replaces_fields_and_keeps_history() {
    let mut book: AddressBook = typical_book();
    let descriptor: EditPersonDescriptor = EditPersonDescriptor {
        phone: Some(Phone::new("81112222").unwrap()),
        ..EditPersonDescriptor::default()
    };

    let result: CommandResult = apply(
        &mut book,
        Command::Edit {
            index: index(1),
            descriptor,
        },
    )
    .unwrap();

    let alice: &Person = &book.persons()[0];
    assert_eq!(alice.phone().value(), "81112222");
    assert_eq!(alice.name().value(), "Alice Pauline");
    assert_eq!(alice.leaves().len(), 1);
    assert!(result.feedback_to_user.starts_with("Edited Person: Alice Pauline"));
}

#[test]
fn test_edit_shares_leave_history_with_previous_record() {
    let mut book: AddressBook = typical_book();
    let before: Person = book.persons()[0].clone();
    let descriptor: EditPersonDescriptor = EditPersonDescriptor {
        name: Some(Name::new("Alice Tan").unwrap()),
        ..EditPersonDescriptor::default()
    };

    apply(
        &mut book,
        Command::Edit {
            index: index(1),
            descriptor,
        },
    )
    .unwrap();

    assert!(book.persons()[0].shares_leaves_with(&before));
    assert_eq!(book.persons()[0].attendance(), before.attendance());
}

#[test]
fn test_edit_to_existing_name_is_rejected() {
    let mut book: AddressBook = typical_book();
    let before: AddressBook = book.clone();
    let descriptor: EditPersonDescriptor = EditPersonDescriptor {
        name: Some(Name::new("Carl Kurz").unwrap()),
        ..EditPersonDescriptor::default()
    };

    let result: Result<CommandResult, CoreError> = apply(
        &mut book,
        Command::Edit {
            index: index(1),
            descriptor,
        },
    );

    assert_eq!(
        result,
        Err(CoreError::DuplicatePerson(Name::new("Carl Kurz").unwrap()))
    );
    assert_eq!(book, before);
}

#[test]
fn test_edit_keeping_own_name_is_allowed() {
    let mut book: AddressBook = typical_book();
    let descriptor: EditPersonDescriptor = EditPersonDescriptor {
        name: Some(Name::new("Alice Pauline").unwrap()),
        ..EditPersonDescriptor::default()
    };

    let result: Result<CommandResult, CoreError> = apply(
        &mut book,
        Command::Edit {
            index: index(1),
            descriptor,
        },
    );

    assert!(result.is_ok());
}

#[test]
fn test_descriptor_reports_edited_fields() {
    let empty: EditPersonDescriptor = EditPersonDescriptor::default();
    let edited: EditPersonDescriptor = EditPersonDescriptor {
        phone: Some(Phone::new("81112222").unwrap()),
        ..EditPersonDescriptor::default()
    };

    assert!(!empty.is_any_field_edited());
    assert!(edited.is_any_field_edited());
}
