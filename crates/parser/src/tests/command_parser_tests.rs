// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ADD_TAG_USAGE, ATTENDANCE_USAGE, EDIT_USAGE, IndexError, ParseError, SORT_USAGE, VIEW_USAGE,
    parse_command,
};
use staffbook::{
    Command, CoreError, EditPersonDescriptor, Index, SortAttribute, SortDirection,
};
use staffbook_domain::{DomainError, Email, IdentityNumber, Phone, Tag};
use std::collections::BTreeSet;

fn index(position: usize) -> Index {
    Index::from_one_based(position).unwrap()
}

#[test]
fn test_parse_view() {
    assert_eq!(
        parse_command("view 2"),
        Ok(Command::View { index: index(2) })
    );
    assert_eq!(
        parse_command("view"),
        Err(ParseError::InvalidFormat { usage: VIEW_USAGE })
    );
    assert_eq!(
        parse_command("view -3"),
        Err(ParseError::InvalidIndex(IndexError::Negative))
    );
    assert_eq!(
        parse_command("view +1"),
        Err(ParseError::InvalidIndex(IndexError::NotANumber))
    );
}

#[test]
fn test_parse_add_tag_with_multi_word_tag() {
    assert_eq!(
        parse_command("addtag 1   Software   Engineer"),
        Ok(Command::AddTag {
            index: index(1),
            tag: Tag::new("Software Engineer").unwrap(),
        })
    );
}

#[test]
fn test_parse_add_tag_requires_tag() {
    assert_eq!(
        parse_command("addtag 1"),
        Err(ParseError::InvalidFormat {
            usage: ADD_TAG_USAGE
        })
    );
}

#[test]
fn test_parse_remove_tag_rejects_zero_index() {
    assert_eq!(
        parse_command("removetag 0 friends"),
        Err(ParseError::InvalidIndex(IndexError::Zero))
    );
}

#[test]
fn test_parse_attendance() {
    let expected: BTreeSet<IdentityNumber> = [
        IdentityNumber::new("S1234567A").unwrap(),
        IdentityNumber::new("T7654321B").unwrap(),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        parse_command("attendance /absent S1234567A T7654321B"),
        Ok(Command::Attendance {
            absentees: expected
        })
    );
    assert_eq!(
        parse_command("attendance /absent"),
        Ok(Command::Attendance {
            absentees: BTreeSet::new()
        })
    );
}

#[test]
fn test_parse_attendance_requires_prefix_and_empty_preamble() {
    let expected: ParseError = ParseError::InvalidFormat {
        usage: ATTENDANCE_USAGE,
    };

    assert_eq!(
        parse_command("attendance S1234567A"),
        Err(expected.clone())
    );
    assert_eq!(
        parse_command("attendance today /absent S1234567A"),
        Err(expected)
    );
}

#[test]
fn test_parse_attendance_last_absent_prefix_wins() {
    let result: Result<Command, ParseError> =
        parse_command("attendance /absent S1234567A /absent 1234");

    assert_eq!(
        result,
        Err(ParseError::InvalidValue(DomainError::InvalidIdentityNumber(
            String::from("1234")
        )))
    );
}

#[test]
fn test_parse_sort() {
    assert_eq!(
        parse_command("sort NAME Desc"),
        Ok(Command::Sort {
            attribute: SortAttribute::Name,
            direction: SortDirection::Descending,
        })
    );
    assert_eq!(
        parse_command("sort name"),
        Err(ParseError::InvalidFormat { usage: SORT_USAGE })
    );
}

#[test]
fn test_parse_sort_unknown_attribute() {
    let result: Result<Command, ParseError> = parse_command("sort salary asc");

    assert_eq!(
        result,
        Err(ParseError::InvalidArgument {
            source: CoreError::InvalidArgument {
                argument: "attribute",
                value: String::from("salary"),
            },
            usage: SORT_USAGE,
        })
    );
}

#[test]
fn test_parse_edit() {
    assert_eq!(
        parse_command("edit 2 /phone 81112222 /email new@example.com"),
        Ok(Command::Edit {
            index: index(2),
            descriptor: EditPersonDescriptor {
                phone: Some(Phone::new("81112222").unwrap()),
                email: Some(Email::new("new@example.com").unwrap()),
                ..EditPersonDescriptor::default()
            },
        })
    );
}

#[test]
fn test_parse_edit_requires_a_field() {
    assert_eq!(parse_command("edit 2"), Err(ParseError::NotEdited));
    assert_eq!(
        parse_command("edit /phone 81112222"),
        Err(ParseError::InvalidFormat { usage: EDIT_USAGE })
    );
}

#[test]
fn test_parse_edit_rejects_invalid_hire_date() {
    assert!(matches!(
        parse_command("edit 1 /hire 1899-12-31"),
        Err(ParseError::InvalidValue(DomainError::YearOutOfRange { .. }))
    ));
}

#[test]
fn test_parse_find_list_help_exit() {
    assert_eq!(
        parse_command("find alice  bob"),
        Ok(Command::Find {
            keywords: vec![String::from("alice"), String::from("bob")],
        })
    );
    assert!(parse_command("find").is_err());
    assert_eq!(parse_command("list"), Ok(Command::List));
    assert_eq!(parse_command("  help  "), Ok(Command::Help));
    assert_eq!(parse_command("exit"), Ok(Command::Exit));
}

#[test]
fn test_parse_unknown_command() {
    assert_eq!(
        parse_command("delete 1"),
        Err(ParseError::UnknownCommand {
            keyword: String::from("delete"),
        })
    );
    assert!(matches!(
        parse_command("   "),
        Err(ParseError::InvalidFormat { .. })
    ));
}
