// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_person, nric, typical_book};
use crate::{AddressBook, Command, CommandResult, PersonFilter, apply};
use staffbook_domain::{Attendance, IdentityNumber};
use std::collections::BTreeSet;

fn attendance(absentees: &[&str]) -> Command {
    Command::Attendance {
        absentees: absentees.iter().copied().map(nric).collect::<BTreeSet<IdentityNumber>>(),
    }
}

#[test]
fn test_attendance_marks_work_day_for_all_and_absence_for_listed() {
    let mut book: AddressBook = AddressBook::with_persons(vec![
        create_test_person("Dana Tan", "S7654321B"),
        create_test_person("Eli Ong", "T7654321C"),
    ])
    .unwrap();

    let result: CommandResult = apply(&mut book, attendance(&["S7654321B"])).unwrap();

    let dana: &Attendance = book.persons()[0].attendance();
    let eli: &Attendance = book.persons()[1].attendance();
    assert_eq!((dana.work_day_count(), dana.absent_day_count()), (1, 1));
    assert_eq!((eli.work_day_count(), eli.absent_day_count()), (1, 0));
    assert_eq!(
        result.feedback_to_user,
        "Attendance added: 1 person(s) marked as absent."
    );
}

#[test]
fn test_attendance_with_no_absentees() {
    let mut book: AddressBook = typical_book();

    let result: CommandResult = apply(&mut book, attendance(&[])).unwrap();

    for person in book.persons() {
        assert_eq!(person.attendance().work_day_count(), 1);
        assert_eq!(person.attendance().absent_day_count(), 0);
    }
    assert_eq!(
        result.feedback_to_user,
        "Attendance added: 0 person(s) marked as absent."
    );
}

#[test]
fn test_attendance_ignores_unknown_identity_numbers() {
    let mut book: AddressBook = typical_book();

    let result: CommandResult = apply(&mut book, attendance(&["G7654321Z"])).unwrap();

    assert!(
        book.persons()
            .iter()
            .all(|p| p.attendance().absent_day_count() == 0)
    );
    assert_eq!(
        result.feedback_to_user,
        "Attendance added: 0 person(s) marked as absent."
    );
}

#[test]
fn test_attendance_only_touches_filtered_view() {
    let mut book: AddressBook = typical_book();
    book.update_filter(PersonFilter::NameKeywords(vec![String::from("benson")]));

    apply(&mut book, attendance(&["T2132398K", "S1234567A"])).unwrap();

    assert_eq!(book.persons()[0].attendance().work_day_count(), 0);
    assert_eq!(book.persons()[0].attendance().absent_day_count(), 0);
    assert_eq!(book.persons()[1].attendance().work_day_count(), 1);
    assert_eq!(book.persons()[1].attendance().absent_day_count(), 1);
    assert_eq!(book.persons()[2].attendance().work_day_count(), 0);
}

#[test]
fn test_repeated_attendance_accumulates() {
    let mut book: AddressBook = typical_book();

    apply(&mut book, attendance(&["S1234567A"])).unwrap();
    apply(&mut book, attendance(&[])).unwrap();

    let alice: &Attendance = book.persons()[0].attendance();
    assert_eq!(alice.work_day_count(), 2);
    assert_eq!(alice.absent_day_count(), 1);
    assert!((alice.attendance_rate() - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_absent_every_day_keeps_absences_within_work_days() {
    let mut book: AddressBook = typical_book();

    for _ in 0..3 {
        apply(&mut book, attendance(&["S1234567A"])).unwrap();
    }

    let alice: &Attendance = book.persons()[0].attendance();
    assert_eq!(alice.work_day_count(), 3);
    assert_eq!(alice.absent_day_count(), 3);
    assert!(alice.attendance_rate().abs() < f64::EPSILON);
}
