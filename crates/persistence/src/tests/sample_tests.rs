// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::sample_address_book;
use staffbook::AddressBook;

#[test]
fn test_sample_book_has_six_valid_persons() {
    let book: AddressBook = sample_address_book().unwrap();

    let names: Vec<&str> = book.persons().iter().map(|p| p.name().value()).collect();
    assert_eq!(
        names,
        vec![
            "Alex Yeoh",
            "Bernice Yu",
            "Charlotte Oliveiro",
            "David Li",
            "Irfan Ibrahim",
            "Roy Balakrishnan",
        ]
    );
}

#[test]
fn test_sample_persons_start_without_history() {
    let book: AddressBook = sample_address_book().unwrap();

    for person in book.persons() {
        assert!(person.leaves().is_empty());
        assert_eq!(person.attendance().work_day_count(), 0);
    }
    assert_eq!(book.persons()[1].tags().len(), 2);
}
