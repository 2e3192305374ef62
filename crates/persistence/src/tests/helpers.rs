// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffbook::AddressBook;
use staffbook_domain::{
    Address, Attendance, Email, HireDate, IdentityNumber, Leave, Name, Person, Phone, Tag, TagSet,
};
use std::path::PathBuf;

pub fn create_test_person() -> Person {
    Person::new(
        Name::new("Alice Pauline").unwrap(),
        IdentityNumber::new("S1234567A").unwrap(),
        Phone::new("94351253").unwrap(),
        Email::new("alice@example.com").unwrap(),
        Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
        HireDate::new("2019-10-10").unwrap(),
        TagSet::new([Tag::new("friends").unwrap(), Tag::new("team lead").unwrap()]),
    )
    .with_history(
        vec![
            Leave::new("2021-10-10", "2021-10-12", "sick").unwrap(),
            Leave::new("2021-12-20", "2021-12-24", "year end").unwrap(),
        ],
        Attendance::new(10, 3).unwrap(),
    )
    .unwrap()
}

pub fn create_test_book() -> AddressBook {
    let carl: Person = Person::new(
        Name::new("Carl Kurz").unwrap(),
        IdentityNumber::new("S1234572F").unwrap(),
        Phone::new("95352563").unwrap(),
        Email::new("heinz@example.com").unwrap(),
        Address::new("wall street").unwrap(),
        HireDate::new("2020-10-10").unwrap(),
        TagSet::default(),
    );
    AddressBook::with_persons(vec![create_test_person(), carl]).unwrap()
}

/// Returns a fresh directory path under the system temp dir.
pub fn unique_temp_dir(name: &str) -> PathBuf {
    let dir: PathBuf =
        std::env::temp_dir().join(format!("staffbook-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}
