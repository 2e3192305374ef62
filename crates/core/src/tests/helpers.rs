// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AddressBook, Index};
use staffbook_domain::{
    Address, Email, HireDate, IdentityNumber, Leave, Name, Person, Phone, Tag, TagSet,
};

fn build_person(
    name: &str,
    nric: &str,
    phone: &str,
    email: &str,
    address: &str,
    hire_date: &str,
    tags: &[&str],
) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        IdentityNumber::new(nric).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(email).unwrap(),
        Address::new(address).unwrap(),
        HireDate::new(hire_date).unwrap(),
        TagSet::new(tags.iter().map(|t| Tag::new(t).unwrap())),
    )
}

pub fn alice() -> Person {
    let mut person: Person = build_person(
        "Alice Pauline",
        "S1234567A",
        "94351253",
        "alice@example.com",
        "123, Jurong West Ave 6, #08-111",
        "2019-10-10",
        &["friends"],
    );
    person.add_leave(Leave::new("2021-10-10", "2021-10-12", "sick").unwrap());
    person
}

pub fn benson() -> Person {
    let mut person: Person = build_person(
        "Benson Meier",
        "T2132398K",
        "98765432",
        "johnd@example.com",
        "311, Clementi Ave 2, #02-25",
        "2022-10-10",
        &["owesMoney", "friends"],
    );
    person.add_leave(Leave::new("2022-10-10", "2022-11-10", "paternity").unwrap());
    person
}

pub fn carl() -> Person {
    build_person(
        "Carl Kurz",
        "S1234572F",
        "95352563",
        "heinz@example.com",
        "wall street",
        "2020-10-10",
        &[],
    )
}

/// Creates a person with placeholder contact details.
pub fn create_test_person(name: &str, nric: &str) -> Person {
    build_person(
        name,
        nric,
        "91234567",
        "staff@example.com",
        "1 Example Road",
        "2024-01-15",
        &[],
    )
}

pub fn typical_book() -> AddressBook {
    AddressBook::with_persons(vec![alice(), benson(), carl()]).unwrap()
}

pub fn index(position: usize) -> Index {
    Index::from_one_based(position).unwrap()
}

pub fn tag(name: &str) -> Tag {
    Tag::new(name).unwrap()
}

pub fn nric(value: &str) -> IdentityNumber {
    IdentityNumber::new(value).unwrap()
}
