// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Address, Email, HireDate, IdentityNumber, Name, Person, Phone, Tag, TagSet};

pub fn create_test_person(name: &str, identity_number: &str) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        IdentityNumber::new(identity_number).unwrap(),
        Phone::new("94351253").unwrap(),
        Email::new("alice@example.com").unwrap(),
        Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
        HireDate::new("2019-10-10").unwrap(),
        TagSet::new([Tag::new("friends").unwrap()]),
    )
}
