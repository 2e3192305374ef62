// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sample employees used to seed a fresh data file.

use crate::data_models::{JsonAddressBook, JsonAttendance, JsonPerson};
use crate::error::PersistenceError;
use staffbook::AddressBook;

// name, NRIC, phone, email, address, hire date, tags
type SampleRecord = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
);

const SAMPLE_RECORDS: [SampleRecord; 6] = [
    (
        "Alex Yeoh",
        "T0000001A",
        "87438807",
        "alexyeoh@example.com",
        "Blk 30 Geylang Street 29, #06-40",
        "2025-01-01",
        &["friends"],
    ),
    (
        "Bernice Yu",
        "T0000002A",
        "99272758",
        "berniceyu@example.com",
        "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        "2025-01-02",
        &["colleagues", "friends"],
    ),
    (
        "Charlotte Oliveiro",
        "T0000003A",
        "93210283",
        "charlotte@example.com",
        "Blk 11 Ang Mo Kio Street 74, #11-04",
        "2025-01-03",
        &["neighbours"],
    ),
    (
        "David Li",
        "T0000004A",
        "91031282",
        "lidavid@example.com",
        "Blk 436 Serangoon Gardens Street 26, #16-43",
        "2025-01-04",
        &["family"],
    ),
    (
        "Irfan Ibrahim",
        "T0000005A",
        "92492021",
        "irfan@example.com",
        "Blk 47 Tampines Street 20, #17-35",
        "2025-01-05",
        &["classmates"],
    ),
    (
        "Roy Balakrishnan",
        "T0000006A",
        "92624417",
        "royb@example.com",
        "Blk 45 Aljunied Street 85, #11-31",
        "2025-01-06",
        &["colleagues"],
    ),
];

/// Returns an address book holding the sample employees.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidRecord` if a sample record fails
/// validation.
pub fn sample_address_book() -> Result<AddressBook, PersistenceError> {
    let persons: Vec<JsonPerson> = SAMPLE_RECORDS
        .iter()
        .map(
            |&(name, identity_number, phone, email, address, hire_date, tags)| JsonPerson {
                name: Some(name.to_string()),
                identity_number: Some(identity_number.to_string()),
                phone: Some(phone.to_string()),
                email: Some(email.to_string()),
                address: Some(address.to_string()),
                hire_date: Some(hire_date.to_string()),
                tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
                leaves: Vec::new(),
                attendance: JsonAttendance::default(),
            },
        )
        .collect();

    JsonAddressBook { persons }.into_address_book()
}
