// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON persistence for the Staffbook address book.
//!
//! The whole collection is stored as one document:
//!
//! ```json
//! { "persons": [ { "name": "...", "identityNumber": "...", "phone": "...",
//!   "email": "...", "address": "...", "hireDate": "YYYY-MM-DD",
//!   "tags": ["..."],
//!   "leaves": [ { "startDate": "...", "endDate": "...", "reason": "..." } ],
//!   "attendance": { "workDayCount": 0, "absentDayCount": 0 } } ] }
//! ```

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod data_models;
mod error;
mod sample;
mod storage;

#[cfg(test)]
mod tests;

pub use data_models::{JsonAddressBook, JsonAttendance, JsonLeave, JsonPerson};
pub use error::PersistenceError;
pub use sample::sample_address_book;
pub use storage::{JsonStorage, deserialize_address_book, serialize_address_book};
