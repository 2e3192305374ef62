// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod attendance;
mod calendar;
mod error;
mod leave;
mod person;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use attendance::Attendance;
pub use calendar::{MAX_YEAR, MIN_YEAR, format_iso, format_long, parse_date};
pub use error::DomainError;
pub use leave::Leave;
pub use person::Person;
pub use types::{Address, Email, HireDate, IdentityNumber, Name, Phone, Tag, TagSet};
pub use validation::{
    is_valid_address, is_valid_email, is_valid_identity_number, is_valid_name, is_valid_phone,
    is_valid_tag_name,
};
