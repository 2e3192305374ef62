// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command model and state transitions for the staff record book.
//!
//! Commands arrive here already validated. [`apply`] executes one command
//! against an [`AddressBook`] and reports the outcome as a [`CommandResult`].

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

mod apply;
mod command;
mod error;
mod sort;
mod state;

#[cfg(test)]
mod tests;

pub use apply::{HELP_MESSAGE, apply};
pub use command::{Command, EditPersonDescriptor, Index, LeaveAction, PersonTarget};
pub use error::CoreError;
pub use sort::{SortAttribute, SortDirection};
pub use state::{AddressBook, CommandResult, PersonFilter};
