// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the parsing layer.

use staffbook::CoreError;
use staffbook_domain::DomainError;
use thiserror::Error;

/// Why a token could not be read as a display index.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The token is a negative integer.
    #[error("Error: Index cannot be negative! It should be a positive number.")]
    Negative,

    /// The token is zero.
    #[error("Error: Index cannot be zero! It should be a positive number starting from 1.")]
    Zero,

    /// The token is not an integer at all.
    #[error("Error: Index is not a valid positive integer! Please provide a positive integer.")]
    NotANumber,
}

/// Errors raised while turning a line of text into a command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not have the shape the command expects.
    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: &'static str },

    /// An index argument is not a positive integer.
    #[error(transparent)]
    InvalidIndex(#[from] IndexError),

    /// A value failed domain validation.
    #[error(transparent)]
    InvalidValue(#[from] DomainError),

    /// A person target is neither a positive index nor an identity number.
    #[error(
        "Invalid target '{value}': expected a positive index or an NRIC starting with S, T, F, G or M followed by 7 digits and a letter"
    )]
    InvalidTarget { value: String },

    /// A keyword argument is not one of the accepted values.
    #[error("{source}\n{usage}")]
    InvalidArgument {
        source: CoreError,
        usage: &'static str,
    },

    /// The leading keyword is not a known command.
    #[error("Unknown command: '{keyword}'")]
    UnknownCommand { keyword: String },

    /// The subcommand is not recognized.
    #[error("Unknown subcommand: '{subcommand}'\n{usage}")]
    UnknownSubcommand {
        subcommand: String,
        usage: &'static str,
    },

    /// An edit named no field to change.
    #[error("At least one field to edit must be provided.")]
    NotEdited,

    /// A leave spans more days than allowed.
    #[error("Leave duration of {days} days exceeds the maximum of {max} days")]
    LeaveTooLong { days: i64, max: i64 },
}

/// Any failure of a single command line, from parsing through execution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StaffbookError {
    /// The line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The command was rejected by the current state of the address book.
    #[error(transparent)]
    Execute(#[from] CoreError),
}
