// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::JsonAddressBook;
use crate::error::PersistenceError;
use staffbook::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stores the address book as a single pretty-printed JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Creates storage backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the data file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the address book.
    ///
    /// Returns `Ok(None)` when the data file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds any invalid record. Invalid records fail the whole load.
    pub fn read_address_book(&self) -> Result<Option<AddressBook>, PersistenceError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Data file not found");
            return Ok(None);
        }

        let contents: String = fs::read_to_string(&self.path)?;
        let book: AddressBook = deserialize_address_book(&contents)?;
        info!(
            path = %self.path.display(),
            persons = book.persons().len(),
            "Loaded address book"
        );
        Ok(Some(book))
    }

    /// Saves the address book, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save_address_book(&self, book: &AddressBook) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json: String = serialize_address_book(book)?;
        fs::write(&self.path, json)?;
        debug!(
            path = %self.path.display(),
            persons = book.persons().len(),
            "Saved address book"
        );
        Ok(())
    }
}

/// Serializes the address book to the persisted JSON layout.
///
/// # Errors
///
/// Returns `PersistenceError::SerializationError` if encoding fails.
pub fn serialize_address_book(book: &AddressBook) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(&JsonAddressBook::from(book))?)
}

/// Parses and validates an address book from the persisted JSON layout.
///
/// # Errors
///
/// Returns `PersistenceError::SerializationError` for malformed JSON and
/// `PersistenceError::InvalidRecord` for any invalid record.
pub fn deserialize_address_book(json: &str) -> Result<AddressBook, PersistenceError> {
    let document: JsonAddressBook = serde_json::from_str(json)?;
    document.into_address_book()
}
