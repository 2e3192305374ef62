// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Splits command arguments into a preamble and prefix-tagged values.
//!
//! A prefix is recognized only where it starts a word: at the beginning of
//! the text or right after whitespace, and followed by whitespace or the end
//! of the text. Anything else that merely looks like a prefix stays part of
//! the surrounding value.

use std::collections::HashMap;

/// A marker such as `/start` that introduces an argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    /// Creates a prefix from its marker text.
    #[must_use]
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    /// Returns the marker text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// The result of tokenizing an argument string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, String>,
}

impl ArgumentMultimap {
    /// Returns the trimmed text before the first recognized prefix.
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns the trimmed value of the last occurrence of `prefix`.
    #[must_use]
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values.get(&prefix).map(String::as_str)
    }

    /// Returns true if every prefix in `prefixes` is present.
    #[must_use]
    pub fn has_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.values.contains_key(prefix))
    }

    /// Returns true if at least one prefix was present.
    #[must_use]
    pub fn has_any_value(&self) -> bool {
        !self.values.is_empty()
    }
}

/// Tokenizes `args` against the recognized `prefixes`.
///
/// When a prefix occurs more than once, the last value wins. When two
/// recognized prefixes start at the same position, the longer one is used.
#[must_use]
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let markers: Vec<(usize, Prefix)> = find_markers(args, prefixes);

    let preamble_end: usize = markers.first().map_or(args.len(), |(position, _)| *position);
    let mut values: HashMap<Prefix, String> = HashMap::new();

    for (i, (position, prefix)) in markers.iter().enumerate() {
        let value_start: usize = position + prefix.as_str().len();
        let value_end: usize = markers
            .get(i + 1)
            .map_or(args.len(), |(next_position, _)| *next_position);
        let value: &str = args.get(value_start..value_end).unwrap_or_default();
        values.insert(*prefix, value.trim().to_string());
    }

    ArgumentMultimap {
        preamble: args.get(..preamble_end).unwrap_or_default().trim().to_string(),
        values,
    }
}

/// Returns every recognized prefix occurrence in position order.
fn find_markers(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut markers: Vec<(usize, Prefix)> = Vec::new();
    let mut at_word_start: bool = true;

    for (position, ch) in args.char_indices() {
        if at_word_start
            && let Some(prefix) = longest_prefix_at(args, position, prefixes)
        {
            markers.push((position, prefix));
        }
        at_word_start = ch.is_whitespace();
    }

    markers
}

fn longest_prefix_at(args: &str, position: usize, prefixes: &[Prefix]) -> Option<Prefix> {
    let rest: &str = args.get(position..)?;
    prefixes
        .iter()
        .filter(|prefix| {
            rest.strip_prefix(prefix.as_str())
                .is_some_and(|after| after.is_empty() || after.starts_with(char::is_whitespace))
        })
        .max_by_key(|prefix| prefix.as_str().len())
        .copied()
}
