// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure format predicates backing the value-type constructors.
//!
//! Every predicate is deterministic and side-effect free. Constructors call
//! these and convert a `false` into the matching `DomainError`.

/// Characters allowed as the leading letter of an identity number.
const IDENTITY_PREFIXES: &[char] = &['S', 'T', 'F', 'G', 'M'];

/// Returns true if `value` is a valid identity number.
///
/// Pattern: one of `S T F G M` (either case), exactly seven digits, then one
/// letter (either case). Surrounding whitespace is not accepted.
#[must_use]
pub fn is_valid_identity_number(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() != 9 {
        return false;
    }

    IDENTITY_PREFIXES.contains(&chars[0].to_ascii_uppercase())
        && chars[1..8].iter().all(char::is_ascii_digit)
        && chars[8].is_ascii_alphabetic()
}

/// Returns true if `value` is a valid tag name.
///
/// Rule: letters, digits, spaces, hyphens and apostrophes only, with at least
/// one character that is not a space.
#[must_use]
pub fn is_valid_tag_name(value: &str) -> bool {
    !value.trim().is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '\'')
}

/// Returns true if `value` is a valid person name.
///
/// Rule: alphanumerics and spaces, starting with an alphanumeric.
#[must_use]
pub fn is_valid_name(value: &str) -> bool {
    value
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphanumeric())
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

/// Returns true if `value` is a valid phone number (three or more digits).
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    value.len() >= 3 && value.chars().all(|c| c.is_ascii_digit())
}

/// Returns true if `value` is a non-blank address.
#[must_use]
pub fn is_valid_address(value: &str) -> bool {
    value.chars().next().is_some_and(|first| !first.is_whitespace())
}

/// Returns true if `value` is a well-formed email address.
///
/// The local part may contain alphanumerics and `+_.-` but must not start or
/// end with a special character. The domain is one or more `.`-separated
/// labels of alphanumerics and hyphens, each starting and ending with an
/// alphanumeric; the final label must be at least two characters long.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    is_valid_email_local_part(local) && is_valid_email_domain(domain)
}

fn is_valid_email_local_part(local: &str) -> bool {
    let is_special = |c: char| matches!(c, '+' | '_' | '.' | '-');

    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || is_special(c))
        && local.chars().next().is_some_and(|c| !is_special(c))
        && local.chars().last().is_some_and(|c| !is_special(c))
}

fn is_valid_email_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some(last) = labels.last() else {
        return false;
    };

    last.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
                && !label.starts_with('-')
                && !label.ends_with('-')
        })
}
