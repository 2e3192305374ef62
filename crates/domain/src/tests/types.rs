// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Address, DomainError, Email, HireDate, IdentityNumber, MAX_YEAR, MIN_YEAR, Name, Phone, Tag,
    TagSet,
};
use std::collections::HashSet;

#[test]
fn test_identity_number_creation() {
    let nric: IdentityNumber = IdentityNumber::new("S1234567A").unwrap();
    assert_eq!(nric.value(), "S1234567A");
}

#[test]
fn test_identity_number_normalized_to_uppercase() {
    let lower: IdentityNumber = IdentityNumber::new("t1234567b").unwrap();
    let mixed: IdentityNumber = IdentityNumber::new("T1234567b").unwrap();

    assert_eq!(lower.value(), "T1234567B");
    assert_eq!(lower, mixed);
}

#[test]
fn test_identity_number_hash_uses_normalized_value() {
    let mut seen: HashSet<IdentityNumber> = HashSet::new();
    seen.insert(IdentityNumber::new("g7654321z").unwrap());

    assert!(seen.contains(&IdentityNumber::new("G7654321Z").unwrap()));
}

#[test]
fn test_identity_number_rejects_bad_patterns() {
    for bad in [
        "",
        "A1234567B",
        "S123456B",
        "S12345678B",
        "S1234567",
        "S12345671",
        " S1234567A",
        "S1234567A ",
    ] {
        let result: Result<IdentityNumber, DomainError> = IdentityNumber::new(bad);
        assert!(
            matches!(result, Err(DomainError::InvalidIdentityNumber(_))),
            "expected rejection for {bad:?}"
        );
    }
}

#[test]
fn test_hire_date_accepts_valid_date() {
    let hire: HireDate = HireDate::new("2025-01-31").unwrap();
    assert_eq!(hire.value(), "2025-01-31");
    assert_eq!(hire.date().day(), 31);
}

#[test]
fn test_hire_date_is_strict() {
    assert!(matches!(
        HireDate::new("2025-02-30"),
        Err(DomainError::InvalidDate { .. })
    ));
    assert!(matches!(
        HireDate::new("2025-2-03"),
        Err(DomainError::InvalidDate { .. })
    ));
    assert!(matches!(
        HireDate::new("03-02-2025"),
        Err(DomainError::InvalidDate { .. })
    ));
    assert!(matches!(
        HireDate::new("1900-02-29"),
        Err(DomainError::InvalidDate { .. })
    ));
    assert!(HireDate::new("2000-02-29").is_ok());
}

#[test]
fn test_hire_date_year_bounds() {
    assert!(HireDate::new(&format!("{MIN_YEAR}-01-01")).is_ok());
    assert!(HireDate::new(&format!("{MAX_YEAR}-12-31")).is_ok());
    assert!(matches!(
        HireDate::new("1899-12-31"),
        Err(DomainError::YearOutOfRange { .. })
    ));
    assert!(matches!(
        HireDate::new("2101-01-01"),
        Err(DomainError::YearOutOfRange { .. })
    ));
}

#[test]
fn test_hire_date_string_order_matches_date_order() {
    let earlier: HireDate = HireDate::new("2019-09-30").unwrap();
    let later: HireDate = HireDate::new("2019-10-01").unwrap();

    assert!(earlier.value() < later.value());
    assert!(earlier.date() < later.date());
}

#[test]
fn test_tag_keeps_original_case() {
    let tag: Tag = Tag::new("Software Engineer").unwrap();
    assert_eq!(tag.name(), "Software Engineer");
    assert_eq!(tag.to_normalized().name(), "software engineer");
}

#[test]
fn test_tag_allows_hyphen_and_apostrophe() {
    assert!(Tag::new("part-time").is_ok());
    assert!(Tag::new("O'Neil's team").is_ok());
}

#[test]
fn test_tag_rejects_other_punctuation() {
    assert!(matches!(Tag::new("c++"), Err(DomainError::InvalidTag(_))));
    assert!(matches!(Tag::new(""), Err(DomainError::InvalidTag(_))));
    assert!(matches!(Tag::new("   "), Err(DomainError::InvalidTag(_))));
}

#[test]
fn test_tag_set_contains_ignore_case() {
    let tags: TagSet = TagSet::new([Tag::new("Friends").unwrap()]);

    assert!(tags.contains_ignore_case(&Tag::new("friends").unwrap()));
    assert!(tags.contains_ignore_case(&Tag::new("FRIENDS").unwrap()));
    assert!(!tags.contains_ignore_case(&Tag::new("family").unwrap()));
}

#[test]
fn test_tag_set_with_tag_leaves_original_untouched() {
    let original: TagSet = TagSet::new([Tag::new("friends").unwrap()]);
    let updated: TagSet = original.with_tag(Tag::new("manager").unwrap());

    assert_eq!(original.len(), 1);
    assert_eq!(updated.len(), 2);
}

#[test]
fn test_tag_set_without_tag_matches_ignore_case() {
    let original: TagSet = TagSet::new([
        Tag::new("Friends").unwrap(),
        Tag::new("manager").unwrap(),
    ]);
    let updated: TagSet = original.without_tag(&Tag::new("friends").unwrap());

    assert_eq!(updated.len(), 1);
    assert!(!updated.contains_ignore_case(&Tag::new("friends").unwrap()));
    assert_eq!(original.len(), 2);
}

#[test]
fn test_tag_set_drops_exact_duplicates() {
    let tags: TagSet = TagSet::new([Tag::new("a").unwrap(), Tag::new("a").unwrap()]);
    assert_eq!(tags.len(), 1);
}

#[test]
fn test_tag_set_try_new_rejects_case_duplicates() {
    let result: Result<TagSet, DomainError> =
        TagSet::try_new([Tag::new("Friends").unwrap(), Tag::new("friends").unwrap()]);
    assert!(matches!(result, Err(DomainError::InvariantViolation { .. })));

    let tags: TagSet =
        TagSet::try_new([Tag::new("friends").unwrap(), Tag::new("manager").unwrap()]).unwrap();
    assert_eq!(tags.len(), 2);
}

#[test]
fn test_name_phone_email_address_validation() {
    assert!(Name::new("Alice Pauline").is_ok());
    assert!(matches!(Name::new(" Alice"), Err(DomainError::InvalidName(_))));
    assert!(matches!(Name::new("Al*ce"), Err(DomainError::InvalidName(_))));

    assert!(Phone::new("911").is_ok());
    assert!(matches!(Phone::new("91"), Err(DomainError::InvalidPhone(_))));
    assert!(matches!(Phone::new("9a11"), Err(DomainError::InvalidPhone(_))));

    assert!(Email::new("alice@example.com").is_ok());
    assert!(matches!(Email::new("alice"), Err(DomainError::InvalidEmail(_))));

    assert!(Address::new("wall street").is_ok());
    assert!(matches!(Address::new(""), Err(DomainError::InvalidAddress(_))));
    assert!(matches!(Address::new(" x"), Err(DomainError::InvalidAddress(_))));
}
