//! Integration tests for contact resolution precedence and determinism

use proptest::prelude::*;
use voicepay::core::types::Contact;
use voicepay::directory::{Directory, MatchReason};

fn crowded_directory() -> Directory {
    Directory::new(vec![
        Contact::new("banana@x.com", "ADDR1"),
        Contact::new("anaconda@x.com", "ADDR2"),
        Contact::new("ana@x.com", "ADDR3"),
        Contact::new("ana", "ADDR4"),
    ])
}

#[test]
fn full_handle_outranks_local_part_and_fuzzy() {
    let dir = crowded_directory();

    // "ana" is a full handle (ADDR4) even though "ana@x.com" has the same
    // local-part and two other contacts would fuzzy-match with score 1.0
    let (contact, reason) = dir.find_contact_with_reason("ana").unwrap();
    assert_eq!(contact.address, "ADDR4");
    assert_eq!(reason, MatchReason::ExactHandle);
}

#[test]
fn local_part_outranks_fuzzy_regardless_of_score() {
    let dir = Directory::new(vec![
        // fuzzy would give this a perfect containment score for "ana"
        Contact::new("banana@x.com", "ADDR1"),
        Contact::new("ana@x.com", "ADDR2"),
    ]);

    let (contact, reason) = dir.find_contact_with_reason("ana").unwrap();
    assert_eq!(contact.address, "ADDR2");
    assert_eq!(reason, MatchReason::LocalPart);
}

#[test]
fn fuzzy_ties_break_toward_directory_order() {
    let dir = Directory::new(vec![
        Contact::new("banana@x.com", "ADDR1"),
        Contact::new("anaconda@x.com", "ADDR2"),
    ]);

    // both local-parts contain "ana" (score 1.0); the first entry wins
    let (contact, reason) = dir.find_contact_with_reason("ana").unwrap();
    assert_eq!(contact.address, "ADDR1");
    assert!(matches!(reason, MatchReason::Fuzzy { .. }));
}

#[test]
fn below_threshold_queries_resolve_to_none() {
    let dir = crowded_directory();
    assert!(dir.find_contact("qwerty").is_none());
}

#[test]
fn replacing_with_the_same_snapshot_changes_nothing() {
    let contacts = vec![
        Contact::new("ana@x.com", "ADDR1"),
        Contact::new("bruno@x.com", "ADDR2"),
    ];
    let mut dir = Directory::new(contacts.clone());

    let before = dir.find_contact("anita").cloned();
    dir.replace(contacts.clone());
    dir.replace(contacts);
    let after = dir.find_contact("anita").cloned();

    assert_eq!(before, after);
}

proptest! {
    /// Identical (query, directory) pairs always resolve identically
    #[test]
    fn resolution_is_deterministic(query in "[a-z0-9@. ]{0,12}") {
        let dir = crowded_directory();

        let first = dir.find_contact(&query).cloned();
        let second = dir.find_contact(&query).cloned();

        prop_assert_eq!(first, second);
    }

    /// Resolution never panics on arbitrary input, resolvable or not
    #[test]
    fn resolution_is_total(query in "\\PC{0,24}") {
        let dir = crowded_directory();
        let _ = dir.find_contact(&query);
    }
}
