// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use commitgem::domain::CommitType;

#[test]
fn all_matches_enum_variants() {
    assert_eq!(CommitType::ALL.len(), 11);
    for s in CommitType::ALL {
        assert!(
            CommitType::parse(s).is_some(),
            "ALL entry {:?} has no matching parse result",
            s
        );
    }
}

#[test]
fn parse_roundtrips() {
    for s in CommitType::ALL {
        let ct = CommitType::parse(s).unwrap();
        assert_eq!(ct.as_str(), *s);
        assert_eq!(ct.to_string(), *s);
    }
}

#[test]
fn parse_rejects_invalid() {
    for invalid in &["yolo", "", "FEAT", "feature"] {
        assert!(
            CommitType::parse(invalid).is_none(),
            "expected None for {:?}, but got Some",
            invalid
        );
    }
}

#[test]
fn catalog_is_sorted_and_complete() {
    let catalog = CommitType::catalog();
    let keys: Vec<&str> = catalog.keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style",
            "test"
        ]
    );
    assert_eq!(catalog["feat"], "A new feature");
    assert_eq!(catalog["fix"], "A bug fix");
    assert_eq!(catalog["revert"], "Reverts a previous commit");
}

#[test]
fn descriptions_are_unique_and_non_empty() {
    let catalog = CommitType::catalog();
    let mut descriptions: Vec<&str> = catalog.values().copied().collect();
    assert!(descriptions.iter().all(|d| !d.is_empty()));
    descriptions.sort_unstable();
    descriptions.dedup();
    assert_eq!(descriptions.len(), 11);
}
