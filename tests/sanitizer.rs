// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use commitgem::config::CommitFormat;
use commitgem::error::Error;
use commitgem::services::sanitizer::CommitSanitizer;
use proptest::prelude::*;

fn default_format() -> CommitFormat {
    CommitFormat::default()
}

// ─── Plain text ───────────────────────────────────────────────────────────────

#[test]
fn sanitize_plain_text_conventional() {
    let result = CommitSanitizer::sanitize("feat(cli): added --dry-run flag", &default_format());
    insta::assert_snapshot!(result.unwrap(), @"feat(cli): added --dry-run flag");
}

#[test]
fn sanitize_trims_whitespace_and_trailing_period() {
    let result = CommitSanitizer::sanitize("\n  fix: handled empty diff.\n", &default_format());
    insta::assert_snapshot!(result.unwrap(), @"fix: handled empty diff");
}

#[test]
fn sanitize_strips_quotes() {
    let result = CommitSanitizer::sanitize("\"docs: updated readme\"", &default_format());
    insta::assert_snapshot!(result.unwrap(), @"docs: updated readme");
}

#[test]
fn sanitize_strips_backticks() {
    let result = CommitSanitizer::sanitize("`chore: bumped version`", &default_format());
    insta::assert_snapshot!(result.unwrap(), @"chore: bumped version");
}

#[test]
fn sanitize_strips_code_fence_with_language() {
    let raw = "```text\nrefactor(git): extracted runner\n```";
    let result = CommitSanitizer::sanitize(raw, &default_format());
    insta::assert_snapshot!(result.unwrap(), @"refactor(git): extracted runner");
}

#[test]
fn sanitize_strips_preamble() {
    let raw = "Commit message: test(prompt): covered empty history";
    let result = CommitSanitizer::sanitize(raw, &default_format());
    insta::assert_snapshot!(result.unwrap(), @"test(prompt): covered empty history");
}

#[test]
fn sanitize_keeps_breaking_marker() {
    let result = CommitSanitizer::sanitize("feat(api)!: removed v1 routes", &default_format());
    insta::assert_snapshot!(result.unwrap(), @"feat(api)!: removed v1 routes");
}

// ─── Casing ──────────────────────────────────────────────────────────────────

#[test]
fn sanitize_lowercases_type_and_subject() {
    let result = CommitSanitizer::sanitize("Fix: Corrected typo", &default_format());
    insta::assert_snapshot!(result.unwrap(), @"fix: corrected typo");
}

#[test]
fn sanitize_keeps_acronym_subject() {
    let result = CommitSanitizer::sanitize("feat: API keys read from env", &default_format());
    insta::assert_snapshot!(result.unwrap(), @"feat: API keys read from env");
}

#[test]
fn sanitize_respects_lowercase_subject_off() {
    let format = CommitFormat {
        lowercase_subject: false,
    };
    let result = CommitSanitizer::sanitize("feat: Added flag", &format);
    insta::assert_snapshot!(result.unwrap(), @"feat: Added flag");
}

// ─── Body & length ───────────────────────────────────────────────────────────

#[test]
fn sanitize_keeps_body_after_blank_line() {
    let raw = "feat: added cache\nStores responses per diff.\n";
    let result = CommitSanitizer::sanitize(raw, &default_format()).unwrap();
    assert_eq!(result, "feat: added cache\n\nStores responses per diff.");
}

#[test]
fn sanitize_truncates_long_subject() {
    let raw = format!("feat: {}", "a".repeat(100));
    let result = CommitSanitizer::sanitize(&raw, &default_format()).unwrap();
    assert_eq!(result.chars().count(), 72);
    assert!(result.ends_with("..."));
}

#[test]
fn sanitize_truncates_multibyte_subject_safely() {
    let raw = format!("docs: {}", "é".repeat(100));
    let result = CommitSanitizer::sanitize(&raw, &default_format()).unwrap();
    assert_eq!(result.chars().count(), 72);
}

// ─── Rejections ──────────────────────────────────────────────────────────────

#[test]
fn sanitize_rejects_unknown_type() {
    let result = CommitSanitizer::sanitize("yolo: shipped it", &default_format());
    assert!(matches!(result, Err(Error::InvalidCommitMessage(_))));
}

#[test]
fn sanitize_rejects_missing_header() {
    let result = CommitSanitizer::sanitize("Updated some files", &default_format());
    assert!(matches!(result, Err(Error::InvalidCommitMessage(_))));
}

#[test]
fn sanitize_rejects_empty_output() {
    for raw in ["", "   ", "\"\"", "```\n```"] {
        let result = CommitSanitizer::sanitize(raw, &default_format());
        assert!(
            matches!(result, Err(Error::InvalidCommitMessage(_))),
            "expected rejection for {raw:?}"
        );
    }
}

#[test]
fn sanitize_rejects_empty_subject() {
    let result = CommitSanitizer::sanitize("fix: .", &default_format());
    assert!(matches!(result, Err(Error::InvalidCommitMessage(_))));
}

// ─── Robustness ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sanitize_never_panics(raw in "\\PC{0,200}") {
        let _ = CommitSanitizer::sanitize(&raw, &default_format());
    }

    #[test]
    fn sanitized_header_fits_72_chars(subject in "[a-z][a-z ]{0,150}[a-z]") {
        let raw = format!("feat: {subject}");
        let message = CommitSanitizer::sanitize(&raw, &default_format()).unwrap();
        prop_assert!(message.lines().next().unwrap().chars().count() <= 72);
    }
}

#[test]
fn sanitize_strips_inline_fence() {
    let result = CommitSanitizer::sanitize("```style: reformatted imports```", &default_format());
    insta::assert_snapshot!(result.unwrap(), @"style: reformatted imports");
}
