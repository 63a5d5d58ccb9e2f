// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::sync::LazyLock;

use regex::Regex;

use crate::config::CommitFormat;
use crate::domain::CommitType;
use crate::error::{Error, Result};

const MAX_SUBJECT_CHARS: usize = 72;

static CODE_FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```(?:[A-Za-z0-9_-]*[ \t]*\n)?([\s\S]*?)\n?```$").unwrap());

static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)(\([^()\n]*\))?(!)?: *(.*)$").unwrap());

static PREAMBLE_PATTERNS: &[&str] = &[
    "here's the commit message:",
    "here is the commit message:",
    "suggested commit:",
    "commit message:",
];

pub struct CommitSanitizer;

impl CommitSanitizer {
    /// Turn raw model output into a commit message git will accept.
    pub fn sanitize(raw: &str, format: &CommitFormat) -> Result<String> {
        let cleaned = Self::clean_text(raw);
        if cleaned.is_empty() {
            return Err(Error::InvalidCommitMessage("empty message".into()));
        }

        let (first_line, rest) = match cleaned.split_once('\n') {
            Some((first, rest)) => (first.trim_end(), Some(rest)),
            None => (cleaned.as_str(), None),
        };

        let header = Self::normalize_header(first_line, format)?;
        let header = truncate_chars(&header, MAX_SUBJECT_CHARS);

        Ok(match rest.map(str::trim).filter(|r| !r.is_empty()) {
            Some(body) => format!("{header}\n\n{body}"),
            None => header,
        })
    }

    fn clean_text(raw: &str) -> String {
        let mut cleaned = raw.trim().to_string();

        if let Some(inner) = CODE_FENCE_REGEX
            .captures(&cleaned)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
        {
            cleaned = inner;
        }

        for quote in ['"', '\'', '`'] {
            if cleaned.len() >= 2 && cleaned.starts_with(quote) && cleaned.ends_with(quote) {
                cleaned = cleaned[1..cleaned.len() - 1].trim().to_string();
            }
        }

        if let Some(pattern) = PREAMBLE_PATTERNS.iter().find(|p| {
            cleaned
                .get(..p.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(p))
        }) {
            cleaned = cleaned[pattern.len()..].trim().to_string();
        }

        cleaned
    }

    fn normalize_header(line: &str, format: &CommitFormat) -> Result<String> {
        let Some(caps) = HEADER_REGEX.captures(line) else {
            return Err(Error::InvalidCommitMessage(format!(
                "Message doesn't start with a valid type. Got: '{}'",
                line.chars().take(20).collect::<String>()
            )));
        };

        let raw_type = caps[1].to_lowercase();
        let Some(commit_type) = CommitType::parse(&raw_type) else {
            return Err(Error::InvalidCommitMessage(format!(
                "Invalid commit type: '{}'. Must be one of: {}",
                raw_type,
                CommitType::ALL.join(", ")
            )));
        };

        let scope = caps.get(2).map_or("", |m| m.as_str());
        let breaking = caps.get(3).map_or("", |m| m.as_str());
        let subject = caps[4].trim().trim_end_matches('.');

        if subject.is_empty() {
            return Err(Error::InvalidCommitMessage("empty subject".into()));
        }

        let subject = if format.lowercase_subject {
            lowercase_first(subject)
        } else {
            subject.to_string()
        };

        Ok(format!("{commit_type}{scope}{breaking}: {subject}"))
    }
}

/// Lowercase the first letter unless the subject opens with an acronym.
fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match (chars.next(), s.chars().nth(1)) {
        (Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => {
            s.to_string()
        }
        (Some(first), _) => first.to_lowercase().chain(chars).collect(),
        (None, _) => String::new(),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max - 3).collect();
    format!("{kept}...")
}
