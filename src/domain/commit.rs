// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Refactor,
    Docs,
    Test,
    Chore,
    Style,
    Perf,
    Build,
    Ci,
    Revert,
}

impl CommitType {
    /// Every conventional type tag the generator may choose from.
    pub const ALL: &'static [&'static str] = &[
        "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert", "feat",
        "fix",
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "feat" => Some(Self::Feat),
            "fix" => Some(Self::Fix),
            "refactor" => Some(Self::Refactor),
            "docs" => Some(Self::Docs),
            "test" => Some(Self::Test),
            "chore" => Some(Self::Chore),
            "style" => Some(Self::Style),
            "perf" => Some(Self::Perf),
            "build" => Some(Self::Build),
            "ci" => Some(Self::Ci),
            "revert" => Some(Self::Revert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Refactor => "refactor",
            Self::Docs => "docs",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Style => "style",
            Self::Perf => "perf",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Revert => "revert",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Docs => "Documentation only changes",
            Self::Style => {
                "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)"
            }
            Self::Refactor => "A code change that neither fixes a bug nor adds a feature",
            Self::Perf => "A code change that improves performance",
            Self::Test => "Adding missing tests or correcting existing tests",
            Self::Build => "Changes that affect the build system or external dependencies",
            Self::Ci => "Changes to our CI configuration files and scripts",
            Self::Chore => "Other changes that don't modify src or test files",
            Self::Revert => "Reverts a previous commit",
            Self::Feat => "A new feature",
            Self::Fix => "A bug fix",
        }
    }

    /// Tag-to-description catalog, ordered by tag so its JSON form is stable.
    pub fn catalog() -> BTreeMap<&'static str, &'static str> {
        Self::ALL
            .iter()
            .filter_map(|s| Self::parse(s))
            .map(|ct| (ct.as_str(), ct.description()))
            .collect()
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
