// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

/// Everything the user prompt is assembled from. Built per call.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequestContext {
    /// Free-form guidance from the user; empty when none was given.
    pub user_context: String,
    pub diff: String,
    /// Neighboring file paths, in the order they should appear.
    pub files: Vec<String>,
    /// Prior commit subjects, most recent first.
    pub last_commits: Vec<String>,
}

impl GenerationRequestContext {
    pub fn new(diff: impl Into<String>) -> Self {
        Self {
            diff: diff.into(),
            ..Self::default()
        }
    }

    pub fn with_user_context(mut self, context: impl Into<String>) -> Self {
        self.user_context = context.into();
        self
    }

    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }

    pub fn with_last_commits(mut self, commits: Vec<String>) -> Self {
        self.last_commits = commits;
        self
    }
}
