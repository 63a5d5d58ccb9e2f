// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("No staged changes found")]
    #[diagnostic(
        code(commitgem::git::no_staged),
        help("Stage files with: git add <files>")
    )]
    NoStagedChanges,

    #[error("Not a git repository")]
    #[diagnostic(
        code(commitgem::git::not_repo),
        help("Run this command inside a git repository")
    )]
    NotAGitRepo,

    #[error("Merge in progress")]
    #[diagnostic(
        code(commitgem::git::merge),
        help("Complete or abort the merge: git merge --abort")
    )]
    MergeInProgress,

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Failed to serialize commit type catalog: {0}")]
    #[diagnostic(code(commitgem::prompt::catalog))]
    CatalogSerialization(#[source] serde_json::Error),

    #[error("Provider '{provider}' error: {message}")]
    #[diagnostic(code(commitgem::provider::error))]
    Provider { provider: String, message: String },

    #[error("Provider '{provider}' returned no generation result")]
    #[diagnostic(
        code(commitgem::provider::empty_response),
        help("The response had no candidates or no content parts; try again or pick another model")
    )]
    EmptyResponse { provider: String },

    #[error("Invalid commit message: {0}")]
    #[diagnostic(code(commitgem::commit::invalid))]
    InvalidCommitMessage(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(commitgem::config::error),
        help("Check .commitgem.toml, the user config file, or COMMITGEM_* environment variables")
    )]
    Config(String),

    #[error("Git error: {0}")]
    #[diagnostic(code(commitgem::git::error))]
    Git(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
