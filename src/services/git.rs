// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

pub struct GitService {
    repo: gix::Repository,
    work_dir: PathBuf,
}

impl GitService {
    pub fn discover() -> Result<Self> {
        Self::discover_at(".")
    }

    /// Open the repository containing `path`.
    pub fn discover_at(path: impl AsRef<Path>) -> Result<Self> {
        let repo = gix::discover(path.as_ref()).map_err(|_| Error::NotAGitRepo)?;

        let work_dir = repo
            .workdir()
            .ok_or_else(|| Error::Git("Bare repository not supported".into()))?
            .to_path_buf();

        Ok(Self { repo, work_dir })
    }

    pub fn check_state(&self) -> Result<()> {
        let state = self.repo.state();
        if matches!(state, Some(gix::state::InProgress::Merge)) {
            return Err(Error::MergeInProgress);
        }
        Ok(())
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Staged diff, cut to at most `max_lines` lines.
    pub async fn staged_diff(&self, max_lines: usize) -> Result<String> {
        self.check_state()?;

        // --no-ext-diff: don't use external diff tools
        let diff = self
            .run(&["diff", "--cached", "--no-ext-diff", "--unified=3"])
            .await?;

        if diff.trim().is_empty() {
            return Err(Error::NoStagedChanges);
        }

        let kept = truncate_lines(&diff, max_lines);
        if kept.len() < diff.len() {
            debug!(total = diff.lines().count(), kept = max_lines, "truncating staged diff");
            return Ok(kept.to_string());
        }

        Ok(diff)
    }

    pub async fn staged_files(&self) -> Result<Vec<PathBuf>> {
        let output = self
            .run(&["-c", "core.quotepath=off", "diff", "--cached", "--name-only"])
            .await?;
        Ok(output
            .lines()
            .filter(|l| !l.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    /// Tracked files sitting next to the staged ones, keyed by directory.
    pub async fn related_files(&self, staged: &[PathBuf]) -> Result<BTreeMap<String, String>> {
        let tracked = self.run(&["-c", "core.quotepath=off", "ls-files"]).await?;
        let tracked: Vec<PathBuf> = tracked
            .lines()
            .filter(|l| !l.is_empty())
            .map(PathBuf::from)
            .collect();

        Ok(group_related_files(staged, &tracked))
    }

    /// Subjects of the last `n` commits, newest first. Empty on a fresh repo.
    pub async fn last_commits(&self, n: usize) -> Result<Vec<String>> {
        if n == 0 {
            return Ok(Vec::new());
        }

        let head = self.repo.head().map_err(|e| Error::Git(e.to_string()))?;
        if head.is_unborn() {
            debug!("HEAD is unborn, no history to include");
            return Ok(Vec::new());
        }

        let output = self
            .run(&["log", "-n", &n.to_string(), "--pretty=format:%s"])
            .await?;

        Ok(output
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    pub async fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).await?;
        Ok(())
    }

    async fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Cut `text` after its first `max_lines` lines. Line endings, including
/// `\r\n` and the final newline, are kept as they are.
pub fn truncate_lines(text: &str, max_lines: usize) -> &str {
    let end: usize = text
        .split_inclusive('\n')
        .take(max_lines)
        .map(str::len)
        .sum();
    &text[..end]
}

/// For every directory holding a staged file, list the tracked file names in
/// that directory (not recursive), joined with ", ". The repository root is
/// keyed as ".".
pub fn group_related_files(staged: &[PathBuf], tracked: &[PathBuf]) -> BTreeMap<String, String> {
    let dirs: BTreeSet<String> = staged.iter().map(|p| dir_key(p)).collect();

    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for path in tracked {
        let key = dir_key(path);
        if !dirs.contains(&key) {
            continue;
        }
        if let Some(name) = path.file_name() {
            grouped
                .entry(key)
                .or_default()
                .push(name.to_string_lossy().into_owned());
        }
    }

    grouped
        .into_iter()
        .map(|(dir, names)| (dir, names.join(", ")))
        .collect()
}

fn dir_key(path: &Path) -> String {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.to_string_lossy().replace('\\', "/")
        }
        _ => ".".to_string(),
    }
}
