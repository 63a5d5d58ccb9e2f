// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use assert_cmd::Command;
use predicates::prelude::*;

fn commitgem() -> Command {
    let mut cmd = Command::cargo_bin("commitgem").unwrap();
    cmd.env_remove("COMMITGEM_MODEL")
        .env_remove("GEMINI_API_KEY")
        .env_remove("GOOGLE_API_KEY");
    cmd
}

#[test]
fn help_lists_flags() {
    commitgem()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--context"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--last-commits"));
}

#[test]
fn version_prints_name() {
    commitgem()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("commitgem"));
}

#[test]
fn completions_work_without_api_key() {
    let dir = tempfile::tempdir().unwrap();
    commitgem()
        .current_dir(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("commitgem"));
}

#[test]
fn generate_outside_repo_fails() {
    let dir = tempfile::tempdir().unwrap();
    commitgem()
        .current_dir(dir.path())
        .env("GIT_CEILING_DIRECTORIES", dir.path())
        .env("COMMITGEM_API_KEY", "test-key")
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a git repository"));
}
