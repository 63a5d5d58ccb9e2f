// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use commitgem::services::prompt::PromptBuilder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Split the input into context, diff, files and commits on NUL bytes.
    let mut fields = text.split('\0');
    let context = fields.next().unwrap_or("");
    let diff = fields.next().unwrap_or("");
    let files: Vec<String> = fields.next().unwrap_or("").split(',').map(String::from).collect();
    let commits: Vec<String> = fields.map(String::from).collect();

    let first = PromptBuilder::build_user_prompt(context, diff, &files, &commits).unwrap();
    let second = PromptBuilder::build_user_prompt(context, diff, &files, &commits).unwrap();
    assert_eq!(first, second);
    assert!(first.ends_with(diff));
});
