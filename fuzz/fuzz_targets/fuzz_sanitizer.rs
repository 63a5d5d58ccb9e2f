// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use commitgem::config::CommitFormat;
use commitgem::services::sanitizer::CommitSanitizer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(message) = CommitSanitizer::sanitize(raw, &CommitFormat::default()) {
            let header = message.lines().next().unwrap_or("");
            assert!(header.chars().count() <= 72);
        }
    }
});
