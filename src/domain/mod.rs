// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod commit;
mod context;
mod generation;

pub use commit::*;
pub use context::*;
pub use generation::*;
