// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace-level integration specs.
//!
//! These exercise the whole pipe — a real subprocess emitting NDJSON,
//! through the manager's streaming layer, and the `tcm` binary itself.

mod prelude;

mod pipeline;

mod cli {
    mod help;
    mod queries;
}
