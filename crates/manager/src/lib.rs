// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess layer wrapping the external toolchain-manager binary.
//!
//! Two invocation shapes:
//! - one-shot queries (`list`, `search`, `--version`): spawn, wait,
//!   parse the single JSON document from stdout
//! - streaming tasks (`install`, `remove`): spawn with piped stdout and
//!   forward each decoded NDJSON message as a [`tcm_core::TaskEvent`]
//!   while the task runs

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod config;
mod error;
mod query;
mod task;

pub use config::Config;
pub use error::ManagerError;
pub use query::{binary_version, list_installed, search_available};
pub use task::{install, remove};
