// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tcm-core: shared types for the toolchain manager

pub mod environment;
pub mod event;
pub mod message;

pub use environment::{Environment, ToolchainVersion};
pub use event::TaskEvent;
pub use message::{LogLevel, ProgressDetail, TaskDescriptor, TaskOutcome, ToolchainMessage};
