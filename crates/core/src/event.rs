// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events forwarded from streaming toolchain tasks.

use crate::message::ToolchainMessage;
use serde::{Deserialize, Serialize};

/// One event on a streaming task's channel, in stdout arrival order.
///
/// Serializes with `{"type": "task:message", ...fields}` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TaskEvent {
    /// A decoded message from the subprocess's stdout.
    #[serde(rename = "task:message")]
    Message { message: ToolchainMessage },

    /// A complete line that failed JSON decoding. Forwarded rather than
    /// dropped so a protocol mismatch with the binary is visible.
    #[serde(rename = "task:malformed")]
    Malformed { line: String },

    /// The subprocess exited; always the final event of a session.
    #[serde(rename = "task:exited")]
    Exited {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        exit_code: Option<i32>,
    },
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
