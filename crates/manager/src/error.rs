// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for subprocess invocations.

use thiserror::Error;

/// Errors from wrapping the external toolchain-manager binary.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// The binary could not be started at all (missing, not executable).
    #[error("failed to spawn {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The child's stdout pipe was not captured.
    #[error("stdout pipe unavailable for `{command}`")]
    StdoutUnavailable { command: String },

    /// The binary ran but exited non-zero.
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// A query's stdout was not the JSON document it contracts to emit.
    #[error("malformed `{command}` output: {reason}")]
    MalformedOutput { command: String, reason: String },

    /// I/O failure while reading the child's output.
    #[error("i/o error reading child output: {0}")]
    Io(#[from] std::io::Error),
}
