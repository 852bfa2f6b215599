// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message schema for the toolchain manager's NDJSON output.
//!
//! Each line of the external binary's stdout is one JSON object tagged by
//! `type`. Unknown type tags deserialize to `Unknown` so newer binaries
//! don't break older frontends.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identity of a long-running task (download, unpack, remove).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub id: String,
    pub description: String,
}

/// Progress snapshot for a running task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressDetail {
    #[serde(rename = "progressPercentage")]
    pub percentage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
    #[serde(default, rename = "amountOfSteps", skip_serializing_if = "Option::is_none")]
    pub total_steps: Option<u32>,
}

/// Terminal result reported in a `task_end` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOutcome {
    Success,
    Failure,
}

/// Severity of a `log` message.
///
/// Level names the binary emits but we don't know map to `Info` rather
/// than failing the whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn from_name(name: &str) -> Self {
        match name {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// One decoded NDJSON message from the toolchain manager's stdout.
///
/// Serializes with `{"type": "task_begin", ...fields}` format.
/// Unknown type tags deserialize to `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolchainMessage {
    TaskBegin {
        task: TaskDescriptor,
    },

    TaskProgress {
        task: TaskDescriptor,
        progress: ProgressDetail,
    },

    TaskEnd {
        task: TaskDescriptor,
        result: TaskOutcome,
    },

    Log {
        level: LogLevel,
        message: String,
    },

    /// Catch-all for message kinds this frontend doesn't know about.
    #[serde(other, skip_serializing)]
    Unknown,
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
