// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-line JSON decoding into typed messages.

use tcm_core::ToolchainMessage;
use thiserror::Error;

/// A complete line failed to parse as a JSON message.
///
/// Carries the offending text: malformed output from the external binary
/// is a protocol break worth surfacing, not masking. The error is scoped
/// to one line; later lines in the same chunk still decode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed message line ({reason}): {line:?}")]
pub struct DecodeError {
    /// The complete line that failed to parse, without its newline.
    pub line: String,
    /// What was rejected: a JSON syntax error, or a payload that doesn't
    /// match its recognized `type` tag.
    pub reason: String,
}

/// Decode one complete line into a message.
///
/// Blank lines are separators, not messages: they decode to `None`
/// without error, so consecutive newlines in the stream never produce
/// spurious failures.
///
/// A well-formed document whose `type` tag the schema doesn't recognize
/// (or that carries no tag at all) decodes to
/// [`ToolchainMessage::Unknown`]: newer binaries may emit kinds this
/// frontend predates. A recognized tag promises a shape, though, so a
/// payload that doesn't match it is an error, same as invalid JSON.
pub fn decode_line(line: &str) -> Result<Option<ToolchainMessage>, DecodeError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value =
        serde_json::from_str(trimmed).map_err(|e| DecodeError {
            line: line.to_owned(),
            reason: e.to_string(),
        })?;

    if !matches!(value.get("type"), Some(serde_json::Value::String(_))) {
        return Ok(Some(ToolchainMessage::Unknown));
    }

    // An unrecognized tag still lands on the catch-all variant here; only
    // a known tag with a mismatched payload can fail.
    serde_json::from_value(value).map(Some).map_err(|e| DecodeError {
        line: line.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;
