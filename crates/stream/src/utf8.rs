// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-to-text conversion that tolerates reads splitting a scalar.

/// Converts a raw byte stream to text across arbitrary read boundaries.
///
/// A pipe read can end in the middle of a multi-byte UTF-8 scalar;
/// converting each read in isolation would turn that scalar into
/// replacement characters. `push` holds such an incomplete suffix back
/// and prepends it to the next read, so only genuinely invalid bytes are
/// ever replaced.
#[derive(Debug, Default)]
pub struct Utf8Carry {
    carry: Vec<u8>,
}

impl Utf8Carry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one read's bytes and return the text that is decodable so
    /// far. An incomplete trailing scalar is held for the next push;
    /// invalid sequences elsewhere become U+FFFD.
    pub fn push(&mut self, bytes: &[u8]) -> String {
        self.carry.extend_from_slice(bytes);
        let retain = match std::str::from_utf8(&self.carry) {
            Ok(_) => 0,
            // error_len() of None marks an incomplete scalar at the end
            // of input; anything else is invalid wherever it sits.
            Err(err) if err.error_len().is_none() => self.carry.len() - err.valid_up_to(),
            Err(_) => 0,
        };
        let tail = self.carry.split_off(self.carry.len() - retain);
        let head = std::mem::replace(&mut self.carry, tail);
        String::from_utf8_lossy(&head).into_owned()
    }

    /// Bytes held back as an incomplete scalar, if the stream ended
    /// mid-character.
    pub fn pending(&self) -> &[u8] {
        &self.carry
    }
}

#[cfg(test)]
#[path = "utf8_tests.rs"]
mod tests;
