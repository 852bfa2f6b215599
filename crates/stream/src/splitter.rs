// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chunk accumulation and line splitting.

/// Accumulates arbitrarily-fragmented text chunks and yields the complete
/// lines they form.
///
/// Owned by exactly one stream session. Between calls the buffer holds
/// only the text after the last newline seen — never a newline itself.
/// A trailing fragment with no terminating newline stays buffered until
/// more data arrives; it is never yielded as a line.
#[derive(Debug, Default)]
pub struct ChunkBuffer {
    pending: String,
}

impl ChunkBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one chunk and return every line it completes, in order.
    ///
    /// Empty segments from consecutive newlines are yielded as empty
    /// strings so callers see the stream's actual framing. A chunk with
    /// no newline yields nothing and extends the buffer; a chunk ending
    /// exactly on a newline leaves the buffer empty.
    pub fn push(&mut self, chunk: &str) -> Vec<String> {
        self.pending.push_str(chunk);

        let Some(last_newline) = self.pending.rfind('\n') else {
            return Vec::new();
        };

        // Everything up to and including the last newline is complete;
        // the tail carries over to the next push.
        let tail = self.pending.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.pending, tail);

        complete.lines().map(str::to_owned).collect()
    }

    /// Text after the last newline, waiting for the rest of its line.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Consume the buffer, returning any unterminated trailing fragment.
    pub fn into_pending(self) -> String {
        self.pending
    }
}

#[cfg(test)]
#[path = "splitter_tests.rs"]
mod tests;
