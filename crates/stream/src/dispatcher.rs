// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session driver: chunks in, callback invocations out.

use crate::decoder::{decode_line, DecodeError};
use crate::splitter::ChunkBuffer;
use tcm_core::ToolchainMessage;

/// Drives the splitter and decoder across one subprocess stream session,
/// invoking the callback once per decoded message.
///
/// Each [`feed`](Self::feed) call runs synchronously to completion: all
/// lines the chunk completes are decoded and delivered before it returns,
/// in stream order, one callback invocation per message. The session owns
/// its buffer; it must not be shared across subprocesses. There is no
/// finalize step — when the underlying stream ends, any unterminated
/// trailing fragment is simply never decoded.
pub struct Dispatcher<F> {
    buffer: ChunkBuffer,
    on_message: F,
}

impl<F: FnMut(ToolchainMessage)> Dispatcher<F> {
    pub fn new(on_message: F) -> Self {
        Self { buffer: ChunkBuffer::new(), on_message }
    }

    /// Feed one chunk of stdout.
    ///
    /// Returns the decode errors for malformed lines in this chunk, in
    /// stream order. A malformed line does not abort the feed or poison
    /// the buffer — every complete line is decoded independently.
    pub fn feed(&mut self, chunk: &str) -> Vec<DecodeError> {
        let mut errors = Vec::new();
        for line in self.buffer.push(chunk) {
            match decode_line(&line) {
                Ok(Some(message)) => (self.on_message)(message),
                Ok(None) => {}
                Err(err) => errors.push(err),
            }
        }
        errors
    }

    /// Text after the last newline, retained for the next `feed`.
    pub fn pending(&self) -> &str {
        self.buffer.pending()
    }

    /// End the session, returning any undecoded trailing fragment.
    pub fn into_pending(self) -> String {
        self.buffer.into_pending()
    }
}

impl<F> std::fmt::Debug for Dispatcher<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").field("buffer", &self.buffer).finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
