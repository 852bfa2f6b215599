// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! NDJSON session parsing for subprocess output streams.
//!
//! The toolchain manager binary frames its stdout as newline-delimited
//! JSON, but the pipe delivers chunks at arbitrary boundaries — a message
//! can be split mid-escape-sequence across deliveries. This crate turns
//! that chunk stream back into one decoded message per complete line:
//!
//! - [`Utf8Carry`] turns raw reads into text without splitting a scalar
//! - [`ChunkBuffer`] accumulates fragments and yields complete lines
//! - [`decode_line`] parses one line into a [`tcm_core::ToolchainMessage`]
//! - [`Dispatcher`] drives both across a session, invoking a callback
//!   once per message in stream order
//!
//! One session = one subprocess stdout lifetime. Sessions are not shared;
//! dropping the dispatcher discards any trailing unterminated fragment.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod decoder;
mod dispatcher;
mod splitter;
mod utf8;

pub use decoder::{decode_line, DecodeError};
pub use dispatcher::Dispatcher;
pub use splitter::ChunkBuffer;
pub use utf8::Utf8Carry;
