// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming tasks: install/remove with live NDJSON progress.
//!
//! The child's stdout is read chunk-by-chunk and driven through a
//! [`tcm_stream::Dispatcher`] session. Every decoded message — and every
//! malformed line — goes out on the event channel in arrival order, then
//! a final `Exited` event when the child terminates.

use crate::config::Config;
use crate::error::ManagerError;
use tcm_core::{TaskEvent, ToolchainVersion};
use tcm_stream::{Dispatcher, Utf8Carry};
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::sync::mpsc;

/// Install a toolchain version, streaming progress events.
///
/// Resolves once the child has exited and its stdout is drained. A
/// non-zero exit is an error carrying the child's stderr.
pub async fn install(
    config: &Config,
    version: &ToolchainVersion,
    events: mpsc::UnboundedSender<TaskEvent>,
) -> Result<(), ManagerError> {
    run_streaming(config, "install", version, events).await
}

/// Remove an installed toolchain version, streaming progress events.
pub async fn remove(
    config: &Config,
    version: &ToolchainVersion,
    events: mpsc::UnboundedSender<TaskEvent>,
) -> Result<(), ManagerError> {
    run_streaming(config, "remove", version, events).await
}

async fn run_streaming(
    config: &Config,
    subcommand: &str,
    version: &ToolchainVersion,
    events: mpsc::UnboundedSender<TaskEvent>,
) -> Result<(), ManagerError> {
    tracing::info!(
        binary = %config.binary.display(),
        subcommand,
        version = %version,
        "starting toolchain task"
    );

    let mut child = Command::new(&config.binary)
        .arg(subcommand)
        .arg("--json")
        .arg("--install-dir")
        .arg(&config.install_dir)
        .arg(version.as_str())
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ManagerError::Spawn {
            binary: config.binary.display().to_string(),
            source,
        })?;

    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| ManagerError::StdoutUnavailable { command: subcommand.to_string() })?;

    // Drain stderr concurrently so a chatty child can't deadlock on a
    // full pipe while we read stdout.
    let stderr_pipe = child.stderr.take();
    let stderr_task = tokio::spawn(async move {
        let mut captured = String::new();
        if let Some(mut stderr) = stderr_pipe {
            let _ = stderr.read_to_string(&mut captured).await;
        }
        captured
    });

    // One dispatcher session per child stdout lifetime. Receiver hangup
    // means the caller abandoned the task; events are then dropped.
    let events_ref = &events;
    let mut dispatcher = Dispatcher::new(move |message| {
        let _ = events_ref.send(TaskEvent::Message { message });
    });

    // A read can end mid-scalar; the carry holds those bytes back so a
    // multi-byte character split across reads survives intact.
    let mut text_buf = Utf8Carry::new();
    let mut read_buf = vec![0u8; config.read_buffer_bytes];
    loop {
        let n = stdout.read(&mut read_buf).await?;
        if n == 0 {
            break;
        }
        let chunk = text_buf.push(&read_buf[..n]);
        for err in dispatcher.feed(&chunk) {
            tracing::warn!(line = %err.line, reason = %err.reason, "malformed message from toolchain manager");
            let _ = events.send(TaskEvent::Malformed { line: err.line });
        }
    }

    let fragment = dispatcher.into_pending();
    if !fragment.is_empty() || !text_buf.pending().is_empty() {
        // The protocol newline-terminates every message, so a leftover
        // fragment is a truncated write; it is never decoded.
        tracing::debug!(
            fragment = %fragment,
            truncated_bytes = text_buf.pending().len(),
            "discarding unterminated trailing fragment"
        );
    }

    let status = child.wait().await?;
    let stderr = stderr_task.await.unwrap_or_default();
    let _ = events.send(TaskEvent::Exited { exit_code: status.code() });

    tracing::info!(subcommand, version = %version, %status, "toolchain task finished");

    if !status.success() {
        return Err(ManagerError::CommandFailed {
            command: subcommand.to_string(),
            status,
            stderr: stderr.trim().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
