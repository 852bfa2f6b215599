// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of environments and task events for the terminal.

use tcm_core::{Environment, TaskEvent, ToolchainMessage};
use tokio::sync::mpsc;

/// One listing row: version, install marker, directory.
pub fn format_environment(env: &Environment) -> String {
    let marker = if env.installed { "installed" } else { "available" };
    format!("{:<12} {:<10} {}", env.version, marker, env.toolchain_dir.display())
}

/// Progress/task line for stdout, or `None` for messages that don't
/// render there (logs go to stderr, unknown kinds are skipped).
pub fn format_message(message: &ToolchainMessage) -> Option<String> {
    match message {
        ToolchainMessage::TaskBegin { task } => Some(format!("-- {}", task.description)),
        ToolchainMessage::TaskProgress { task, progress } => {
            let what = progress.description.as_deref().unwrap_or(&task.description);
            let steps = match (progress.step, progress.total_steps) {
                (Some(step), Some(total)) => format!(" (step {}/{})", step, total),
                _ => String::new(),
            };
            Some(format!("{:>3}% {}{}", progress.percentage, what, steps))
        }
        ToolchainMessage::TaskEnd { task, result } => {
            let outcome = match result {
                tcm_core::TaskOutcome::Success => "done",
                tcm_core::TaskOutcome::Failure => "failed",
            };
            Some(format!("-- {}: {}", task.description, outcome))
        }
        ToolchainMessage::Log { .. } | ToolchainMessage::Unknown => None,
    }
}

/// Drain a streaming task's event channel to the terminal.
///
/// Runs until the sender side closes (the task finished). Progress goes
/// to stdout, logs and malformed-line warnings to stderr.
pub async fn render_events(mut rx: mpsc::UnboundedReceiver<TaskEvent>) {
    while let Some(event) = rx.recv().await {
        match event {
            TaskEvent::Message { message } => match &message {
                ToolchainMessage::Log { level, message } => {
                    eprintln!("[{}] {}", level, message);
                }
                other => {
                    if let Some(line) = format_message(other) {
                        println!("{}", line);
                    }
                }
            },
            TaskEvent::Malformed { line } => {
                eprintln!("warning: unrecognized output line: {}", line);
            }
            TaskEvent::Exited { .. } => {}
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
