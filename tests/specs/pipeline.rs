// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end streaming specs: real subprocess through the manager.

use crate::prelude::*;
use tcm_core::{TaskEvent, ToolchainMessage, ToolchainVersion};
use tcm_manager::Config;
use tokio::sync::mpsc;

fn config_for(binary: std::path::PathBuf, dir: &TempDir) -> Config {
    Config {
        binary,
        install_dir: dir.path().join("toolchains"),
        read_buffer_bytes: 4096,
    }
}

async fn drain(mut rx: mpsc::UnboundedReceiver<TaskEvent>) -> Vec<TaskEvent> {
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn full_install_session_delivers_every_message_in_order() {
    let dir = TempDir::new().unwrap();
    let binary = fake_binary(
        dir.path(),
        r#"printf '{"type":"task_begin","task":{"id":"i","description":"Installing v2.6.1"}}\n'
printf '{"type":"task_progress","task":{"id":"i","description":"Installing v2.6.1"},"progress":{"progressPercentage":25,"step":1,"amountOfSteps":2}}\n'
printf '{"type":"log","level":"info","message":"unpacking"}\n'
printf '{"type":"task_progress","task":{"id":"i","description":"Installing v2.6.1"},"progress":{"progressPercentage":100,"step":2,"amountOfSteps":2}}\n'
printf '{"type":"task_end","task":{"id":"i","description":"Installing v2.6.1"},"result":"success"}\n'"#,
    );
    let config = config_for(binary, &dir);

    let (tx, rx) = mpsc::unbounded_channel();
    tcm_manager::install(&config, &ToolchainVersion::new("v2.6.1"), tx).await.unwrap();

    let events = drain(rx).await;
    assert_eq!(events.len(), 6, "five messages plus exited: {:?}", events);

    let kinds: Vec<&'static str> = events
        .iter()
        .map(|event| match event {
            TaskEvent::Message { message: ToolchainMessage::TaskBegin { .. } } => "begin",
            TaskEvent::Message { message: ToolchainMessage::TaskProgress { .. } } => "progress",
            TaskEvent::Message { message: ToolchainMessage::Log { .. } } => "log",
            TaskEvent::Message { message: ToolchainMessage::TaskEnd { .. } } => "end",
            TaskEvent::Message { .. } => "other",
            TaskEvent::Malformed { .. } => "malformed",
            TaskEvent::Exited { .. } => "exited",
        })
        .collect();
    assert_eq!(kinds, vec!["begin", "progress", "log", "progress", "end", "exited"]);
}

#[tokio::test]
async fn slow_producer_with_mid_line_boundaries_decodes_identically() {
    // sleeps force pipe deliveries that split messages at awkward offsets,
    // including inside a JSON string
    let dir = TempDir::new().unwrap();
    let binary = fake_binary(
        dir.path(),
        r#"printf '{"type":"log","level":"info","mes'
sleep 0.1
printf 'sage":"first"}\n{"type":"log","le'
sleep 0.1
printf 'vel":"info","message":"second"}\n'"#,
    );
    let config = config_for(binary, &dir);

    let (tx, rx) = mpsc::unbounded_channel();
    tcm_manager::install(&config, &ToolchainVersion::new("v2.6.1"), tx).await.unwrap();

    let texts: Vec<String> = drain(rx)
        .await
        .into_iter()
        .filter_map(|event| match event {
            TaskEvent::Message { message: ToolchainMessage::Log { message, .. } } => Some(message),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["first", "second"]);
}

#[tokio::test]
async fn failed_install_reports_error_and_final_exit_event() {
    let dir = TempDir::new().unwrap();
    let binary = fake_binary(
        dir.path(),
        r#"printf '{"type":"task_begin","task":{"id":"i","description":"Installing"}}\n'
echo 'disk full' >&2
exit 7"#,
    );
    let config = config_for(binary, &dir);

    let (tx, rx) = mpsc::unbounded_channel();
    let err = tcm_manager::install(&config, &ToolchainVersion::new("v2.6.1"), tx)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("disk full"), "error: {}", err);

    let events = drain(rx).await;
    assert_eq!(events.last(), Some(&TaskEvent::Exited { exit_code: Some(7) }));
}
