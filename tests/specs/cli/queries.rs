// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI specs against a fake toolchain-manager binary.

use crate::prelude::*;

#[test]
fn list_renders_installed_environments() {
    let dir = TempDir::new().unwrap();
    let binary = fake_binary(
        dir.path(),
        r#"printf '[{"version":"v2.6.1","toolchainDir":"/t/v2.6.1","installed":true}]'"#,
    );

    cli()
        .with_fake(&binary, dir.path())
        .args(&["list"])
        .passes()
        .stdout_has("v2.6.1")
        .stdout_has("installed");
}

#[test]
fn list_json_emits_raw_records() {
    let dir = TempDir::new().unwrap();
    let binary = fake_binary(
        dir.path(),
        r#"printf '[{"version":"v2.6.1","toolchainDir":"/t/v2.6.1","installed":true}]'"#,
    );

    cli()
        .with_fake(&binary, dir.path())
        .args(&["list", "--json"])
        .passes()
        .stdout_has(r#""version": "v2.6.1""#);
}

#[test]
fn install_streams_progress_to_stdout() {
    let dir = TempDir::new().unwrap();
    let binary = fake_binary(
        dir.path(),
        r#"printf '{"type":"task_begin","task":{"id":"i","description":"Installing v2.6.1"}}\n'
printf '{"type":"task_progress","task":{"id":"i","description":"Installing v2.6.1"},"progress":{"progressPercentage":100}}\n'
printf '{"type":"task_end","task":{"id":"i","description":"Installing v2.6.1"},"result":"success"}\n'"#,
    );

    cli()
        .with_fake(&binary, dir.path())
        .args(&["install", "v2.6.1"])
        .passes()
        .stdout_has("-- Installing v2.6.1")
        .stdout_has("100%")
        .stdout_has("done")
        .stdout_has("installed v2.6.1");
}

#[test]
fn failing_binary_fails_the_command() {
    let dir = TempDir::new().unwrap();
    let binary = fake_binary(dir.path(), "echo 'index unreachable' >&2\nexit 2");

    cli()
        .with_fake(&binary, dir.path())
        .args(&["search"])
        .fails()
        .stderr_has("index unreachable");
}

#[test]
fn env_fails_for_missing_version() {
    let dir = TempDir::new().unwrap();
    let binary = fake_binary(dir.path(), "exit 0");

    cli()
        .with_fake(&binary, dir.path())
        .args(&["env", "v9.9.9"])
        .fails()
        .stderr_has("not installed");
}

#[test]
fn env_prints_directory_for_installed_version() {
    let dir = TempDir::new().unwrap();
    let binary = fake_binary(dir.path(), "exit 0");
    std::fs::create_dir_all(dir.path().join("v2.6.1")).unwrap();

    cli()
        .with_fake(&binary, dir.path())
        .args(&["env", "v2.6.1"])
        .passes()
        .stdout_has("v2.6.1");
}
