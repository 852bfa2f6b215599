// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the integration specs.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub use tempfile::TempDir;

/// Write an executable shell script standing in for the external
/// toolchain-manager binary.
pub fn fake_binary(dir: &Path, script: &str) -> PathBuf {
    let path = dir.join("fake-toolchain-manager");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", script)).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

/// Builder over the `tcm` binary for CLI specs.
pub fn cli() -> Cli {
    Cli { cmd: assert_cmd::Command::cargo_bin("tcm").unwrap() }
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Point the CLI at a fake binary and a scratch install dir.
    pub fn with_fake(mut self, binary: &Path, install_dir: &Path) -> Self {
        self.cmd.env("TCM_TOOLCHAIN_MANAGER_BIN", binary);
        self.cmd.env("TCM_INSTALL_DIR", install_dir);
        self
    }

    pub fn passes(mut self) -> Checked {
        Checked { assert: self.cmd.assert().success() }
    }

    pub fn fails(mut self) -> Checked {
        Checked { assert: self.cmd.assert().failure() }
    }
}

pub struct Checked {
    assert: assert_cmd::assert::Assert,
}

impl Checked {
    pub fn stdout_has(self, needle: &str) -> Self {
        Self { assert: self.assert.stdout(predicates::str::contains(needle.to_string())) }
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Self { assert: self.assert.stderr(predicates::str::contains(needle.to_string())) }
    }
}
