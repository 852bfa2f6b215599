// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manager configuration: binary location and install directory.

use std::path::PathBuf;

/// Name the external binary is looked up under when no override is set.
const DEFAULT_BINARY: &str = "nrfutil-toolchain-manager";

/// Read size for the stdout chunk loop of streaming tasks.
const DEFAULT_READ_BUFFER_BYTES: usize = 8 * 1024;

/// How to reach the external toolchain-manager binary and where its
/// toolchains live.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path (or bare name, resolved via PATH) of the external binary.
    pub binary: PathBuf,
    /// Directory toolchains are installed into; passed to every
    /// subcommand as `--install-dir`.
    pub install_dir: PathBuf,
    /// Stdout read size for streaming tasks.
    pub read_buffer_bytes: usize,
}

impl Config {
    /// Build a config from the environment.
    ///
    /// `TCM_TOOLCHAIN_MANAGER_BIN` overrides the binary, `TCM_INSTALL_DIR`
    /// the install directory; otherwise the binary comes from PATH and
    /// toolchains live under the platform-local data directory.
    pub fn from_env() -> Self {
        let binary = std::env::var("TCM_TOOLCHAIN_MANAGER_BIN")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BINARY));

        let install_dir = std::env::var("TCM_INSTALL_DIR")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::data_local_dir().map(|dir| dir.join("tcm").join("toolchains")))
            .unwrap_or_else(|| PathBuf::from(".tcm/toolchains"));

        Self { binary, install_dir, read_buffer_bytes: DEFAULT_READ_BUFFER_BYTES }
    }

    /// Directory a given toolchain version installs into.
    pub fn environment_dir(&self, version: &tcm_core::ToolchainVersion) -> PathBuf {
        self.install_dir.join(version.as_str())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
