// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot spawn-and-wait queries against the external binary.

use crate::config::Config;
use crate::error::ManagerError;
use tcm_core::Environment;
use tokio::process::Command;

/// Environments currently installed under the configured install dir.
pub async fn list_installed(config: &Config) -> Result<Vec<Environment>, ManagerError> {
    let mut environments = run_json_query(config, "list").await?;
    environments.sort_by(|a, b| a.version.cmp(&b.version));
    Ok(environments)
}

/// Toolchain versions available for install (index lookup is the
/// binary's concern; we only parse what it reports).
pub async fn search_available(config: &Config) -> Result<Vec<Environment>, ManagerError> {
    let mut environments = run_json_query(config, "search").await?;
    environments.sort_by(|a, b| b.version.cmp(&a.version));
    Ok(environments)
}

/// Version string of the external binary itself.
pub async fn binary_version(config: &Config) -> Result<String, ManagerError> {
    let output = Command::new(&config.binary)
        .arg("--version")
        .stdin(std::process::Stdio::null())
        .output()
        .await
        .map_err(|source| ManagerError::Spawn {
            binary: config.binary.display().to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(command_failed("--version", &output));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run `<binary> <subcommand> --json --install-dir <dir>` and parse the
/// single JSON document it prints.
async fn run_json_query(
    config: &Config,
    subcommand: &str,
) -> Result<Vec<Environment>, ManagerError> {
    tracing::debug!(
        binary = %config.binary.display(),
        subcommand,
        install_dir = %config.install_dir.display(),
        "running toolchain query"
    );

    let output = Command::new(&config.binary)
        .arg(subcommand)
        .arg("--json")
        .arg("--install-dir")
        .arg(&config.install_dir)
        .stdin(std::process::Stdio::null())
        .output()
        .await
        .map_err(|source| ManagerError::Spawn {
            binary: config.binary.display().to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(command_failed(subcommand, &output));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).map_err(|e| ManagerError::MalformedOutput {
        command: subcommand.to_string(),
        reason: e.to_string(),
    })
}

fn command_failed(command: &str, output: &std::process::Output) -> ManagerError {
    ManagerError::CommandFailed {
        command: command.to_string(),
        status: output.status,
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
