// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tcm env` — print an installed version's environment directory.

use tcm_core::ToolchainVersion;
use tcm_manager::Config;

pub fn run(config: &Config, version: &str) -> anyhow::Result<()> {
    let version = ToolchainVersion::new(version);
    let dir = config.environment_dir(&version);

    if !dir.is_dir() {
        anyhow::bail!("{} is not installed (no environment at {})", version, dir.display());
    }
    println!("{}", dir.display());
    Ok(())
}
