// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tcm list` — installed toolchain environments.

use crate::output::format_environment;
use tcm_manager::Config;

pub async fn run(config: &Config, json: bool) -> anyhow::Result<()> {
    let environments = tcm_manager::list_installed(config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&environments)?);
        return Ok(());
    }

    if environments.is_empty() {
        println!("no toolchains installed under {}", config.install_dir.display());
        return Ok(());
    }
    for env in &environments {
        println!("{}", format_environment(env));
    }
    Ok(())
}
