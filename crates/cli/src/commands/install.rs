// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tcm install` — install a toolchain with live progress.

use crate::output::render_events;
use tcm_core::ToolchainVersion;
use tcm_manager::Config;
use tokio::sync::mpsc;

pub async fn run(config: &Config, version: &str) -> anyhow::Result<()> {
    let version = ToolchainVersion::new(version);

    let (tx, rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render_events(rx));

    let result = tcm_manager::install(config, &version, tx).await;
    renderer.await?;
    result?;

    println!("installed {} -> {}", version, config.environment_dir(&version).display());
    Ok(())
}
