// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tcm remove` — remove an installed toolchain.

use crate::output::render_events;
use tcm_core::ToolchainVersion;
use tcm_manager::Config;
use tokio::sync::mpsc;

pub async fn run(config: &Config, version: &str) -> anyhow::Result<()> {
    let version = ToolchainVersion::new(version);

    let (tx, rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render_events(rx));

    let result = tcm_manager::remove(config, &version, tx).await;
    renderer.await?;
    result?;

    println!("removed {}", version);
    Ok(())
}
