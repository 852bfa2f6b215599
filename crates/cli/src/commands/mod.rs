// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod env;
pub mod install;
pub mod list;
pub mod remove;
pub mod search;

use tcm_manager::Config;

#[derive(clap::Subcommand)]
pub enum Command {
    /// List installed toolchain environments
    List {
        /// Emit the raw environment records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search toolchain versions available for install
    Search {
        /// Emit the raw environment records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Install a toolchain version (e.g. v2.6.1)
    Install { version: String },
    /// Remove an installed toolchain version
    Remove { version: String },
    /// Print the environment directory of an installed version
    Env { version: String },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    let config = Config::from_env();
    tracing::debug!(
        binary = %config.binary.display(),
        install_dir = %config.install_dir.display(),
        "resolved manager config"
    );
    match command {
        Command::List { json } => list::run(&config, json).await,
        Command::Search { json } => search::run(&config, json).await,
        Command::Install { version } => install::run(&config, &version).await,
        Command::Remove { version } => remove::run(&config, &version).await,
        Command::Env { version } => env::run(&config, &version),
    }
}
