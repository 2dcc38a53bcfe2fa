// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::try_parse() --> Config --> Logging --> Command Dispatch
//!   Setup | Assets | Release | VersionHeader | Options | Inis
//! ```

use std::process::ExitCode;

use sandbox_build::cli::{self, Cli, Command};
use sandbox_build::cmd::assets::run_assets_command;
use sandbox_build::cmd::config::{run_inis_command, run_options_command};
use sandbox_build::cmd::release::{run_release_command, run_version_header_command};
use sandbox_build::cmd::setup::run_setup_command;
use sandbox_build::config::Config;
use sandbox_build::config::loader::ConfigLoader;
use sandbox_build::error::Result;
use sandbox_build::git::GixRevision;
use sandbox_build::logging::{LogConfig, LogGuard, init_logging};
use sandbox_build::tools::SystemExecutor;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match cli::try_parse() {
        Ok(Some(cli)) if cli.command.is_some() => cli,
        Ok(_) => {
            println!("{}", cli::usage());
            return ExitCode::SUCCESS;
        }
        Err(e) => e.exit(),
    };

    match dispatch_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch_command(cli: &Cli) -> Result<()> {
    let loader = cli.global.config_loader()?;

    if matches!(cli.command, Some(Command::Inis)) {
        run_inis_command(&loader.format_loaded_files());
        return Ok(());
    }

    let config = load_config(loader)?;
    let _log_guard: LogGuard = init_logging(&LogConfig::from(&config.global))?;
    let executor = SystemExecutor;

    match &cli.command {
        Some(Command::Setup) => run_setup_command(&config).await.map(|_| ()),
        Some(Command::Assets(args)) => run_assets_command(args, &config, &executor).await,
        Some(Command::Release) => {
            let revision = GixRevision::new(config.paths.root()?);
            run_release_command(&config, &executor, &revision)
                .await
                .map(|_| ())
        }
        Some(Command::VersionHeader(args)) => {
            let revision = GixRevision::new(config.paths.root()?);
            run_version_header_command(&args.file, &revision).map(|_| ())
        }
        Some(Command::Options) => {
            run_options_command(&config);
            Ok(())
        }
        Some(Command::Inis) | None => Ok(()),
    }
}

fn load_config(loader: ConfigLoader) -> Result<Config> {
    loader.build().map_err(|e| e.context("failed to load config"))
}
