// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Assets command: builds game content into the development binary tree.
//!
//! ```text
//! setup --> build content builder (arch64, incremental) --> run builder
//!                 skipped with --skip-builder-build          one-shot | server
//! ```

use crate::cli::assets::AssetsArgs;
use crate::cmd::setup::run_setup_command;
use crate::config::Config;
use crate::core::platform::PlatformTarget;
use crate::error::Result;
use crate::tools::Executor;
use crate::tools::build::{BuildInvoker, BuildStepSpec};
use crate::tools::content::{ContentBuilder, ContentRun};

/// Main handler for the assets command.
///
/// # Errors
///
/// Returns an error if staging fails, the content builder cannot be built,
/// or a one-shot content build exits non-zero.
pub async fn run_assets_command(
    args: &AssetsArgs,
    config: &Config,
    executor: &dyn Executor,
) -> Result<()> {
    let layout = run_setup_command(config).await?;

    if !args.skip_builder_build {
        let step = BuildStepSpec::new(
            &config.tools.content_builder,
            PlatformTarget::Arch64,
            config.release.variant,
        );
        BuildInvoker::new(executor, config)
            .build(&step)
            .await?
            .into_result()?;
    }

    let run = ContentBuilder::from_config(executor, config)?
        .run(
            config.paths.content_source()?,
            &layout.content_dir(),
            args.mode(),
        )
        .await?;
    if let ContentRun::Completed(outcome) = run {
        outcome.into_result()?;
    }
    Ok(())
}
