// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Setup command: prepares the development binary tree.

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::layout::OutputLayout;
use crate::manifest::copy_dependencies;

/// Stages `Binaries/{Win32,Win64,Content}` and copies the shared libraries
/// listed in the dependency manifest.
///
/// Returns the binaries layout so callers can keep using it.
///
/// # Errors
///
/// Returns an error if a folder cannot be created or a listed library
/// cannot be copied.
pub async fn run_setup_command(config: &Config) -> Result<OutputLayout> {
    let layout = OutputLayout::from_config(config.paths.binaries()?, config);
    layout.stage().await?;
    let copied = copy_dependencies(
        config.paths.manifest()?,
        config.paths.external()?,
        &layout,
    )
    .await?;
    info!(base = %layout.base().display(), libraries = copied, "binary tree ready");
    Ok(layout)
}
