// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the content and version header actions.

use clap::Args;
use std::path::PathBuf;

use crate::tools::content::ContentMode;

/// Arguments for the `assets` action.
#[derive(Debug, Clone, Default, Args)]
pub struct AssetsArgs {
    /// Starts the content builder as a detached build server instead of
    /// building once.
    #[arg(long)]
    pub server: bool,

    /// Uses the content builder binary already in Binaries without
    /// rebuilding it first.
    #[arg(long = "skip-builder-build")]
    pub skip_builder_build: bool,
}

impl AssetsArgs {
    #[must_use]
    pub const fn mode(&self) -> ContentMode {
        if self.server {
            ContentMode::Server
        } else {
            ContentMode::OneShot
        }
    }
}

/// Arguments for the `version-header` action.
#[derive(Debug, Clone, Args)]
pub struct VersionHeaderArgs {
    /// Header file to write.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}
