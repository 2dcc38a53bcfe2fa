// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output tree staging.
//!
//! ```text
//! <base>/
//!   Win32/     platform folder (arch32)
//!   Win64/     platform folder (arch64)
//!   Content/   content folder
//! ```
//!
//! The same layout is used for the iterative `Binaries` tree and for every
//! release directory.

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::config::types::PlatformsConfig;
use crate::core::platform::PlatformTarget;
use crate::error::Result;
use crate::utility::fs::ensure_dir;

/// Directory layout rooted at a base path.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    base: PathBuf,
    platforms: PlatformsConfig,
    content_folder: String,
}

impl OutputLayout {
    #[must_use]
    pub fn new(
        base: impl Into<PathBuf>,
        platforms: PlatformsConfig,
        content_folder: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            platforms,
            content_folder: content_folder.into(),
        }
    }

    /// Layout with the platform table and content folder of a configuration.
    #[must_use]
    pub fn from_config(base: impl Into<PathBuf>, config: &Config) -> Self {
        Self::new(
            base,
            config.platforms.clone(),
            config.paths.content_folder.clone(),
        )
    }

    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    #[must_use]
    pub fn platform_dir(&self, platform: PlatformTarget) -> PathBuf {
        self.base.join(self.platforms.folder(platform))
    }

    #[must_use]
    pub fn content_dir(&self) -> PathBuf {
        self.base.join(&self.content_folder)
    }

    /// Creates the platform and content folders below the base.
    ///
    /// Existing folders and their contents are left untouched, so staging
    /// twice is the same as staging once.
    ///
    /// # Errors
    ///
    /// Returns a `FsError` if a folder cannot be created.
    pub async fn stage(&self) -> Result<()> {
        for platform in [PlatformTarget::Arch32, PlatformTarget::Arch64] {
            ensure_dir(&self.platform_dir(platform)).await?;
        }
        ensure_dir(&self.content_dir()).await?;
        debug!(base = %self.base.display(), "staged output tree");
        Ok(())
    }
}
