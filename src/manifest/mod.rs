// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared-library dependency manifest.
//!
//! ```text
//! External/shared_libraries.txt
//!   [32]                 -> following files go to Win32/
//!   fmod/fmod.dll
//!   [64]                 -> following files go to Win64/
//!   fmod/fmod64.dll
//! ```
//!
//! Lines are trimmed and blank lines ignored. Each file line is relative to
//! the external dependency root and lands in the platform folder under its
//! own file name. A file line before the first section marker has no
//! destination and is skipped with a warning.


use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::platform::PlatformTarget;
use crate::error::{FsError, Result};
use crate::layout::OutputLayout;
use crate::utility::fs::copy::copy_file_preserving;
use crate::utility::fs::ensure_dir;

/// One file to copy into a platform folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyManifestEntry {
    /// Platform section the line appeared in.
    pub section: PlatformTarget,
    /// Path relative to the external dependency root.
    pub relative_path: PathBuf,
}

/// Parsed manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyManifest {
    entries: Vec<DependencyManifestEntry>,
    orphans: Vec<usize>,
}

impl DependencyManifest {
    /// Parses manifest text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut manifest = Self::default();
        let mut section = None;

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(platform) = PlatformTarget::from_manifest_marker(line) {
                section = Some(platform);
                continue;
            }
            match section {
                Some(section) => manifest.entries.push(DependencyManifestEntry {
                    section,
                    relative_path: PathBuf::from(line),
                }),
                None => {
                    warn!(line = index + 1, entry = %line, "manifest entry before any section, skipped");
                    manifest.orphans.push(index + 1);
                }
            }
        }

        manifest
    }

    /// Reads and parses a manifest file. Returns `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns a `FsError` if the file exists but cannot be read.
    pub async fn load(path: &Path) -> Result<Option<Self>> {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => Ok(Some(Self::parse(&text))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FsError::io(path, e).into()),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[DependencyManifestEntry] {
        &self.entries
    }

    /// 1-based line numbers of file lines that had no section.
    #[must_use]
    pub fn orphan_lines(&self) -> &[usize] {
        &self.orphans
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Copies every manifest entry from `external` into its platform folder of `layout`.
///
/// A missing manifest is not an error: nothing is copied and `0` is returned.
/// Otherwise returns the number of files copied.
///
/// # Errors
///
/// Returns a `FsError` if the manifest cannot be read or any copy fails.
pub async fn copy_dependencies(
    manifest_path: &Path,
    external: &Path,
    layout: &OutputLayout,
) -> Result<usize> {
    let Some(manifest) = DependencyManifest::load(manifest_path).await? else {
        debug!(manifest = %manifest_path.display(), "no dependency manifest, skipping");
        return Ok(0);
    };

    for entry in manifest.entries() {
        let src = external.join(&entry.relative_path);
        let dest = layout.platform_dir(entry.section);
        ensure_dir(&dest).await?;
        let written = copy_file_preserving(&src, &dest).await?;
        debug!(
            platform = %entry.section,
            from = %src.display(),
            to = %written.display(),
            "copied dependency"
        );
    }

    let count = manifest.entries().len();
    if count > 0 {
        info!(count, base = %layout.base().display(), "copied shared libraries");
    }
    Ok(count)
}
