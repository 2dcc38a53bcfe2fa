// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/
//!   Binaries/        (binaries: build tool output, iterative tree)
//!     Win32/ Win64/ Content/
//!   Release/         (releases)
//!     Sandbox-<rev>/
//!   Content/         (content_source)
//!   External/        (external)
//!     shared_libraries.txt  (manifest)
//! ```
//!
//! All paths are optional and resolved from `root` if not set. `root` itself
//! is made absolute, relative values are joined onto it and `manifest` is
//! joined onto `external`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Workspace layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Workspace root (default: current directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Build tool output tree (default: root/Binaries).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binaries: Option<PathBuf>,
    /// Parent directory of packaged releases (default: root/Release).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub releases: Option<PathBuf>,
    /// Content source tree fed to the content builder (default: root/Content).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_source: Option<PathBuf>,
    /// External dependency root (default: root/External).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<PathBuf>,
    /// Shared-library manifest (default: `external/shared_libraries.txt`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
    /// Name of the content folder inside every staged tree.
    pub content_folder: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: None,
            binaries: None,
            releases: None,
            content_source: None,
            external: None,
            manifest: None,
            content_folder: "Content".to_string(),
        }
    }
}

impl PathsConfig {
    /// Resolve all relative paths against root and fill in defaults.
    pub fn resolve(&mut self) {
        let root = self.root.clone().unwrap_or_else(|| PathBuf::from("."));
        let root = std::path::absolute(&root).unwrap_or(root);

        let resolve = |path: &mut Option<PathBuf>, parent: &Path, default: &str| match path {
            Some(p) if p.is_relative() => {
                *path = Some(parent.join(p.clone()));
            }
            None => {
                *path = Some(parent.join(default));
            }
            _ => {}
        };

        resolve(&mut self.binaries, &root, "Binaries");
        resolve(&mut self.releases, &root, "Release");
        resolve(&mut self.content_source, &root, "Content");
        resolve(&mut self.external, &root, "External");

        let external = self
            .external
            .clone()
            .unwrap_or_else(|| root.join("External"));
        resolve(&mut self.manifest, &external, "shared_libraries.txt");

        self.root = Some(root);
    }

    /// Returns the workspace root.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if the paths were never resolved.
    pub fn root(&self) -> Result<&Path> {
        Self::required(self.root.as_deref(), "root")
    }

    /// Returns the build tool output tree.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if the paths were never resolved.
    pub fn binaries(&self) -> Result<&Path> {
        Self::required(self.binaries.as_deref(), "binaries")
    }

    /// Returns the parent directory of packaged releases.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if the paths were never resolved.
    pub fn releases(&self) -> Result<&Path> {
        Self::required(self.releases.as_deref(), "releases")
    }

    /// Returns the content source tree.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if the paths were never resolved.
    pub fn content_source(&self) -> Result<&Path> {
        Self::required(self.content_source.as_deref(), "content_source")
    }

    /// Returns the external dependency root.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if the paths were never resolved.
    pub fn external(&self) -> Result<&Path> {
        Self::required(self.external.as_deref(), "external")
    }

    /// Returns the shared-library manifest path.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if the paths were never resolved.
    pub fn manifest(&self) -> Result<&Path> {
        Self::required(self.manifest.as_deref(), "manifest")
    }

    fn required<'a>(path: Option<&'a Path>, key: &str) -> Result<&'a Path> {
        path.ok_or_else(|| {
            ConfigError::MissingKey {
                section: "paths".to_string(),
                key: key.to_string(),
            }
            .into()
        })
    }
}
