// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for sandbox-build.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. sbuild.toml (cwd, optional)
//! 3. --ini files
//! 4. SBUILD_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! Sections and keys are separated by a double underscore so that keys
//! containing `_` survive the mapping.
//!
//! ```text
//! SBUILD_TOOLS__BUILD=/opt/tundra2   → tools.build = "/opt/tundra2"
//! SBUILD_RELEASE__PREFIX=Nightly     → release.prefix = "Nightly"
//! SBUILD_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::core::platform::PlatformTarget;
use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{GlobalConfig, PlatformsConfig, ReleaseConfig, ToolsConfig, VersionConfig};

/// Name of the optional configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "sbuild.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "SBUILD";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// External tools.
    pub tools: ToolsConfig,
    /// Platform folder and identifier table.
    pub platforms: PlatformsConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
    /// Release packaging.
    pub release: ReleaseConfig,
    /// Generated version header.
    pub version: VersionConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sandbox_build::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("sbuild.toml")
    ///     .with_env_prefix("SBUILD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve all paths and validate configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if:
    /// - `release.prefix` is empty or contains a path separator.
    /// - `release.programs` is empty.
    /// - platform folders are empty, identical, or collide with the content folder.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve();
        let root = self.paths.root.clone().unwrap_or_default();
        if self.tools.build.is_relative() && self.tools.build.components().count() > 1 {
            self.tools.build = root.join(&self.tools.build);
        }
        if let Some(header) = &self.version.header
            && header.is_relative()
        {
            self.version.header = Some(root.join(header));
        }

        let prefix = self.release.prefix.trim();
        if prefix.is_empty() || prefix.contains(['/', '\\']) {
            return Err(invalid(
                "release",
                "prefix",
                format!("'{}' is not a valid directory name prefix", self.release.prefix),
            ));
        }

        if self.release.programs.is_empty() {
            return Err(invalid(
                "release",
                "programs",
                "at least one program is required".to_string(),
            ));
        }

        let mut folders = BTreeSet::new();
        folders.insert(self.paths.content_folder.as_str());
        for platform in [PlatformTarget::Arch32, PlatformTarget::Arch64] {
            let folder = self.platforms.folder(platform);
            if folder.is_empty() || !folders.insert(folder) {
                return Err(invalid(
                    "platforms",
                    &format!("{platform}.folder"),
                    format!("folder '{folder}' is empty or already in use"),
                ));
            }
        }

        Ok(())
    }

    /// Path of the build tool executable.
    #[must_use]
    pub fn build_tool(&self) -> &Path {
        &self.tools.build
    }

    /// Path of a built binary inside a platform folder:
    /// `<binaries>/<folder>/<target>-<variant><exe>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the paths were never resolved.
    pub fn built_binary(&self, platform: PlatformTarget, target: &str) -> Result<PathBuf> {
        Ok(self
            .paths
            .binaries()?
            .join(self.platforms.folder(platform))
            .join(format!(
                "{target}-{}{}",
                self.release.variant, self.tools.exe_suffix
            )))
    }

    /// Path of the content builder binary for the 64-bit platform.
    ///
    /// # Errors
    ///
    /// Returns an error if the paths were never resolved.
    pub fn content_builder_binary(&self) -> Result<PathBuf> {
        self.built_binary(PlatformTarget::Arch64, &self.tools.content_builder)
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_tools_options(&mut options);
        self.format_platform_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_release_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file".into(), fmt_path(self.global.log_file.as_deref()));
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("tools.build".into(), self.tools.build.display().to_string());
        options.insert(
            "tools.content_builder".into(),
            self.tools.content_builder.clone(),
        );
        options.insert("tools.exe_suffix".into(), self.tools.exe_suffix.clone());
    }

    fn format_platform_options(&self, options: &mut BTreeMap<String, String>) {
        for platform in [PlatformTarget::Arch32, PlatformTarget::Arch64] {
            let entry = self.platforms.get(platform);
            options.insert(format!("platforms.{platform}.folder"), entry.folder.clone());
            options.insert(format!("platforms.{platform}.id"), entry.id.clone());
        }
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("paths.root".into(), fmt_path(self.paths.root.as_deref()));
        options.insert(
            "paths.binaries".into(),
            fmt_path(self.paths.binaries.as_deref()),
        );
        options.insert(
            "paths.releases".into(),
            fmt_path(self.paths.releases.as_deref()),
        );
        options.insert(
            "paths.content_source".into(),
            fmt_path(self.paths.content_source.as_deref()),
        );
        options.insert(
            "paths.external".into(),
            fmt_path(self.paths.external.as_deref()),
        );
        options.insert(
            "paths.manifest".into(),
            fmt_path(self.paths.manifest.as_deref()),
        );
        options.insert(
            "paths.content_folder".into(),
            self.paths.content_folder.clone(),
        );
    }

    fn format_release_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("release.prefix".into(), self.release.prefix.clone());
        options.insert("release.variant".into(), self.release.variant.to_string());
        let programs = self
            .release
            .programs
            .iter()
            .map(|p| {
                let clean = if p.clean { " (clean)" } else { "" };
                format!("{}->{}{clean}", p.target, p.public_name)
            })
            .collect::<Vec<_>>()
            .join(", ");
        options.insert("release.programs".into(), programs);
        options.insert("release.tests".into(), self.release.tests.join(", "));
        options.insert(
            "version.header".into(),
            fmt_path(self.version.header.as_deref()),
        );
    }
}

fn fmt_path(path: Option<&Path>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}

fn invalid(section: &str, key: &str, message: String) -> anyhow::Error {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message,
    }
    .into()
}
