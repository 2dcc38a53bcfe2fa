// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for sandbox-build.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ToolsConfig, PlatformsConfig, PathsConfig,
//!         ReleaseConfig, VersionConfig
//! ReleaseConfig.programs: [{ target, public_name, clean }]
//! ```
//!
//! # Build Variant
//!
//! ```text
//! BuildVariant: Release (default) | Debug   -> "release" / "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::platform::PlatformTarget;
use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Named build configuration passed to the build tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildVariant {
    #[default]
    Release,
    Debug,
}

impl BuildVariant {
    /// Returns the identifier the build tool expects.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Debug => "debug",
        }
    }
}

impl std::fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BuildVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "release" => Ok(Self::Release),
            "debug" => Ok(Self::Debug),
            _ => Err(ConfigError::InvalidValue {
                section: "release".to_string(),
                key: "variant".to_string(),
                message: format!("expected 'release' or 'debug', got '{s}'"),
            }),
        }
    }
}

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file (no file logging when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// External tool locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Build tool executable (bare name resolved via PATH, or a path).
    pub build: PathBuf,
    /// Build target whose binary is the content builder.
    pub content_builder: String,
    /// Suffix of built executables.
    pub exe_suffix: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            build: PathBuf::from("tundra2"),
            content_builder: "Builder".to_string(),
            exe_suffix: std::env::consts::EXE_SUFFIX.to_string(),
        }
    }
}

/// Output folder and build-tool identifier of one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformConfig {
    /// Subfolder name inside staged trees.
    pub folder: String,
    /// Platform identifier passed to the build tool.
    pub id: String,
}

/// The fixed platform table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformsConfig {
    pub arch32: PlatformConfig,
    pub arch64: PlatformConfig,
}

impl Default for PlatformsConfig {
    fn default() -> Self {
        Self {
            arch32: PlatformConfig {
                folder: "Win32".to_string(),
                id: "win32-vs2013".to_string(),
            },
            arch64: PlatformConfig {
                folder: "Win64".to_string(),
                id: "win64-vs2013".to_string(),
            },
        }
    }
}

impl PlatformsConfig {
    /// Looks up the entry for a platform.
    #[must_use]
    pub const fn get(&self, platform: PlatformTarget) -> &PlatformConfig {
        match platform {
            PlatformTarget::Arch32 => &self.arch32,
            PlatformTarget::Arch64 => &self.arch64,
        }
    }

    /// Returns the staged subfolder name of a platform.
    #[must_use]
    pub fn folder(&self, platform: PlatformTarget) -> &str {
        &self.get(platform).folder
    }

    /// Returns the build-tool identifier of a platform.
    #[must_use]
    pub fn id(&self, platform: PlatformTarget) -> &str {
        &self.get(platform).id
    }
}

/// A program shipped in every release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramConfig {
    /// Build target name.
    pub target: String,
    /// File stem of the program inside the release.
    pub public_name: String,
    /// Force a full rebuild instead of an incremental one.
    #[serde(default)]
    pub clean: bool,
}

/// Release packaging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    /// Release directory name prefix (`<prefix>-<revision>`).
    pub prefix: String,
    /// Build variant for every release build.
    pub variant: BuildVariant,
    /// Programs built, in order, for each platform.
    pub programs: Vec<ProgramConfig>,
    /// Test targets built and executed for each platform.
    pub tests: Vec<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            prefix: "Sandbox".to_string(),
            variant: BuildVariant::Release,
            programs: vec![
                ProgramConfig {
                    target: "Launcher".to_string(),
                    public_name: "Sandbox".to_string(),
                    clean: true,
                },
                ProgramConfig {
                    target: "Builder".to_string(),
                    public_name: "Builder".to_string(),
                    clean: false,
                },
            ],
            tests: vec!["Test_Foundation".to_string()],
        }
    }
}

/// Generated version header settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VersionConfig {
    /// Header stamped with the release revision before building.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<PathBuf>,
}
