// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE        ← Additional config files (can repeat)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← global.log_file override
//! --root DIR        ← paths.root override
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --ini > sbuild.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::config::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::error::{ConfigError, Result};

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, defaults to --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Workspace root containing Binaries/, Release/, Content/ and External/.
    #[arg(short = 'C', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Sets an option, such as 'release.prefix=Nightly'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables loading of sbuild.toml, only uses --ini.
    #[arg(long = "no-default-inis")]
    pub no_default_inis: bool,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` configuration overrides.
    ///
    /// `--set` entries come first so that dedicated flags win over them.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if a `--set` entry is not of the
    /// form `section.key=value`.
    pub fn to_config_overrides(&self) -> Result<Vec<(String, String)>> {
        let mut overrides = Vec::new();

        for option in &self.options {
            let parsed = option
                .split_once('=')
                .filter(|(key, _)| key.contains('.') && !key.starts_with('.') && !key.ends_with('.'));
            let Some((key, value)) = parsed else {
                return Err(ConfigError::InvalidValue {
                    section: "cli".to_string(),
                    key: "--set".to_string(),
                    message: format!("expected 'section.key=value', got '{option}'"),
                }
                .into());
            };
            overrides.push((key.trim().to_string(), value.trim().to_string()));
        }

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level".to_string(), level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level".to_string(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".to_string(), path.display().to_string()));
        }

        if let Some(ref root) = self.root {
            overrides.push(("paths.root".to_string(), root.display().to_string()));
        }

        Ok(overrides)
    }

    /// Builds the configuration loader for these options.
    ///
    /// Sources in order: `sbuild.toml` (unless `--no-default-inis`), each
    /// `--ini` file, `SBUILD_*` environment variables, then the overrides of
    /// [`Self::to_config_overrides`].
    ///
    /// # Errors
    ///
    /// Returns an error if an override is malformed.
    pub fn config_loader(&self) -> Result<ConfigLoader> {
        let mut loader = ConfigLoader::new();
        if !self.no_default_inis {
            loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
        }
        for ini_path in &self.inis {
            loader = loader.add_toml_file(ini_path);
        }
        loader = loader.with_env_prefix(ENV_PREFIX);
        for (key, value) in self.to_config_overrides()? {
            loader = loader.set(&key, value)?;
        }
        Ok(loader)
    }
}
