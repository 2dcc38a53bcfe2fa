// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for sandbox-build using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! sbuild [global options] <action>
//! setup
//! assets [--server] [--skip-builder-build]
//! release
//! version-header <FILE>
//! options
//! inis
//! ```
//!
//! No action, or an action that does not exist, prints the usage and
//! succeeds.

pub mod assets;
pub mod global;


use crate::cli::assets::{AssetsArgs, VersionHeaderArgs};
use crate::cli::global::GlobalOptions;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

/// Sandbox engine release tooling.
#[derive(Debug, Parser)]
#[command(
    name = "sbuild",
    author,
    version,
    about = "Sandbox engine release tooling",
    long_about = "sandbox-build Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Stages the binary tree, builds content and packages\n\
                  commit-stamped releases of the Sandbox engine.",
    after_help = "CONFIG FILES:\n\n\
                  sbuild reads `sbuild.toml` from the current directory if it\n\
                  exists. Additional files can be given with --ini and are\n\
                  loaded after it, later files overriding earlier ones.\n\
                  SBUILD_<SECTION>__<KEY> environment variables override files.\n\
                  Use --no-default-inis to skip `sbuild.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Action to perform
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available actions.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Creates Binaries/{Win32,Win64,Content} and copies shared libraries.
    Setup,

    /// Builds the content builder and runs it against Binaries/Content.
    Assets(AssetsArgs),

    /// Builds, tests and packages a release stamped with the current revision.
    Release,

    /// Writes the generated engine version header.
    #[command(name = "version-header")]
    VersionHeader(VersionHeaderArgs),

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files in use.
    Inis,
}

/// Parses command-line arguments from an iterator.
///
/// Returns `Ok(None)` when the action is not recognized; callers print the
/// usage in that case.
///
/// # Errors
///
/// Returns a `clap::Error` for any other parse failure, including
/// help/version requests.
pub fn try_parse_from<I, T>(iter: I) -> Result<Option<Cli>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(iter) {
        Ok(cli) => Ok(Some(cli)),
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => Ok(None),
        Err(e) => Err(e),
    }
}

/// Parses the process arguments. See [`try_parse_from`].
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid.
pub fn try_parse() -> Result<Option<Cli>, clap::Error> {
    try_parse_from(std::env::args_os())
}

/// Usage text printed when no valid action is given.
#[must_use]
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
