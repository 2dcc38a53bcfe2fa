// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release and version header commands.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::git::RevisionSource;
use crate::pipeline::{ReleaseDescriptor, ReleaseOrchestrator};
use crate::tools::Executor;
use crate::version::VersionStamper;

/// Main handler for the release command.
///
/// Prints the release directory on success.
///
/// # Errors
///
/// Returns the error of the failing stage; the partial release has already
/// been removed.
pub async fn run_release_command(
    config: &Config,
    executor: &dyn Executor,
    revision: &dyn RevisionSource,
) -> Result<ReleaseDescriptor> {
    let mut orchestrator = ReleaseOrchestrator::new(config, executor, revision);
    let descriptor = orchestrator.run().await?;
    println!("{}", descriptor.target_path.display());
    Ok(descriptor)
}

/// Main handler for the version-header command.
///
/// # Errors
///
/// Returns an error if the revision cannot be determined or the header
/// cannot be written.
pub fn run_version_header_command(file: &Path, revision: &dyn RevisionSource) -> Result<String> {
    VersionStamper::new(revision).stamp(file)
}
