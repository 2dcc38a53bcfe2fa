// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generated engine version header.
//!
//! ```text
//! #ifndef __GENERATED_ENGINE_VERSION_H__
//! #define __GENERATED_ENGINE_VERSION_H__
//!
//! #define ENGINE_COMMIT_ID <short-revision>
//!
//! #endif // __GENERATED_ENGINE_VERSION_H__
//! ```
//!
//! The header is replaced atomically: it is written to a temporary file next
//! to the destination and renamed over it.


use std::io::Write as _;
use std::path::Path;

use anyhow::Context;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{FsError, Result};
use crate::git::RevisionSource;

/// Include guard of the generated header.
pub const HEADER_GUARD: &str = "__GENERATED_ENGINE_VERSION_H__";

/// Name of the macro holding the revision.
pub const COMMIT_MACRO: &str = "ENGINE_COMMIT_ID";

/// Renders the header text for a revision.
#[must_use]
pub fn render_header(revision: &str) -> String {
    format!(
        "#ifndef {HEADER_GUARD}\n\
         #define {HEADER_GUARD}\n\
         \n\
         #define {COMMIT_MACRO} {revision}\n\
         \n\
         #endif // {HEADER_GUARD}\n"
    )
}

/// Writes `contents` to `path`, replacing any existing file in one step.
///
/// # Errors
///
/// Returns a `FsError` if the temporary file cannot be created, written or
/// renamed over the destination.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|e| FsError::io(dir, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| FsError::io(file.path(), e))?;
    file.persist(path)
        .map_err(|e| FsError::io(path, e.error))?;
    Ok(())
}

/// Stamps version headers with the current revision.
pub struct VersionStamper<'a> {
    source: &'a dyn RevisionSource,
}

impl<'a> VersionStamper<'a> {
    #[must_use]
    pub const fn new(source: &'a dyn RevisionSource) -> Self {
        Self { source }
    }

    /// Writes the header for the current revision to `path`.
    ///
    /// Returns the revision that was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the revision cannot be determined or the file
    /// cannot be written. Nothing is written when the revision query fails.
    pub fn stamp(&self, path: &Path) -> Result<String> {
        let revision = self
            .source
            .short_revision()
            .context("failed to determine the source revision")?;
        write_atomic(path, &render_header(&revision))
            .with_context(|| format!("failed to write version header {}", path.display()))?;
        info!(revision = %revision, header = %path.display(), "version header written");
        Ok(revision)
    }
}
