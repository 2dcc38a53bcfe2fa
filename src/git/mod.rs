// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source-control revision lookup.
//!
//! ```text
//! RevisionSource (trait)
//!   |-- GixRevision    discover repo -> HEAD id -> abbreviated hex
//!   `-- FixedRevision  revision known up front
//! ```
//!
//! The abbreviated id follows `core.abbrev` the same way
//! `git rev-parse --short HEAD` does.


use std::path::{Path, PathBuf};

use crate::error::{Result, VcsError};

/// Something that can name the revision a release is built from.
pub trait RevisionSource {
    /// Returns the short revision id of the checked-out commit.
    ///
    /// # Errors
    ///
    /// Returns a `VcsError` if the revision cannot be determined.
    fn short_revision(&self) -> Result<String>;
}

/// Reads HEAD of the repository containing a path, using gix.
#[derive(Debug, Clone)]
pub struct GixRevision {
    repo: PathBuf,
}

impl GixRevision {
    #[must_use]
    pub fn new(repo: impl AsRef<Path>) -> Self {
        Self {
            repo: repo.as_ref().to_path_buf(),
        }
    }
}

impl RevisionSource for GixRevision {
    fn short_revision(&self) -> Result<String> {
        let path = self.repo.display().to_string();
        let repo = gix::discover(&self.repo).map_err(|_| VcsError::RepoNotFound {
            path: path.clone(),
        })?;
        let head = repo.head_id().map_err(|e| VcsError::Revision {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let short = head.shorten().map_err(|e| VcsError::Revision {
            path,
            message: e.to_string(),
        })?;
        Ok(short.to_string())
    }
}

/// A revision supplied by the caller instead of read from a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRevision(String);

impl FixedRevision {
    #[must_use]
    pub fn new(revision: impl Into<String>) -> Self {
        Self(revision.into())
    }
}

impl RevisionSource for FixedRevision {
    fn short_revision(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
