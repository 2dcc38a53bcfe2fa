// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async filesystem helpers.
//!
//! ```text
//! copy:  copy_file_preserving()  tokio::fs copy, then mtime restored
//! ensure_dir()                   create_dir_all, idempotent
//! remove_dir_if_exists()         recursive delete, absent is fine
//! ```

pub mod copy;

#[cfg(test)]
mod tests;

use std::path::Path;
use tokio::fs;

use crate::error::{FsError, SandboxResult};

/// Creates a directory and its parents. Existing directories are left alone.
///
/// # Errors
///
/// Returns a `FsError` if the directory cannot be created.
pub async fn ensure_dir(path: &Path) -> SandboxResult<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| FsError::io(path, e))?;
    Ok(())
}

/// Recursively removes a directory tree.
///
/// Returns `true` if something was removed, `false` if the path did not exist.
///
/// # Errors
///
/// Returns a `FsError` if the tree exists but cannot be removed.
pub async fn remove_dir_if_exists(path: &Path) -> SandboxResult<bool> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FsError::io(path, e).into()),
    }
}
