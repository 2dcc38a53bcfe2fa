// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, SandboxResult};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Copies a file, keeping its permission bits and modification time.
///
/// If `dst` is an existing directory the file is copied into it under its
/// own file name. Returns the path that was written.
///
/// # Example
/// ```no_run
/// use sandbox_build::utility::fs::copy::copy_file_preserving;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_file_preserving(Path::new("External/fmod/fmod.dll"), Path::new("Binaries/Win64")).await?;
/// # Ok(())
/// # }
/// ```
/// # Errors
///
/// Returns a `FsError` if the source is missing or any I/O operation fails.
pub async fn copy_file_preserving(src: &Path, dst: &Path) -> SandboxResult<PathBuf> {
    let target = if fs::metadata(dst).await.is_ok_and(|m| m.is_dir()) {
        let name = src
            .file_name()
            .ok_or_else(|| FsError::NotFound(src.display().to_string()))?;
        dst.join(name)
    } else {
        dst.to_path_buf()
    };

    let metadata = fs::metadata(src).await.map_err(|e| FsError::io(src, e))?;
    fs::copy(src, &target)
        .await
        .map_err(|e| FsError::io(&target, e))?;

    if let Ok(modified) = metadata.modified() {
        let path = target.clone();
        // std-only API, kept off the async workers
        tokio::task::spawn_blocking(move || open_for_attributes(&path)?.set_modified(modified))
            .await
            .map_err(std::io::Error::other)
            .and_then(|set| set)
            .map_err(|e| FsError::io(&target, e))?;
    }

    Ok(target)
}

/// Opens a file so its timestamps can be changed, even when it is read-only.
#[cfg(windows)]
fn open_for_attributes(path: &Path) -> std::io::Result<std::fs::File> {
    use std::os::windows::fs::OpenOptionsExt as _;
    const FILE_WRITE_ATTRIBUTES: u32 = 0x100;
    std::fs::OpenOptions::new()
        .access_mode(FILE_WRITE_ATTRIBUTES)
        .open(path)
}

/// Opens a file so its timestamps can be changed, even when it is read-only.
#[cfg(not(windows))]
fn open_for_attributes(path: &Path) -> std::io::Result<std::fs::File> {
    std::fs::File::open(path)
}
