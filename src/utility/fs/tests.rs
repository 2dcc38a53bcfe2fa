// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::copy::copy_file_preserving;
use super::{ensure_dir, remove_dir_if_exists};
use crate::error::{FsError, SandboxError};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[tokio::test]
async fn test_copy_into_directory_keeps_name_and_mtime() {
    let temp = temp_dir();
    let src = temp.path().join("fmod64.dll");
    std::fs::write(&src, b"library").unwrap();
    let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_400_000_000);
    std::fs::File::options()
        .write(true)
        .open(&src)
        .unwrap()
        .set_modified(stamp)
        .unwrap();

    let dest_dir = temp.path().join("Win64");
    std::fs::create_dir(&dest_dir).unwrap();

    let written = copy_file_preserving(&src, &dest_dir).await.unwrap();
    assert_eq!(written, dest_dir.join("fmod64.dll"));
    assert_eq!(std::fs::read(&written).unwrap(), b"library");
    assert_eq!(
        std::fs::metadata(&written).unwrap().modified().unwrap(),
        stamp
    );
}

#[tokio::test]
async fn test_copy_to_explicit_file_name() {
    let temp = temp_dir();
    let src = temp.path().join("Launcher-release");
    std::fs::write(&src, b"binary").unwrap();
    let dst = temp.path().join("Sandbox");

    let written = copy_file_preserving(&src, &dst).await.unwrap();
    assert_eq!(written, dst);
    assert_eq!(std::fs::read(&dst).unwrap(), b"binary");
}

#[cfg(unix)]
#[tokio::test]
async fn test_copy_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt as _;

    let temp = temp_dir();
    let src = temp.path().join("tool");
    std::fs::write(&src, b"#!/bin/sh\n").unwrap();
    std::fs::set_permissions(&src, std::fs::Permissions::from_mode(0o750)).unwrap();

    let written = copy_file_preserving(&src, &temp.path().join("copy"))
        .await
        .unwrap();
    let mode = std::fs::metadata(&written).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o750);
}

#[cfg(unix)]
#[tokio::test]
async fn test_copy_read_only_source() {
    use std::os::unix::fs::PermissionsExt as _;

    let temp = temp_dir();
    let src = temp.path().join("readonly.dll");
    std::fs::write(&src, b"ro").unwrap();
    std::fs::set_permissions(&src, std::fs::Permissions::from_mode(0o444)).unwrap();

    let written = copy_file_preserving(&src, &temp.path().join("out.dll"))
        .await
        .unwrap();
    assert_eq!(std::fs::read(&written).unwrap(), b"ro");
}

#[tokio::test(flavor = "current_thread")]
async fn test_concurrent_copies_keep_mtime_on_single_thread() {
    let temp = temp_dir();
    let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_500_000_000);
    let out = temp.path().join("Win32");
    std::fs::create_dir(&out).unwrap();

    let sources: Vec<_> = (0..4)
        .map(|i| {
            let src = temp.path().join(format!("lib{i}.dll"));
            std::fs::write(&src, format!("lib {i}")).unwrap();
            std::fs::File::options()
                .write(true)
                .open(&src)
                .unwrap()
                .set_modified(stamp)
                .unwrap();
            src
        })
        .collect();

    let copies = sources.iter().map(|src| copy_file_preserving(src, &out));
    let written = futures_util::future::join_all(copies).await;

    for path in written {
        let path = path.unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), stamp);
    }
}

#[tokio::test]
async fn test_copy_missing_source() {
    let temp = temp_dir();
    let err = copy_file_preserving(&temp.path().join("absent.dll"), temp.path())
        .await
        .unwrap_err();
    assert!(matches!(err, SandboxError::Fs(ref e) if matches!(**e, FsError::NotFound(_))));
}

#[tokio::test]
async fn test_ensure_dir_is_idempotent() {
    let temp = temp_dir();
    let dir = temp.path().join("Binaries").join("Win32");
    ensure_dir(&dir).await.unwrap();
    std::fs::write(dir.join("keep.txt"), b"x").unwrap();
    ensure_dir(&dir).await.unwrap();
    assert!(dir.join("keep.txt").exists());
}

#[tokio::test]
async fn test_remove_dir_if_exists() {
    let temp = temp_dir();
    let dir = temp.path().join("Sandbox-abc1234");
    std::fs::create_dir_all(dir.join("Win64")).unwrap();
    std::fs::write(dir.join("Win64").join("Sandbox"), b"x").unwrap();

    assert!(remove_dir_if_exists(&dir).await.unwrap());
    assert!(!dir.exists());
    assert!(!remove_dir_if_exists(&dir).await.unwrap());
}
