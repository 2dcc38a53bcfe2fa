// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{FsError, ProcessError, SandboxError, SandboxResult, StageError};

#[test]
fn test_stage_error_display() {
    let err: SandboxError = StageError::Failed {
        stage: "build Launcher (win64-vs2013)".to_string(),
        exit_code: 1,
    }
    .into();
    insta::assert_snapshot!(
        err.to_string(),
        @"stage error: stage 'build Launcher (win64-vs2013)' failed with exit code 1"
    );
}

#[test]
fn test_process_error_display() {
    let err = ProcessError::ExecutableNotFound {
        name: "tundra2".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"executable not found: 'tundra2'");
}

#[test]
fn test_fs_error_not_found_is_classified() {
    let err = FsError::io(
        Path::new("External/missing.dll"),
        std::io::Error::from(std::io::ErrorKind::NotFound),
    );
    assert!(matches!(err, FsError::NotFound(_)));

    let err = FsError::io(
        Path::new("Release"),
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    );
    assert!(matches!(err, FsError::IoError { .. }));
}

#[test]
fn test_sandbox_error_size() {
    // Box<str> variants are 16 bytes (fat pointer), plus discriminant
    let size = std::mem::size_of::<SandboxError>();
    assert!(size <= 24, "SandboxError is {size} bytes, expected <= 24");
}

#[test]
fn test_sandbox_result_size() {
    let size = std::mem::size_of::<SandboxResult<()>>();
    assert!(size <= 24, "SandboxResult<()> is {size} bytes, expected <= 24");
}
