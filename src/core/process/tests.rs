// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::ProcessBuilder;
use crate::error::ProcessError;

#[test]
fn test_command_line_quotes_spaced_args() {
    let builder = ProcessBuilder::new("Binaries/Win64/Builder-release.exe")
        .args(["--source", "Content", "--target", "Release/Sandbox abc/Content"]);
    insta::assert_snapshot!(
        builder.command_line(),
        @r#"Binaries/Win64/Builder-release.exe --source Content --target "Release/Sandbox abc/Content""#
    );
}

#[test]
fn test_executable_lookup_not_found() {
    let program = "nonexistent_program_12345";

    let err = ProcessBuilder::which(program).unwrap_err();
    assert!(
        matches!(err, ProcessError::ExecutableNotFound { ref name } if name == program),
        "unexpected error: {err}"
    );
    assert!(ProcessBuilder::find(program).is_none());
}

#[tokio::test]
async fn test_missing_program_is_classified_as_not_found() {
    let err = ProcessBuilder::new("./definitely/not/here/tool")
        .run()
        .await
        .unwrap_err();
    let process_err = err
        .downcast_ref::<ProcessError>()
        .expect("spawn failure should be a ProcessError");
    assert!(matches!(
        process_err,
        ProcessError::ExecutableNotFound { .. }
    ));
}

#[test]
fn test_spawn_detached_missing_program_fails() {
    let result = ProcessBuilder::new("./definitely/not/here/builder").spawn_detached();
    assert!(result.is_err());
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_zero_exit_code() {
    let code = ProcessBuilder::new("sh")
        .args(["-c", "exit 0"])
        .run()
        .await
        .expect("sh should run");
    assert_eq!(code, 0);
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_non_zero_exit_code_is_returned() {
    let code = ProcessBuilder::new("sh")
        .args(["-c", "exit 42"])
        .run()
        .await
        .expect("a non-zero exit is not a spawn failure");
    assert_eq!(code, 42);
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_cwd() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let code = ProcessBuilder::new("sh")
        .args(["-c", "touch marker"])
        .cwd(temp.path())
        .run()
        .await
        .expect("sh should run");

    assert_eq!(code, 0);
    assert!(temp.path().join("marker").is_file());
}

#[cfg(unix)]
#[tokio::test]
async fn test_resolved_program_runs() {
    let code = ProcessBuilder::which("sh")
        .expect("sh should be on PATH")
        .args(["-c", "exit 7"])
        .run()
        .await
        .expect("sh should run");
    assert_eq!(code, 7);
}

#[cfg(unix)]
#[test]
fn test_spawn_detached_does_not_wait() {
    let start = std::time::Instant::now();
    ProcessBuilder::new("sh")
        .args(["-c", "sleep 2"])
        .spawn_detached()
        .expect("sh should spawn");
    assert!(start.elapsed() < std::time::Duration::from_secs(2));
}
