// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{BuildInvoker, BuildStepSpec};
use crate::config::Config;
use crate::config::types::BuildVariant;
use crate::core::platform::PlatformTarget;
use crate::tools::test_utils::RecordingExecutor;

fn config() -> Config {
    Config::parse("[paths]\nroot = \"/work/engine\"\n").unwrap()
}

#[test]
fn test_clean_build_command_line() {
    let executor = RecordingExecutor::succeeding();
    let config = config();
    let invoker = BuildInvoker::new(&executor, &config);

    let step = BuildStepSpec::new("Launcher", PlatformTarget::Arch64, BuildVariant::Release).clean(true);
    insta::assert_snapshot!(
        invoker.invocation(&step).command_line(),
        @"tundra2 -l Launcher win64-vs2013 release"
    );
}

#[test]
fn test_incremental_build_command_line() {
    let executor = RecordingExecutor::succeeding();
    let config = config();
    let invoker = BuildInvoker::new(&executor, &config);

    let step = BuildStepSpec::new("Builder", PlatformTarget::Arch32, BuildVariant::Debug);
    let invocation = invoker.invocation(&step);
    assert_eq!(invocation.arguments(), ["Builder", "win32-vs2013", "debug"]);
    assert_eq!(
        invocation.working_dir().map(|p| p.to_string_lossy().replace('\\', "/")),
        Some("/work/engine".to_string())
    );
}

#[test]
fn test_stage_name() {
    let step = BuildStepSpec::new("Test_Foundation", PlatformTarget::Arch32, BuildVariant::Release);
    assert_eq!(step.stage_name(), "build Test_Foundation (arch32)");
}

#[tokio::test]
async fn test_build_reports_exit_code() {
    let executor = RecordingExecutor::failing_on("Launcher", 1);
    let config = config();
    let invoker = BuildInvoker::new(&executor, &config);

    let ok = invoker
        .build(&BuildStepSpec::new("Builder", PlatformTarget::Arch64, BuildVariant::Release))
        .await
        .unwrap();
    assert!(ok.succeeded);

    let failed = invoker
        .build(&BuildStepSpec::new("Launcher", PlatformTarget::Arch64, BuildVariant::Release).clean(true))
        .await
        .unwrap();
    assert!(!failed.succeeded);
    assert_eq!(failed.exit_code, 1);
    assert_eq!(failed.stage_name, "build Launcher (arch64)");
    assert_eq!(executor.executed().len(), 2);
}

#[tokio::test]
async fn test_build_tool_missing_is_an_error() {
    let executor = RecordingExecutor::with_responder(|_| None);
    let config = config();
    let invoker = BuildInvoker::new(&executor, &config);

    let result = invoker
        .build(&BuildStepSpec::new("Builder", PlatformTarget::Arch64, BuildVariant::Release))
        .await;
    assert!(result.is_err());
}
