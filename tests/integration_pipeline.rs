// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end pipeline tests with real processes.
//!
//! The build tool is a shell script that records its arguments and writes
//! fake binaries; those binaries record their own runs. Unix only.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use sandbox_build::cli::assets::AssetsArgs;
use sandbox_build::cmd::assets::run_assets_command;
use sandbox_build::config::Config;
use sandbox_build::error::StageError;
use sandbox_build::git::FixedRevision;
use sandbox_build::pipeline::{ReleaseDescriptor, ReleaseOrchestrator, ReleaseState};
use sandbox_build::tools::SystemExecutor;
use tempfile::TempDir;

const FAKE_TUNDRA: &str = r#"#!/bin/sh
echo "$*" >> build.log
if [ "$1" = "-l" ]; then shift; fi
case "$2" in
  win64-*) folder=Win64 ;;
  *) folder=Win32 ;;
esac
mkdir -p "Binaries/$folder"
out="Binaries/$folder/$1-$3"
cat > "$out" <<'EOS'
#!/bin/sh
name=$(basename "$0")
echo "$name $*" >> run.log
if [ -f "fail-$name" ]; then exit 3; fi
if [ "$1" = "--source" ]; then cp -R "$2/." "$4/"; fi
exit 0
EOS
chmod +x "$out"
"#;

fn workspace() -> (TempDir, Config) {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();

    let tool = root.join("tundra2.sh");
    std::fs::write(&tool, FAKE_TUNDRA).unwrap();
    std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

    let content = root.join("Content");
    std::fs::create_dir_all(content.join("maps")).unwrap();
    std::fs::write(content.join("maps").join("arena.map"), "arena").unwrap();

    let external = root.join("External");
    std::fs::create_dir_all(&external).unwrap();
    std::fs::write(external.join("physics64.so"), "physics").unwrap();
    std::fs::write(external.join("shared_libraries.txt"), "[64]\nphysics64.so\n").unwrap();

    let config = Config::parse(&format!(
        "[tools]\nbuild = {:?}\nexe_suffix = \"\"\n[paths]\nroot = {:?}\n",
        tool.display().to_string(),
        root.display().to_string()
    ))
    .unwrap();
    (temp, config)
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn release_with_real_processes() {
    let (temp, config) = workspace();
    let revision = FixedRevision::new("cafe123");
    let mut orchestrator = ReleaseOrchestrator::new(&config, &SystemExecutor, &revision);

    let descriptor = orchestrator.run().await.unwrap();

    assert_eq!(orchestrator.state(), &ReleaseState::Finalized);
    assert_eq!(
        read_lines(&temp.path().join("build.log")),
        [
            "-l Launcher win64-vs2013 release",
            "Builder win64-vs2013 release",
            "-l Launcher win32-vs2013 release",
            "Builder win32-vs2013 release",
            "Test_Foundation win64-vs2013 release",
            "Test_Foundation win32-vs2013 release",
        ]
    );

    let runs = read_lines(&temp.path().join("run.log"));
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0], "Test_Foundation-release ");
    assert_eq!(runs[1], "Test_Foundation-release ");
    assert!(runs[2].starts_with("Builder-release --source "));

    let dir = &descriptor.target_path;
    assert!(dir.join("Win64").join("Sandbox").is_file());
    assert!(dir.join("Win32").join("Builder").is_file());
    assert!(dir.join("Win64").join("physics64.so").is_file());
    assert!(!dir.join("Win32").join("physics64.so").exists());
    assert_eq!(
        std::fs::read_to_string(dir.join("Content").join("maps").join("arena.map")).unwrap(),
        "arena"
    );

    let written: ReleaseDescriptor =
        serde_json::from_str(&std::fs::read_to_string(dir.join("release.json")).unwrap()).unwrap();
    assert_eq!(written, descriptor);
}

#[tokio::test]
async fn release_rolls_back_on_failing_test_binary() {
    let (temp, config) = workspace();
    std::fs::write(temp.path().join("fail-Test_Foundation-release"), "").unwrap();
    let revision = FixedRevision::new("cafe123");
    let mut orchestrator = ReleaseOrchestrator::new(&config, &SystemExecutor, &revision);

    let err = orchestrator.run().await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<StageError>(),
        Some(StageError::Failed { exit_code: 3, .. })
    ));
    assert_eq!(
        orchestrator.state(),
        &ReleaseState::RolledBack {
            failed_stage: "test".to_string()
        }
    );
    assert!(!temp.path().join("Release").join("Sandbox-cafe123").exists());
    assert_eq!(read_lines(&temp.path().join("run.log")).len(), 1);
}

#[tokio::test]
async fn assets_builds_content_into_binaries() {
    let (temp, config) = workspace();

    run_assets_command(&AssetsArgs::default(), &config, &SystemExecutor)
        .await
        .unwrap();

    assert_eq!(
        read_lines(&temp.path().join("build.log")),
        ["Builder win64-vs2013 release"]
    );
    let binaries = temp.path().join("Binaries");
    assert!(binaries.join("Win64").join("physics64.so").is_file());
    assert!(binaries.join("Content").join("maps").join("arena.map").is_file());
}
