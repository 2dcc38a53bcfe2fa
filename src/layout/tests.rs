// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::OutputLayout;
use crate::config::Config;
use crate::core::platform::PlatformTarget;

fn list(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_stage_creates_platform_and_content_folders() {
    let temp = tempfile::tempdir().unwrap();
    let layout = OutputLayout::from_config(temp.path().join("Binaries"), &Config::default());

    layout.stage().await.unwrap();

    assert_eq!(list(layout.base()), ["Content", "Win32", "Win64"]);
    assert_eq!(
        layout.platform_dir(PlatformTarget::Arch64),
        temp.path().join("Binaries").join("Win64")
    );
    assert_eq!(layout.content_dir(), temp.path().join("Binaries").join("Content"));
}

#[tokio::test]
async fn test_stage_twice_keeps_existing_files() {
    let temp = tempfile::tempdir().unwrap();
    let layout = OutputLayout::from_config(temp.path(), &Config::default());

    layout.stage().await.unwrap();
    let marker = layout.platform_dir(PlatformTarget::Arch32).join("fmod.dll");
    std::fs::write(&marker, b"dll").unwrap();

    layout.stage().await.unwrap();

    assert_eq!(list(layout.base()), ["Content", "Win32", "Win64"]);
    assert_eq!(std::fs::read(&marker).unwrap(), b"dll");
}

#[tokio::test]
async fn test_stage_uses_configured_folders() {
    let temp = tempfile::tempdir().unwrap();
    let config = Config::parse(
        r#"
[platforms.arch32]
folder = "x86"
id = "win32-msvc"

[platforms.arch64]
folder = "x64"
id = "win64-msvc"

[paths]
content_folder = "Data"
"#,
    )
    .unwrap();
    let layout = OutputLayout::from_config(temp.path(), &config);

    layout.stage().await.unwrap();

    assert_eq!(list(layout.base()), ["Data", "x64", "x86"]);
}

#[tokio::test]
async fn test_stage_fails_when_base_is_a_file() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("Binaries");
    std::fs::write(&base, b"not a directory").unwrap();

    let layout = OutputLayout::from_config(&base, &Config::default());
    assert!(layout.stage().await.is_err());
}
