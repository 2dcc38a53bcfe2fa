// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::new("tundra2")
//!   .args() .cwd()
//!   .run()            --> tokio::process::Command, waits --> exit code
//!   .spawn_detached() --> std::process::Command, never waits
//! ```

pub mod builder;
mod runner;
#[cfg(test)]
mod tests;
