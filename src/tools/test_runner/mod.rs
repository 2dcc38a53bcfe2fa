// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test binary execution.
//!
//! ```text
//! for platform in [Arch64, Arch32]:
//!   for test in release.tests:
//!     <binaries>/<folder>/<test>-<variant><exe>     (no arguments)
//!     non-zero -> stop, report outcome
//! ```


use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::core::platform::PlatformTarget;
use crate::error::Result;

use super::{Executor, Invocation, StageOutcome, run_stage};

/// Runs the compiled test suites.
pub struct TestRunner<'a> {
    executor: &'a dyn Executor,
    config: &'a Config,
}

impl<'a> TestRunner<'a> {
    #[must_use]
    pub const fn new(executor: &'a dyn Executor, config: &'a Config) -> Self {
        Self { executor, config }
    }

    /// Command for one test binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured paths were never resolved.
    pub fn invocation(&self, platform: PlatformTarget, test: &str) -> Result<Invocation> {
        let binary: PathBuf = self.config.built_binary(platform, test)?;
        let invocation = Invocation::new(binary);
        Ok(match &self.config.paths.root {
            Some(root) => invocation.cwd(root),
            None => invocation,
        })
    }

    /// Runs every test binary of one platform, stopping at the first failure.
    ///
    /// Returns one outcome per binary that ran; the failing one, if any, is last.
    /// No configured tests means no outcomes.
    ///
    /// # Errors
    ///
    /// Returns an error if a test binary cannot be started.
    pub async fn run_platform(&self, platform: PlatformTarget) -> Result<Vec<StageOutcome>> {
        info!(
            platform = %platform,
            folder = %self.config.platforms.folder(platform),
            tests = self.config.release.tests.len(),
            "testing"
        );
        let mut outcomes = Vec::with_capacity(self.config.release.tests.len());
        for test in &self.config.release.tests {
            let invocation = self.invocation(platform, test)?;
            let outcome =
                run_stage(self.executor, format!("test {test} ({platform})"), &invocation).await?;
            let failed = !outcome.succeeded;
            outcomes.push(outcome);
            if failed {
                break;
            }
        }
        Ok(outcomes)
    }

    /// Runs the test suites of every platform in pipeline order.
    ///
    /// Stops after the first failing binary, which is then the last outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if a test binary cannot be started.
    pub async fn run_all(&self) -> Result<Vec<StageOutcome>> {
        let mut outcomes = Vec::new();
        for platform in PlatformTarget::BUILD_ORDER {
            let platform_outcomes = self.run_platform(platform).await?;
            let failed = platform_outcomes.iter().any(|o| !o.succeeded);
            outcomes.extend(platform_outcomes);
            if failed {
                break;
            }
        }
        Ok(outcomes)
    }
}
