// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build tool invocation.
//!
//! ```text
//! <tool> [-l] <target> <platform-id> <variant>
//!         |
//!         `-- full rebuild when the step is clean
//! ```

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use crate::config::Config;
use crate::config::types::{BuildVariant, PlatformsConfig};
use crate::core::platform::PlatformTarget;
use crate::error::Result;

use super::{Executor, Invocation, StageOutcome, run_stage};

/// One build of one target for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStepSpec {
    pub target_name: String,
    pub platform: PlatformTarget,
    pub variant: BuildVariant,
    pub clean: bool,
}

impl BuildStepSpec {
    /// Incremental build step.
    #[must_use]
    pub fn new(target_name: impl Into<String>, platform: PlatformTarget, variant: BuildVariant) -> Self {
        Self {
            target_name: target_name.into(),
            platform,
            variant,
            clean: false,
        }
    }

    #[must_use]
    pub const fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    /// Name used for this step in logs and errors.
    #[must_use]
    pub fn stage_name(&self) -> String {
        format!("build {} ({})", self.target_name, self.platform)
    }
}

/// Drives the external build tool.
pub struct BuildInvoker<'a> {
    executor: &'a dyn Executor,
    tool: PathBuf,
    platforms: PlatformsConfig,
    cwd: Option<PathBuf>,
}

impl<'a> BuildInvoker<'a> {
    #[must_use]
    pub fn new(executor: &'a dyn Executor, config: &Config) -> Self {
        Self {
            executor,
            tool: config.build_tool().to_path_buf(),
            platforms: config.platforms.clone(),
            cwd: config.paths.root.clone(),
        }
    }

    /// Command line for a build step.
    #[must_use]
    pub fn invocation(&self, step: &BuildStepSpec) -> Invocation {
        let mut invocation = Invocation::new(&self.tool);
        if step.clean {
            invocation = invocation.arg("-l");
        }
        invocation = invocation.args([
            step.target_name.clone(),
            self.platforms.id(step.platform).to_string(),
            step.variant.to_string(),
        ]);
        match &self.cwd {
            Some(cwd) => invocation.cwd(cwd),
            None => invocation,
        }
    }

    /// Runs one build step to completion.
    ///
    /// # Errors
    ///
    /// Returns an error only if the build tool cannot be started; a failing
    /// build is reported through the outcome.
    pub async fn build(&self, step: &BuildStepSpec) -> Result<StageOutcome> {
        run_stage(self.executor, step.stage_name(), &self.invocation(step)).await
    }
}
