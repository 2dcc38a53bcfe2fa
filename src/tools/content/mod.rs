// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content builder invocation.
//!
//! ```text
//! <builder> --source <dir> --target <dir> [--server]
//!
//! OneShot: execute, wait, exit code -> StageOutcome
//! Server:  spawn detached, return immediately (never waited on)
//! ```


use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;
use crate::error::Result;

use super::{Executor, Invocation, StageOutcome, run_stage};

/// How the content builder is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Build once and wait for the result.
    #[default]
    OneShot,
    /// Start a long-running build service and detach from it.
    Server,
}

/// What happened to a content builder run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRun {
    Completed(StageOutcome),
    Detached,
}

/// Runs the content builder binary.
pub struct ContentBuilder<'a> {
    executor: &'a dyn Executor,
    program: PathBuf,
    cwd: Option<PathBuf>,
}

impl<'a> ContentBuilder<'a> {
    /// Content builder at an explicit path.
    #[must_use]
    pub fn new(executor: &'a dyn Executor, program: impl Into<PathBuf>) -> Self {
        Self {
            executor,
            program: program.into(),
            cwd: None,
        }
    }

    /// Content builder built into the 64-bit binaries folder.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured paths were never resolved.
    pub fn from_config(executor: &'a dyn Executor, config: &Config) -> Result<Self> {
        let mut builder = Self::new(executor, config.content_builder_binary()?);
        builder.cwd = config.paths.root.clone();
        Ok(builder)
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command line for a run.
    #[must_use]
    pub fn invocation(&self, source: &Path, target: &Path, mode: ContentMode) -> Invocation {
        let mut invocation = Invocation::new(&self.program).args([
            "--source".to_string(),
            source.display().to_string(),
            "--target".to_string(),
            target.display().to_string(),
        ]);
        if mode == ContentMode::Server {
            invocation = invocation.arg("--server");
        }
        match &self.cwd {
            Some(cwd) => invocation.cwd(cwd),
            None => invocation,
        }
    }

    /// Runs the content builder over `source`, writing into `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the builder cannot be started. A one-shot build
    /// that exits non-zero is reported through `ContentRun::Completed`.
    pub async fn run(&self, source: &Path, target: &Path, mode: ContentMode) -> Result<ContentRun> {
        let invocation = self.invocation(source, target, mode);
        match mode {
            ContentMode::OneShot => {
                let outcome = run_stage(self.executor, "content build", &invocation).await?;
                Ok(ContentRun::Completed(outcome))
            }
            ContentMode::Server => {
                self.executor.spawn_detached(&invocation)?;
                info!(cmd = %invocation.command_line(), "content build server started");
                Ok(ContentRun::Detached)
            }
        }
    }
}
