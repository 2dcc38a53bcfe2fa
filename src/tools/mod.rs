// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External tool invocation.
//!
//! ```text
//! BuildInvoker  --+
//! TestRunner    --+--> Invocation --> Executor --> exit code
//! ContentBuilder--+                     |
//!                                       +-- SystemExecutor (ProcessBuilder)
//!                                       +-- RecordingExecutor (tests)
//! ```
//!
//! Every blocking invocation yields a `StageOutcome`; a non-zero exit code is a
//! failed outcome, not an error. Errors are reserved for commands that could
//! not be started at all.

pub mod build;
pub mod content;
pub mod test_runner;

#[cfg(test)]
pub(crate) mod test_utils;

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use serde::Serialize;
use tracing::{error, info};

use crate::core::process::builder::ProcessBuilder;
use crate::error::{Result, StageError};

/// A fully specified external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl Invocation {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Process builder for this invocation.
    #[must_use]
    pub fn to_process(&self) -> ProcessBuilder {
        self.with_program(ProcessBuilder::new(&self.program))
    }

    /// Process builder with a bare program name resolved through PATH.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if a bare name is not on PATH.
    pub fn resolve(&self) -> Result<ProcessBuilder> {
        let bare = self.program.is_relative() && self.program.components().count() == 1;
        if !bare {
            return Ok(self.to_process());
        }
        let builder = ProcessBuilder::which(&self.program.to_string_lossy())?;
        Ok(self.with_program(builder))
    }

    fn with_program(&self, builder: ProcessBuilder) -> ProcessBuilder {
        let builder = builder.args(&self.args);
        match &self.cwd {
            Some(cwd) => builder.cwd(cwd),
            None => builder,
        }
    }

    /// Command line for logging.
    #[must_use]
    pub fn command_line(&self) -> String {
        self.to_process().command_line()
    }
}

/// Result of one blocking stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageOutcome {
    pub stage_name: String,
    pub exit_code: i32,
    pub succeeded: bool,
}

impl StageOutcome {
    #[must_use]
    pub fn new(stage_name: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stage_name: stage_name.into(),
            exit_code,
            succeeded: exit_code == 0,
        }
    }

    /// Converts a failed outcome into a `StageError`.
    ///
    /// # Errors
    ///
    /// Returns `StageError::Failed` if the stage did not succeed.
    pub fn into_result(self) -> Result<Self> {
        if self.succeeded {
            Ok(self)
        } else {
            Err(StageError::Failed {
                stage: self.stage_name,
                exit_code: self.exit_code,
            }
            .into())
        }
    }
}

/// Runs external commands on behalf of the pipeline.
pub trait Executor: Send + Sync {
    /// Runs a command to completion and returns its exit code.
    ///
    /// A non-zero exit code is returned as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the command cannot be started.
    fn execute<'a>(&'a self, invocation: &'a Invocation) -> BoxFuture<'a, Result<i32>>;

    /// Starts a command without waiting for it. No handle is kept.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the command cannot be started.
    fn spawn_detached(&self, invocation: &Invocation) -> Result<()>;
}

/// Executor that spawns real processes with inherited console output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn execute<'a>(&'a self, invocation: &'a Invocation) -> BoxFuture<'a, Result<i32>> {
        Box::pin(async move { invocation.resolve()?.run().await })
    }

    fn spawn_detached(&self, invocation: &Invocation) -> Result<()> {
        invocation.resolve()?.spawn_detached()
    }
}

/// Runs an invocation through an executor and wraps the exit code as a `StageOutcome`.
///
/// # Errors
///
/// Returns an error only if the command cannot be started.
pub async fn run_stage(
    executor: &dyn Executor,
    stage_name: impl Into<String>,
    invocation: &Invocation,
) -> Result<StageOutcome> {
    let stage_name = stage_name.into();
    info!(stage = %stage_name, cmd = %invocation.command_line(), "running");
    let exit_code = executor.execute(invocation).await?;
    let outcome = StageOutcome::new(stage_name, exit_code);
    if !outcome.succeeded {
        error!(stage = %outcome.stage_name, exit_code, "stage failed");
    }
    Ok(outcome)
}
