// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release orchestration.
//!
//! ```text
//! prepare     revision -> <prefix>-<rev>, remove stale dir, create releases root
//!   |
//! stage       Win32/ Win64/ Content/, shared libraries, version header
//! build       for platform in [64, 32]: programs (clean as configured)
//!             for platform in [64, 32]: test targets (incremental)
//! test        test binaries, 64 then 32
//! package     Binaries/<folder>/<target>-<variant> -> <release>/<folder>/<public name>
//! content     content builder, one-shot, into <release>/Content
//! finalize    release.json
//!   |
//! any failure after prepare: delete <release>, RolledBack { failed_stage }
//! ```
//!
//! Stages run strictly one after the other. The orchestrator is the only
//! component that creates or deletes the release directory.

pub mod state;


use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::core::platform::PlatformTarget;
use crate::error::{FsError, Result};
use crate::git::RevisionSource;
use crate::layout::OutputLayout;
use crate::manifest::copy_dependencies;
use crate::tools::build::{BuildInvoker, BuildStepSpec};
use crate::tools::content::{ContentBuilder, ContentMode, ContentRun};
use crate::tools::test_runner::TestRunner;
use crate::tools::{Executor, StageOutcome};
use crate::utility::fs::copy::copy_file_preserving;
use crate::utility::fs::{ensure_dir, remove_dir_if_exists};
use crate::version::{render_header, write_atomic};

pub use state::ReleaseState;

/// File written into a finished release describing it.
pub const DESCRIPTOR_FILE: &str = "release.json";

/// Identity of one release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDescriptor {
    /// `<prefix>-<revision>`
    pub release_name: String,
    /// Directory the release is assembled in.
    pub target_path: PathBuf,
    /// Short revision the release was built from.
    pub created_at_revision: String,
}

impl ReleaseDescriptor {
    #[must_use]
    pub fn new(prefix: &str, revision: &str, releases_root: &Path) -> Self {
        let release_name = format!("{prefix}-{revision}");
        Self {
            target_path: releases_root.join(&release_name),
            release_name,
            created_at_revision: revision.to_string(),
        }
    }
}

/// Drives a release through every stage.
pub struct ReleaseOrchestrator<'a> {
    config: &'a Config,
    executor: &'a dyn Executor,
    revision: &'a dyn RevisionSource,
    state: ReleaseState,
    outcomes: Vec<StageOutcome>,
}

impl<'a> ReleaseOrchestrator<'a> {
    #[must_use]
    pub const fn new(
        config: &'a Config,
        executor: &'a dyn Executor,
        revision: &'a dyn RevisionSource,
    ) -> Self {
        Self {
            config,
            executor,
            revision,
            state: ReleaseState::Initialized,
            outcomes: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ReleaseState {
        &self.state
    }

    /// Outcomes of every external command run so far, in order.
    #[must_use]
    pub fn outcomes(&self) -> &[StageOutcome] {
        &self.outcomes
    }

    /// Runs the whole pipeline.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing stage. If the release directory
    /// was already created it has been removed and the state is `RolledBack`.
    pub async fn run(&mut self) -> Result<ReleaseDescriptor> {
        let descriptor = self.prepare().await?;
        info!(release = %descriptor.release_name, path = %descriptor.target_path.display(), "building release");

        match self.drive(&descriptor).await {
            Ok(()) => {
                info!(release = %descriptor.release_name, "release built");
                Ok(descriptor)
            }
            Err(err) => {
                self.roll_back(&descriptor, &err).await;
                Err(err)
            }
        }
    }

    /// Names the release and clears any previous directory of the same name.
    async fn prepare(&self) -> Result<ReleaseDescriptor> {
        let releases = self.config.paths.releases()?;
        ensure_dir(releases).await?;

        let revision = self
            .revision
            .short_revision()
            .context("failed to determine the release revision")?;
        let descriptor = ReleaseDescriptor::new(&self.config.release.prefix, &revision, releases);

        if remove_dir_if_exists(&descriptor.target_path).await? {
            warn!(path = %descriptor.target_path.display(), "removed previous release directory");
        }
        Ok(descriptor)
    }

    async fn drive(&mut self, descriptor: &ReleaseDescriptor) -> Result<()> {
        let layout = OutputLayout::from_config(&descriptor.target_path, self.config);

        self.stage(&layout, descriptor).await?;
        self.advance();
        self.build().await?;
        self.advance();
        self.test().await?;
        self.advance();
        self.package(&layout).await?;
        self.advance();
        self.build_content(&layout).await?;
        self.advance();
        self.finalize(descriptor).await?;
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        if let Some(next) = self.state.next() {
            debug!(from = %self.state, to = %next, "release state");
            self.state = next;
        }
    }

    fn record(&mut self, outcome: StageOutcome) -> Result<()> {
        self.outcomes.push(outcome.clone());
        outcome.into_result().map(|_| ())
    }

    async fn stage(&self, layout: &OutputLayout, descriptor: &ReleaseDescriptor) -> Result<()> {
        layout.stage().await?;
        copy_dependencies(
            self.config.paths.manifest()?,
            self.config.paths.external()?,
            layout,
        )
        .await?;

        if let Some(header) = &self.config.version.header {
            write_atomic(header, &render_header(&descriptor.created_at_revision))?;
            info!(header = %header.display(), revision = %descriptor.created_at_revision, "version header written");
        }
        Ok(())
    }

    async fn build(&mut self) -> Result<()> {
        let release = &self.config.release;
        let mut steps = Vec::new();
        for platform in PlatformTarget::BUILD_ORDER {
            for program in &release.programs {
                steps.push(
                    BuildStepSpec::new(&program.target, platform, release.variant)
                        .clean(program.clean),
                );
            }
        }
        for platform in PlatformTarget::BUILD_ORDER {
            for test in &release.tests {
                steps.push(BuildStepSpec::new(test, platform, release.variant));
            }
        }

        let invoker = BuildInvoker::new(self.executor, self.config);
        for step in &steps {
            let outcome = invoker.build(step).await?;
            self.record(outcome)?;
        }
        Ok(())
    }

    async fn test(&mut self) -> Result<()> {
        let outcomes = TestRunner::new(self.executor, self.config).run_all().await?;
        for outcome in outcomes {
            self.record(outcome)?;
        }
        Ok(())
    }

    async fn package(&self, layout: &OutputLayout) -> Result<()> {
        for platform in PlatformTarget::BUILD_ORDER {
            for program in &self.config.release.programs {
                let src = self.config.built_binary(platform, &program.target)?;
                let dst = layout.platform_dir(platform).join(format!(
                    "{}{}",
                    program.public_name, self.config.tools.exe_suffix
                ));
                copy_file_preserving(&src, &dst).await?;
                debug!(from = %src.display(), to = %dst.display(), "packaged");
            }
        }
        Ok(())
    }

    async fn build_content(&mut self, layout: &OutputLayout) -> Result<()> {
        let builder = ContentBuilder::from_config(self.executor, self.config)?;
        let run = builder
            .run(
                self.config.paths.content_source()?,
                &layout.content_dir(),
                ContentMode::OneShot,
            )
            .await?;
        match run {
            ContentRun::Completed(outcome) => self.record(outcome),
            ContentRun::Detached => Ok(()),
        }
    }

    async fn finalize(&self, descriptor: &ReleaseDescriptor) -> Result<()> {
        let path = descriptor.target_path.join(DESCRIPTOR_FILE);
        let json = serde_json::to_string_pretty(descriptor)?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| FsError::io(&path, e))?;
        Ok(())
    }

    /// Deletes the partial release and moves to `RolledBack`.
    ///
    /// Removal is best effort: a failure to delete is logged, never raised.
    async fn roll_back(&mut self, descriptor: &ReleaseDescriptor, err: &anyhow::Error) {
        let failed_stage = self.state.pending_stage().unwrap_or("unknown").to_string();
        error!(stage = %failed_stage, error = %format!("{err:#}"), "release failed, rolling back");

        match remove_dir_if_exists(&descriptor.target_path).await {
            Ok(_) => info!(path = %descriptor.target_path.display(), "partial release removed"),
            Err(e) => error!(path = %descriptor.target_path.display(), error = %e, "failed to remove partial release"),
        }

        self.state = ReleaseState::RolledBack { failed_stage };
    }
}
