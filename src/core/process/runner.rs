// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//!        run()                   spawn_detached()
//!          |                            |
//!          v                            v
//!   tokio Command            std Command, own group
//!   stdin null, inherit      stdin null, stdio inherit
//!          |                            |
//!          v                            v
//!       spawn()                      spawn()
//!   NotFound -> ExecutableNotFound      |
//!   other    -> SpawnFailed         drop Child
//!          |                      (never waited on)
//!          v
//!    wait --> exit code (-1 when killed by a signal)
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::ProcessBuilder;
use crate::error::{ProcessError, Result};

impl ProcessBuilder {
    /// Returns the display name for this process.
    pub(super) fn display_name(&self) -> String {
        self.program().file_stem().map_or_else(
            || "process".to_string(),
            |s| s.to_string_lossy().into_owned(),
        )
    }

    /// Returns the full command line as a string (for logging).
    #[must_use]
    pub fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Classifies an I/O error returned by `spawn()`.
    fn spawn_error(&self, cmd_line: String, source: std::io::Error) -> ProcessError {
        if source.kind() == std::io::ErrorKind::NotFound {
            ProcessError::ExecutableNotFound {
                name: self.program().display().to_string(),
            }
        } else {
            ProcessError::SpawnFailed {
                command: cmd_line,
                source,
            }
        }
    }

    /// Spawns the process and waits for it to exit.
    ///
    /// A non-zero exit code is returned as `Ok`; callers decide what it means.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable cannot be found or spawned, or if
    /// waiting on the child fails.
    pub async fn run(self) -> Result<i32> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut child = self
            .build_command()
            .spawn()
            .map_err(|e| self.spawn_error(cmd_line.clone(), e))?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let status = child.wait().await.map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line,
            source,
        })?;
        let exit_code = status.code().unwrap_or(-1);

        trace!(process = %name, exit_code, "completed");
        Ok(exit_code)
    }

    /// Spawns the process detached from this one and returns immediately.
    ///
    /// The child gets its own process group (Unix) or a detached console
    /// (Windows) so it outlives the caller and ignores the caller's Ctrl+C.
    /// No handle is kept: the exit status is never observed.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process cannot be spawned.
    pub fn spawn_detached(self) -> Result<()> {
        let name = self.display_name();
        let cmd_line = self.command_line();
        debug!(cmd = %cmd_line, "exec detached");

        let mut command = std::process::Command::new(self.program());
        command
            .args(self.args_slice())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt as _;
            command.process_group(0);
        }

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt as _;
            use windows::Win32::System::Threading::{CREATE_NEW_PROCESS_GROUP, DETACHED_PROCESS};
            command.creation_flags(DETACHED_PROCESS.0 | CREATE_NEW_PROCESS_GROUP.0);
        }

        let child = command
            .spawn()
            .map_err(|e| self.spawn_error(cmd_line, e))?;

        debug!(process = %name, pid = child.id(), "detached");
        drop(child);
        Ok(())
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        command
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        command
    }
}
