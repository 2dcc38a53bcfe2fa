// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            SandboxError (~24 bytes)
//!                     |
//!   +------+------+---+---+------+------+
//!   |      |      |       |      |      |
//!   v      v      v       v      v      v
//!  Cfg   Proc   Stage    Fs     Vcs   Io/Other
//!  Box   Box    Box      Box    Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config  ParseError, MissingKey, InvalidValue
//!   Process ExecutableNotFound, SpawnFailed
//!   Stage   Failed (stage + exit code)
//!   Fs      NotFound, IoError
//!   Vcs     RepoNotFound, Revision
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SandboxError`].
pub type SandboxResult<T> = std::result::Result<T, SandboxError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// A pipeline stage reported failure.
    #[error("stage error: {0}")]
    Stage(#[from] Box<StageError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Source control error.
    #[error("vcs error: {0}")]
    Vcs(#[from] Box<VcsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SandboxError {
                fn from(err: $error) -> Self {
                    SandboxError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ProcessError => Process,
    StageError => Stage,
    FsError => Fs,
    VcsError => Vcs,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found on disk or in PATH.
    #[error("executable not found: '{name}'")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Stage Errors ---

/// Release pipeline stage failures.
#[derive(Debug, Error)]
pub enum StageError {
    /// The stage ran to completion but reported failure.
    #[error("stage '{stage}' failed with exit code {exit_code}")]
    Failed { stage: String, exit_code: i32 },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Wraps an I/O error with the path it happened on.
    #[must_use]
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.display().to_string())
        } else {
            Self::IoError {
                path: path.display().to_string(),
                source,
            }
        }
    }
}

// --- Source Control Errors ---

/// Source-control query errors.
#[derive(Debug, Error)]
pub enum VcsError {
    /// No repository contains the given path.
    #[error("repository not found: {path}")]
    RepoNotFound { path: String },

    /// The revision could not be resolved or abbreviated.
    #[error("failed to resolve revision in {path}: {message}")]
    Revision { path: String, message: String },
}

#[cfg(test)]
mod tests;
