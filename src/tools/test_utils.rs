// sandbox-build: Sandbox engine release tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities for tool and pipeline tests.
//!
//! Provides a recording executor with scripted exit codes and a
//! log-capturing helper.

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use futures_util::future::BoxFuture;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use super::{Executor, Invocation};
use crate::error::ProcessError;

type Responder = Box<dyn Fn(&Invocation) -> Option<i32> + Send + Sync>;

/// Executor that records every invocation instead of spawning processes.
///
/// The responder maps an invocation to an exit code; `None` simulates a
/// command that cannot be started.
pub(crate) struct RecordingExecutor {
    responder: Responder,
    executed: Mutex<Vec<Invocation>>,
    detached: Mutex<Vec<Invocation>>,
}

impl RecordingExecutor {
    /// Every command succeeds.
    pub(crate) fn succeeding() -> Self {
        Self::with_responder(|_| Some(0))
    }

    pub(crate) fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&Invocation) -> Option<i32> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            executed: Mutex::new(Vec::new()),
            detached: Mutex::new(Vec::new()),
        }
    }

    /// Fails with `code` every invocation whose command line contains `needle`.
    pub(crate) fn failing_on(needle: &'static str, code: i32) -> Self {
        Self::with_responder(move |inv| {
            if inv.command_line().contains(needle) {
                Some(code)
            } else {
                Some(0)
            }
        })
    }

    pub(crate) fn executed(&self) -> Vec<Invocation> {
        lock(&self.executed).clone()
    }

    pub(crate) fn detached(&self) -> Vec<Invocation> {
        lock(&self.detached).clone()
    }

    /// Command lines of executed invocations, with `root` replaced by `<root>`.
    pub(crate) fn command_lines(&self, root: &std::path::Path) -> Vec<String> {
        let root = root.display().to_string();
        lock(&self.executed)
            .iter()
            .map(|inv| inv.command_line().replace(&root, "<root>").replace('\\', "/"))
            .collect()
    }

    fn respond(&self, invocation: &Invocation) -> Result<i32> {
        (self.responder)(invocation).ok_or_else(|| {
            ProcessError::ExecutableNotFound {
                name: invocation.program().display().to_string(),
            }
            .into()
        })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

impl Executor for RecordingExecutor {
    fn execute<'a>(&'a self, invocation: &'a Invocation) -> BoxFuture<'a, Result<i32>> {
        Box::pin(async move {
            lock(&self.executed).push(invocation.clone());
            self.respond(invocation)
        })
    }

    fn spawn_detached(&self, invocation: &Invocation) -> Result<()> {
        lock(&self.detached).push(invocation.clone());
        self.respond(invocation).map(|_| ())
    }
}

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct BufferMakeWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buffer: self.buffer.clone(),
        }
    }
}

/// Runs an async closure while capturing tracing output at INFO and above.
///
/// Returns the closure's result together with the captured log text.
pub(crate) async fn run_with_logs<F, Fut, T>(f: F) -> (T, String)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = T>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferMakeWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .finish();

    let _guard = tracing::subscriber::set_default(subscriber);
    let result = f().await;

    let logs = String::from_utf8_lossy(&lock(&buffer)).to_string();
    (result, logs)
}
