// src/exec/backend.rs

//! Pluggable executor abstraction.
//!
//! The bridge talks to an [`Executor`] instead of spawning processes itself.
//! This makes it easy to swap in a fake executor in tests while keeping the
//! production process handling in one place.
//!
//! - `ProcessExecutor` is the default implementation, backed by
//!   `tokio::process::Command`.
//! - Tests can provide their own `Executor` that records requests and
//!   replies with scripted output.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::Result;

/// One backend invocation as an argument vector.
///
/// Building the request as discrete arguments means the adapter, id,
/// property, and value tokens are never re-parsed by a shell. The `Display`
/// impl joins the tokens with single spaces, which is the command-line shape
/// used in log messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub program: String,
    pub args: Vec<String>,
}

impl ExecutionRequest {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for ExecutionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished backend process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Trait abstracting how backend invocations are executed.
///
/// Production code uses [`ProcessExecutor`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait Executor: Send + Sync {
    /// Run the request to completion and capture its output.
    ///
    /// Failing to spawn the process is the only error path. A non-zero exit
    /// code is not an error; it is reported inside [`CommandOutput`].
    fn exec(
        &self,
        request: ExecutionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>>;
}

/// Real executor used in production.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for ProcessExecutor {
    fn exec(
        &self,
        request: ExecutionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>> {
        Box::pin(async move {
            info!(cmd = %request, "executing backend command");

            let output = Command::new(&request.program)
                .args(&request.args)
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true)
                .output()
                .await
                .with_context(|| format!("spawning backend process `{request}`"))?;

            let exit_code = output.status.code().unwrap_or(-1);
            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

            debug!(
                cmd = %request,
                exit_code,
                success = output.status.success(),
                "backend process exited"
            );

            Ok(CommandOutput {
                exit_code,
                stdout,
                stderr,
            })
        })
    }
}
