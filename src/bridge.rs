// src/bridge.rs

//! The frontend-facing bridge to the backend executable.

use tracing::debug;

use crate::diag::{Diagnostics, strip_trailing_newline};
use crate::errors::Result;
use crate::exec::{CommandOutput, ExecutionRequest, Executor};

/// Issues backend invocations through an injected [`Executor`].
///
/// Holds the backend command name and a [`Diagnostics`] handle; immutable
/// after construction. Calls are not serialized: concurrent invocations run
/// as independent processes with no ordering guarantee, queueing, timeout,
/// or cancellation.
pub struct BackendBridge<E: Executor> {
    executor: E,
    backend_command: String,
    diag: Diagnostics,
}

impl<E: Executor> BackendBridge<E> {
    pub fn new(executor: E, backend_command: impl Into<String>, diag: Diagnostics) -> Self {
        Self {
            executor,
            backend_command: backend_command.into(),
            diag,
        }
    }

    /// Write `value` to a monitor property.
    ///
    /// All four parameters are opaque tokens; the backend validates them,
    /// not the bridge. The argument order
    /// `set <adapter> <id> <property> <value>` is the backend's CLI
    /// contract.
    ///
    /// Captured stdout is relayed to the diagnostic sink. Stderr and the
    /// exit code are not inspected here; both come back to the caller in
    /// the returned [`CommandOutput`].
    pub async fn set(
        &self,
        adapter: &str,
        id: &str,
        property: &str,
        value: &str,
    ) -> Result<CommandOutput> {
        self.invoke("set", &[adapter, id, property, value]).await
    }

    /// Detect connected monitors on the given adapters.
    pub async fn detect(&self, adapters: &[&str]) -> Result<CommandOutput> {
        self.invoke("detect", adapters).await
    }

    /// Query the backend version.
    pub async fn version(&self) -> Result<CommandOutput> {
        self.invoke("version", &[]).await
    }

    fn request(&self, subcommand: &str, args: &[&str]) -> ExecutionRequest {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(subcommand.to_string());
        argv.extend(args.iter().map(|arg| arg.to_string()));
        ExecutionRequest::new(self.backend_command.clone(), argv)
    }

    async fn invoke(&self, subcommand: &str, args: &[&str]) -> Result<CommandOutput> {
        let request = self.request(subcommand, args);
        let output = self.executor.exec(request).await?;

        // The backend ends every report with a newline; strip it from the
        // trace echo for readability. The diagnostic relay below stays
        // verbatim.
        debug!(exit_code = output.exit_code, "backend exit code");
        debug!("stdout: {}", strip_trailing_newline(&output.stdout));
        debug!("stderr: {}", strip_trailing_newline(&output.stderr));

        self.diag.log(&output.stdout);

        Ok(output)
    }
}
