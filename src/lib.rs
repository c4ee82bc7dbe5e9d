// src/lib.rs

pub mod bridge;
pub mod cli;
pub mod config;
pub mod diag;
pub mod errors;
pub mod exec;
pub mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::warn;

use crate::bridge::BackendBridge;
use crate::cli::{BridgeCommand, CliArgs};
use crate::config::{default_config_path, load_or_default};
use crate::diag::{ConsoleSink, Diagnostics};
use crate::errors::Result;
use crate::exec::ProcessExecutor;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - diagnostics (flag from config, optionally forced on via the CLI)
/// - the process executor
/// - the backend bridge
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = args
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    let cfg = load_or_default(&config_path)?;

    let enable_logging = args.enable_logging || cfg.diagnostics.enable_logging;
    let diag = Diagnostics::with_flag(enable_logging, Arc::new(ConsoleSink));

    let bridge = BackendBridge::new(ProcessExecutor::new(), cfg.backend.command.clone(), diag);

    match args.command {
        BridgeCommand::Set {
            adapter,
            id,
            property,
            value,
        } => {
            let output = bridge.set(&adapter, &id, &property, &value).await?;
            if !output.success() {
                warn!(exit_code = output.exit_code, "backend `set` reported failure");
            }
        }
        BridgeCommand::Detect { adapters } => {
            let adapters: Vec<&str> = adapters.iter().map(String::as_str).collect();
            let output = bridge.detect(&adapters).await?;
            print!("{}", output.stdout);
        }
        BridgeCommand::Version => {
            let output = bridge.version().await?;
            print!("{}", output.stdout);
        }
    }

    Ok(())
}
