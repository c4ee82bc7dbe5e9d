// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `ddcci-bridge`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ddcci-bridge",
    version,
    about = "Forward monitor-control operations to the ddcci backend executable.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `$XDG_CONFIG_HOME/ddcci-bridge/config.toml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DDCCI_BRIDGE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Relay backend stdout to the diagnostic sink even if the config file
    /// leaves `enable_logging` off.
    #[arg(long)]
    pub enable_logging: bool,

    #[command(subcommand)]
    pub command: BridgeCommand,
}

/// Backend operations exposed on the CLI.
///
/// Argument grammar mirrors the backend's own CLI; tokens are forwarded
/// verbatim and validated by the backend, not here.
#[derive(Debug, Clone, Subcommand)]
pub enum BridgeCommand {
    /// Write a value to a monitor property.
    Set {
        /// Target monitor adapter.
        adapter: String,
        /// Monitor identification (`detect` key).
        id: String,
        /// Monitor property.
        property: String,
        /// New value.
        value: String,
    },
    /// Detect connected monitors.
    Detect {
        /// Target monitor adapters.
        #[arg(required = true)]
        adapters: Vec<String>,
    },
    /// Print the backend version.
    Version,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
