// src/diag/mod.rs

//! Flag-gated diagnostic output.
//!
//! The widget host owns an `enable_logging` switch; everything the backend
//! prints on stdout is relayed through here so a user can inspect it without
//! raising the tracing level. The enable flag and the sink are both injected,
//! so the unit is testable without ambient global state.

use std::fmt::Debug;
use std::sync::Arc;

pub mod mock;

/// Prefix attached to every relayed line.
const LOG_PREFIX: &str = "LOGGING: ";

/// Destination for diagnostic messages.
pub trait DiagnosticSink: Send + Sync + Debug {
    fn write_line(&self, line: &str);
}

/// Sink that prints to the console.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Reads the current value of the enable flag. Called on every log attempt,
/// so a host-owned setting can flip at runtime without re-wiring.
pub type FlagAccessor = Arc<dyn Fn() -> bool + Send + Sync>;

/// Handle for conditional diagnostic output.
#[derive(Clone)]
pub struct Diagnostics {
    enabled: FlagAccessor,
    sink: Arc<dyn DiagnosticSink>,
}

impl Diagnostics {
    pub fn new(enabled: FlagAccessor, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { enabled, sink }
    }

    /// Build a handle around a fixed flag value.
    pub fn with_flag(enabled: bool, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self::new(Arc::new(move || enabled), sink)
    }

    /// Write `message` to the sink, prefixed, if the flag is currently set.
    ///
    /// The message is relayed verbatim; trailing newlines are kept.
    pub fn log(&self, message: &str) {
        if (self.enabled)() {
            self.sink.write_line(&format!("{LOG_PREFIX}{message}"));
        }
    }
}

/// Remove a single trailing newline, if present.
///
/// Only the final `'\n'` is stripped; interior newlines and any earlier
/// trailing newlines are preserved.
pub fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}
