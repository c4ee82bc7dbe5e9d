// src/diag/mock.rs

use std::sync::{Arc, Mutex};

use super::DiagnosticSink;

/// In-memory sink that records every line for inspection in tests.
///
/// Clones share the same underlying buffer, so a test can keep one handle
/// and hand another to [`super::Diagnostics`].
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
