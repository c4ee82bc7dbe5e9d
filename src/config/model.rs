// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [backend]
/// command = "ddcci-plasmoid-backend"
///
/// [diagnostics]
/// enable_logging = true
/// ```
///
/// All sections are optional and have defaults, so an absent or empty file
/// yields a usable configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Backend executable settings from `[backend]`.
    #[serde(default)]
    pub backend: BackendSection,

    /// Diagnostic output settings from `[diagnostics]`.
    #[serde(default)]
    pub diagnostics: DiagnosticsSection,
}

/// `[backend]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSection {
    /// Name of the backend executable to invoke.
    #[serde(default = "default_backend_command")]
    pub command: String,
}

fn default_backend_command() -> String {
    "ddcci-plasmoid-backend".to_string()
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            command: default_backend_command(),
        }
    }
}

/// `[diagnostics]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagnosticsSection {
    /// Relay backend stdout through the diagnostic sink.
    #[serde(default)]
    pub enable_logging: bool,
}
