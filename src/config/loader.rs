// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::model::ConfigFile;
use crate::errors::{BridgeError, Result};

/// Load a configuration file from a given path.
///
/// Reads TOML, applies defaults (handled by `serde` + `Default` impls), and
/// runs basic sanity checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: ConfigFile = toml::from_str(&contents)?;
    validate(&config)?;

    Ok(config)
}

/// Load the configuration, falling back to defaults if the file is absent.
///
/// The host may never have written a config file; that is not an error. A
/// present-but-broken file still fails.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    if path.is_file() {
        info!(path = %path.display(), "reading config file");
        load_from_path(path)
    } else {
        info!(path = %path.display(), "config file unavailable, using defaults");
        Ok(ConfigFile::default())
    }
}

fn validate(config: &ConfigFile) -> Result<()> {
    if config.backend.command.trim().is_empty() {
        return Err(BridgeError::ConfigError(
            "backend.command must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Resolve the default config path.
///
/// `$XDG_CONFIG_HOME/ddcci-bridge/config.toml`, falling back to
/// `~/.config/ddcci-bridge/config.toml`.
pub fn default_config_path() -> PathBuf {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    config_dir.join("ddcci-bridge").join("config.toml")
}
