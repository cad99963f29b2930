//! User-level configuration loaded from `<config dir>/git-remote-url/config.toml`.
//!
//! The file is optional; if it does not exist all fields fall back to their
//! `Default` values. Command-line flags and environment variables override
//! anything set here.

use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// `[output]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// `[logging]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level name, e.g. `debug`.
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub json: Option<bool>,
}

/// Top-level user configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("git-remote-url").join("config.toml"))
}

/// Load the user configuration from [`user_config_path`].
///
/// Returns `Ok(UserConfig::default())` when no config directory is known or
/// the file does not exist.
pub fn load_user_config() -> Result<UserConfig, UserConfigError> {
    match user_config_path() {
        Some(path) => load_user_config_from(&path),
        None => {
            debug!("Could not determine user config directory; using defaults");
            Ok(UserConfig::default())
        }
    }
}

/// Load the user configuration from an explicit path.
///
/// A missing file yields the defaults.
pub fn load_user_config_from(path: &Path) -> Result<UserConfig, UserConfigError> {
    if !path.exists() {
        debug!("User config not found at {}; using defaults", path.display());
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: UserConfig = toml::from_str(&content)?;
    debug!("Loaded user config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "user_config_tests.rs"]
mod tests;
