//! Configuration management.
//!
//! Handles loading configuration from TOML files and environment variables:
//! where the host configuration directory lives and how to log.

use crate::error::{QueryExecutorError, Result};
use crate::host::HostContext;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that supplies the host config directory.
pub const CONFIG_DIR_ENV: &str = "FERBOS_CONFIG_DIR";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Host platform settings.
    #[serde(default)]
    pub host: HostConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Host platform settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HostConfig {
    /// Host configuration directory containing the recorder database.
    pub config_dir: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log to this file instead of stderr.
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl HostConfig {
    /// Applies the `FERBOS_CONFIG_DIR` environment variable as a default.
    pub fn apply_env_defaults(&mut self) {
        if self.config_dir.is_none() {
            self.config_dir = std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from);
        }
    }

    /// Builds the host context, defaulting to the current directory.
    pub fn to_host_context(&self) -> HostContext {
        HostContext::new(
            self.config_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
        )
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ferbos-query-executor")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| QueryExecutorError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            QueryExecutorError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
