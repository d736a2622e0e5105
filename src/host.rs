//! Host environment handle.
//!
//! The host platform owns the configuration directory; everything this crate
//! reads from disk is resolved relative to it.

use std::path::{Path, PathBuf};

/// Integration domain, also the prefix of every registered command.
pub const DOMAIN: &str = "ferbos_query_executor";

/// File name of the recorder database inside the host config directory.
pub const DATABASE_FILENAME: &str = "home-assistant_v2.db";

/// Explicit host context passed to setup and to every command call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    config_dir: PathBuf,
}

impl HostContext {
    /// Creates a host context rooted at `config_dir`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// The host configuration directory.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Resolves a path inside the host configuration directory.
    pub fn path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.config_dir.join(name)
    }

    /// Location of the recorder database file.
    pub fn database_path(&self) -> PathBuf {
        self.path(DATABASE_FILENAME)
    }
}
