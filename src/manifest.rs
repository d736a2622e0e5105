//! Integration packaging metadata.
//!
//! `manifest.json` and `hacs.json` live at the repository root and are
//! embedded at compile time so they can be validated alongside the code.

use serde::Deserialize;

use crate::error::{QueryExecutorError, Result};
use crate::host::DOMAIN;

const MANIFEST_JSON: &str = include_str!("../manifest.json");
const HACS_JSON: &str = include_str!("../hacs.json");

/// Integration manifest read by the host platform.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub domain: String,
    pub name: String,
    pub version: String,
    pub codeowners: Vec<String>,
    #[serde(default)]
    pub config_flow: bool,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub iot_class: Option<String>,
}

impl Manifest {
    /// Parses and validates the embedded manifest.
    pub fn load() -> Result<Self> {
        Self::parse(MANIFEST_JSON)
    }

    fn parse(content: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(content)
            .map_err(|e| QueryExecutorError::config(format!("Invalid manifest.json: {e}")))?;

        if manifest.domain != DOMAIN {
            return Err(QueryExecutorError::config(format!(
                "manifest.json domain '{}' does not match '{DOMAIN}'",
                manifest.domain
            )));
        }
        Ok(manifest)
    }
}

/// Community store metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct HacsInfo {
    pub name: String,
    pub domains: Vec<String>,
}

impl HacsInfo {
    /// Parses and validates the embedded `hacs.json`.
    pub fn load() -> Result<Self> {
        Self::parse(HACS_JSON)
    }

    fn parse(content: &str) -> Result<Self> {
        let info: Self = serde_json::from_str(content)
            .map_err(|e| QueryExecutorError::config(format!("Invalid hacs.json: {e}")))?;

        if !info.domains.iter().any(|d| d == DOMAIN) {
            return Err(QueryExecutorError::config(format!(
                "hacs.json does not list domain '{DOMAIN}'"
            )));
        }
        Ok(info)
    }
}
