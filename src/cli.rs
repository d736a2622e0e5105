//! Command-line argument parsing.
//!
//! Uses clap to run one query command from the shell.

use crate::config::Config;
use crate::db::Value;
use crate::error::{QueryExecutorError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Run an ad-hoc SQL statement against the recorder database.
#[derive(Parser, Debug)]
#[command(name = "ferbos-query")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SQL statement to execute
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Positional bind parameters as a JSON array (e.g., '["light.kitchen", 3]')
    #[arg(long, value_name = "JSON")]
    pub params: Option<String>,

    /// Host configuration directory containing home-assistant_v2.db
    /// [default: config file, then $FERBOS_CONFIG_DIR, then .]
    #[arg(short = 'd', long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Config file path
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Loads the config file and resolves the host config directory.
    ///
    /// Precedence: --config-dir, then `[host] config_dir` from the file, then
    /// `FERBOS_CONFIG_DIR`.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_from_file(&self.config_path())?;
        if let Some(dir) = &self.config_dir {
            config.host.config_dir = Some(dir.clone());
        }
        config.host.apply_env_defaults();
        Ok(config)
    }

    /// Parses --params into bind values.
    pub fn parse_params(&self) -> Result<Vec<Value>> {
        let Some(raw) = &self.params else {
            return Ok(Vec::new());
        };

        let parsed: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| QueryExecutorError::invalid(format!("Invalid --params JSON: {e}")))?;

        parsed
            .as_array()
            .ok_or_else(|| QueryExecutorError::invalid("--params must be a JSON array"))?
            .iter()
            .map(|v| {
                Value::from_json(v).ok_or_else(|| {
                    QueryExecutorError::invalid("--params must contain only scalar values")
                })
            })
            .collect()
    }

    /// Builds the command payload from the query and parameters.
    pub fn to_payload(&self) -> Result<serde_json::Value> {
        let params: Vec<serde_json::Value> = self
            .parse_params()?
            .iter()
            .map(|v| serde_json::to_value(v).unwrap_or(serde_json::Value::Null))
            .collect();

        let mut payload = serde_json::Map::new();
        if let Some(query) = &self.query {
            payload.insert("query".to_string(), query.clone().into());
        }
        if !params.is_empty() {
            payload.insert("params".to_string(), params.into());
        }
        Ok(payload.into())
    }
}
