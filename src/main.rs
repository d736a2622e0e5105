//! ferbos-query - run one ad-hoc SQL statement against the recorder database.

use std::process::ExitCode;

use anyhow::{bail, Context};
use ferbos_query_executor::cli::Cli;
use ferbos_query_executor::dispatch::{CommandRegistry, QUERY_COMMAND};
use ferbos_query_executor::logging;
use ferbos_query_executor::manifest::Manifest;
use ferbos_query_executor::setup::setup;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Runs the query command once; returns whether it succeeded.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config_path = cli.config_path();
    let config = cli.load_config()?;

    let installed = match &config.logging.file {
        Some(path) => logging::init_file_logging(path, &config.logging.level),
        None => logging::init_stderr_logging(&config.logging.level),
    };
    info!("Loaded config from: {}", config_path.display());
    debug!("Log subscriber installed: {installed}");

    let manifest = Manifest::load()?;
    debug!("{} v{}", manifest.name, manifest.version);

    let host = config.host.to_host_context();
    let mut registry = CommandRegistry::new();
    if !setup(&host, &mut registry) {
        bail!("Integration setup failed");
    }

    let payload = cli.to_payload()?;
    let result = registry.dispatch(QUERY_COMMAND, &host, &payload).await;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .context("Failed to serialize result")?;
    println!("{output}");

    Ok(result["success"] == serde_json::Value::Bool(true))
}
