//! Integration setup entry points.
//!
//! Both entry points register the query command with the host's command
//! registry and report success. Calling them repeatedly is harmless: the
//! command is simply re-registered.

use std::sync::Arc;

use tracing::info;

use crate::config_flow::ConfigEntry;
use crate::dispatch::{CommandRegistry, QueryCommand, QUERY_COMMAND};
use crate::host::HostContext;
use crate::query::QueryExecutor;

/// Sets up the integration from host configuration.
pub fn setup(host: &HostContext, registry: &mut CommandRegistry) -> bool {
    setup_with_executor(host, registry, QueryExecutor::sqlite())
}

/// Sets up the integration from a config entry.
pub fn setup_entry(host: &HostContext, registry: &mut CommandRegistry, entry: &ConfigEntry) -> bool {
    info!("Setting up entry '{}' ({})", entry.title, entry.entry_id);
    setup(host, registry)
}

/// Registers the query command backed by a specific executor.
pub fn setup_with_executor(
    host: &HostContext,
    registry: &mut CommandRegistry,
    executor: QueryExecutor,
) -> bool {
    registry.register(QUERY_COMMAND, Arc::new(QueryCommand::new(executor)));
    info!(
        "Registered {} against {}",
        QUERY_COMMAND,
        host.database_path().display()
    );
    true
}
