//! Database abstraction layer.
//!
//! Provides a trait-based interface over the SQL engine so the query executor
//! can run against the real recorder database or an in-memory test double.

mod mock;
mod sqlite;
mod statement;
mod types;

pub use mock::{ConnectionStats, FailingEngine, MockEngine};
pub use sqlite::SqliteEngine;
pub use types::{Row, StatementResult, Value};

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Opens connections to a file-backed SQL database.
///
/// Every call to `open` yields a fresh connection; implementations must not
/// pool or cache connections between calls.
#[async_trait]
pub trait SqlEngine: Send + Sync {
    /// Opens a connection to the database file at `path`.
    async fn open(&self, path: &Path) -> Result<Box<dyn EngineConnection>>;
}

/// A single open connection, owned by exactly one query call.
#[async_trait]
pub trait EngineConnection: Send {
    /// Executes one statement with positional bind parameters.
    ///
    /// Row-capable statements produce `StatementResult::Rows`; everything else
    /// is committed and produces `StatementResult::Write`. SQL holding more
    /// than one statement is rejected before anything runs.
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<StatementResult>;

    /// Closes the connection.
    async fn close(self: Box<Self>) -> Result<()>;
}
