//! Ad-hoc query execution against the recorder database.
//!
//! Validates the request, locates the database file through the host context,
//! runs the statement on a connection scoped to this one call, and turns every
//! outcome into a `QueryResponse`.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::db::{SqlEngine, SqliteEngine, StatementResult};
use crate::error::{QueryExecutorError, Result};
use crate::host::HostContext;
use crate::query::{QueryRequest, QueryResponse};

/// Runs one SQL statement per call against the host's database file.
///
/// Holds no connection state: each call opens its own connection and
/// releases it before returning.
#[derive(Clone)]
pub struct QueryExecutor {
    engine: Arc<dyn SqlEngine>,
}

impl QueryExecutor {
    /// Creates an executor backed by the given engine.
    pub fn new(engine: Arc<dyn SqlEngine>) -> Self {
        Self { engine }
    }

    /// Creates an executor backed by the sqlx SQLite engine.
    pub fn sqlite() -> Self {
        Self::new(Arc::new(SqliteEngine::new()))
    }

    /// Executes a request, never failing: errors come back as
    /// `QueryResponse::Failure`.
    pub async fn execute(&self, host: &HostContext, request: &QueryRequest) -> QueryResponse {
        let response: QueryResponse = self.run(host, request).await.into();
        if let Some(err) = response.error() {
            warn!("Query failed ({}): {}", err.code(), err.message());
        }
        response
    }

    async fn run(&self, host: &HostContext, request: &QueryRequest) -> Result<StatementResult> {
        let sql = request
            .sql()
            .ok_or_else(|| QueryExecutorError::invalid("Missing query"))?;

        let db_path = host.database_path();
        if !tokio::fs::try_exists(&db_path).await.unwrap_or(false) {
            return Err(QueryExecutorError::not_found(format!(
                "Database not found: {}",
                db_path.display()
            )));
        }

        let start = Instant::now();
        let mut conn = self.engine.open(&db_path).await?;
        let outcome = conn.execute(sql, &request.params).await;

        // Release on every path; a close failure never masks the outcome.
        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection: {}", e.message());
        }

        let result = outcome?;
        debug!(
            "Executed query in {:?} ({})",
            start.elapsed(),
            if result.is_read() { "rows" } else { "write" }
        );
        Ok(result)
    }
}
