//! Command handlers.
//!
//! Each handler takes the host context and the raw payload and returns the
//! JSON result object the dispatcher relays to the caller.

use async_trait::async_trait;
use tracing::debug;

use crate::host::HostContext;
use crate::query::{QueryExecutor, QueryRequest, QueryResponse};

/// A named command's implementation.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Handles one call. Must always produce a result object.
    async fn handle(&self, host: &HostContext, payload: &serde_json::Value) -> serde_json::Value;
}

/// Adapts `QueryExecutor` to the command interface.
#[derive(Clone)]
pub struct QueryCommand {
    executor: QueryExecutor,
}

impl QueryCommand {
    /// Creates a query command backed by `executor`.
    pub fn new(executor: QueryExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl CommandHandler for QueryCommand {
    async fn handle(&self, host: &HostContext, payload: &serde_json::Value) -> serde_json::Value {
        let response = match QueryRequest::from_payload(payload) {
            Ok(request) => self.executor.execute(host, &request).await,
            Err(err) => {
                debug!("Rejected query payload: {}", err.message());
                QueryResponse::Failure(err)
            }
        };
        response.to_json()
    }
}
