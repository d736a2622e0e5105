//! Query command payload.

use crate::db::Value;
use crate::error::{QueryExecutorError, Result};

/// A single ad-hoc query request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryRequest {
    /// SQL text to run; `None` when the payload carried no query.
    pub query: Option<String>,

    /// Positional bind parameters.
    pub params: Vec<Value>,
}

impl QueryRequest {
    /// Creates a request for `query` with no parameters.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            params: Vec::new(),
        }
    }

    /// Sets the positional bind parameters.
    pub fn with_params(mut self, params: Vec<Value>) -> Self {
        self.params = params;
        self
    }

    /// Returns the SQL text if present and not blank.
    pub fn sql(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.trim().is_empty())
    }

    /// Builds a request from a command payload.
    ///
    /// Only `query` and `params` are read; any other keys (such as the
    /// dispatcher's `id` and `type`) are ignored. A `null` field counts as
    /// absent.
    pub fn from_payload(payload: &serde_json::Value) -> Result<Self> {
        let object = payload
            .as_object()
            .ok_or_else(|| QueryExecutorError::invalid("Payload must be an object"))?;

        let query = match object.get("query") {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(_) => return Err(QueryExecutorError::invalid("Query must be a string")),
        };

        let params = match object.get("params") {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .map(Value::from_json)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| {
                    QueryExecutorError::invalid("Params must contain only scalar values")
                })?,
            Some(_) => return Err(QueryExecutorError::invalid("Params must be a list")),
        };

        Ok(Self { query, params })
    }
}
