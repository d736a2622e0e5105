//! Query command response.
//!
//! Serializes to `{"success": true, "data": ...}` or
//! `{"success": false, "error": {"code": ..., "message": ...}}`.

use crate::db::StatementResult;
use crate::error::QueryExecutorError;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Exactly one outcome of a query command call.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResponse {
    /// The statement ran and its result was shaped.
    Success(StatementResult),
    /// The call failed; no data is returned.
    Failure(QueryExecutorError),
}

impl QueryResponse {
    /// Returns true if the call succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the statement result, if any.
    pub fn data(&self) -> Option<&StatementResult> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure, if any.
    pub fn error(&self) -> Option<&QueryExecutorError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Converts the response into its JSON wire form.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            serde_json::json!({
                "success": false,
                "error": { "code": "internal_error", "message": e.to_string() }
            })
        })
    }
}

impl From<crate::error::Result<StatementResult>> for QueryResponse {
    fn from(result: crate::error::Result<StatementResult>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Failure(err),
        }
    }
}

/// Wire form of an error.
#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
}

impl Serialize for QueryResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Self::Success(data) => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", data)?;
            }
            Self::Failure(err) => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry(
                    "error",
                    &ErrorBody {
                        code: err.code(),
                        message: err.message(),
                    },
                )?;
            }
        }
        map.end()
    }
}
