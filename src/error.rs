//! Error types for the query executor.
//!
//! Defines the main error enum used throughout the crate. The first three
//! variants map one-to-one onto the wire error codes returned by the query
//! command.

use thiserror::Error;

/// Main error type for query executor operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryExecutorError {
    /// Malformed or missing request input (missing query, bad params).
    #[error("Invalid request: {0}")]
    Invalid(String),

    /// The recorder database file does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any failure reported by the SQL engine (open, execute, fetch, commit).
    #[error("SQLite error: {0}")]
    Engine(String),

    /// Configuration errors (invalid config file, bad values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl QueryExecutorError {
    /// Creates an invalid-request error with the given message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    /// Creates a not-found error with the given message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Creates an engine error carrying the engine's message verbatim.
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the stable error code sent back to command callers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Invalid(_) => "invalid",
            Self::NotFound(_) => "not_found",
            Self::Engine(_) => "sqlite_error",
            Self::Config(_) => "config_error",
        }
    }

    /// Returns the raw message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Invalid(msg)
            | Self::NotFound(msg)
            | Self::Engine(msg)
            | Self::Config(msg) => msg,
        }
    }
}

impl From<sqlx::Error> for QueryExecutorError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => Self::Engine(db_err.message().to_string()),
            other => Self::Engine(other.to_string()),
        }
    }
}

/// Result type alias using QueryExecutorError.
pub type Result<T> = std::result::Result<T, QueryExecutorError>;
