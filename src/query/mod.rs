//! Query execution for the query command.
//!
//! This module isolates request parsing, execution, and response shaping
//! from command dispatch.

pub mod executor;
pub mod request;
pub mod response;

pub use executor::QueryExecutor;
pub use request::QueryRequest;
pub use response::QueryResponse;
