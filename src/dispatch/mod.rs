//! Command registration and dispatch.
//!
//! The host platform routes named request/response commands to handlers
//! registered here. Handlers receive the host context explicitly and always
//! answer with a JSON result object.

pub mod handlers;
pub mod registry;

pub use handlers::{CommandHandler, QueryCommand};
pub use registry::CommandRegistry;

/// Name of the ad-hoc query command.
pub const QUERY_COMMAND: &str = "ferbos_query_executor/query";
