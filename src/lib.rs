//! Ferbos Query Executor - ad-hoc SQL against the home-automation recorder database.
//!
//! This library exposes the core modules for the `ferbos-query` binary and
//! for integration tests.

pub mod cli;
pub mod config;
pub mod config_flow;
pub mod db;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod logging;
pub mod manifest;
pub mod query;
pub mod setup;
