//! User-facing config flow for adding the integration.
//!
//! The flow has a single `user` step with an empty form; submitting it
//! creates the config entry.

use serde::Serialize;
use serde_json::{Map, Value};

/// Title given to the created config entry.
pub const ENTRY_TITLE: &str = "Ferbos Query Executor";

/// Outcome of a config flow step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlowResult {
    /// Ask the user to fill in a form.
    Form {
        step_id: String,
        /// Field names of the form; the user step has none.
        data_schema: Vec<String>,
    },
    /// Finish the flow and create an entry.
    CreateEntry { title: String, data: Map<String, Value> },
}

impl FlowResult {
    /// Turns a `CreateEntry` result into a config entry.
    pub fn into_entry(self, entry_id: impl Into<String>) -> Option<ConfigEntry> {
        match self {
            Self::CreateEntry { title, data } => Some(ConfigEntry {
                entry_id: entry_id.into(),
                title,
                data,
            }),
            Self::Form { .. } => None,
        }
    }
}

/// A stored integration entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigEntry {
    pub entry_id: String,
    pub title: String,
    pub data: Map<String, Value>,
}

/// Config flow handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigFlow;

impl ConfigFlow {
    /// Flow schema version.
    pub const VERSION: u32 = 1;

    /// Creates the flow.
    pub fn new() -> Self {
        Self
    }

    /// The `user` step: show the form, or create the entry once submitted.
    pub fn step_user(&self, user_input: Option<&Map<String, Value>>) -> FlowResult {
        match user_input {
            Some(_) => FlowResult::CreateEntry {
                title: ENTRY_TITLE.to_string(),
                data: Map::new(),
            },
            None => FlowResult::Form {
                step_id: "user".to_string(),
                data_schema: Vec::new(),
            },
        }
    }
}
