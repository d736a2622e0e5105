//! Command registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use super::handlers::CommandHandler;
use crate::host::HostContext;

/// Maps command names to handlers.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: BTreeMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`, replacing any earlier handler.
    ///
    /// Returns true if a handler was replaced.
    pub fn register(&mut self, name: impl Into<String>, handler: Arc<dyn CommandHandler>) -> bool {
        let name = name.into();
        let replaced = self.handlers.insert(name.clone(), handler).is_some();
        if replaced {
            debug!("Replaced handler for command {name}");
        } else {
            debug!("Registered command {name}");
        }
        replaced
    }

    /// Returns true if a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Routes a call to its handler.
    ///
    /// Unknown commands produce a failure result with code `unknown_command`.
    pub async fn dispatch(
        &self,
        name: &str,
        host: &HostContext,
        payload: &serde_json::Value,
    ) -> serde_json::Value {
        match self.handlers.get(name) {
            Some(handler) => handler.handle(host, payload).await,
            None => {
                warn!("Unknown command: {name}");
                json!({
                    "success": false,
                    "error": {
                        "code": "unknown_command",
                        "message": format!("Unknown command: {name}"),
                    }
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl CommandHandler for Echo {
        async fn handle(&self, _host: &HostContext, payload: &serde_json::Value) -> serde_json::Value {
            json!({"success": true, "data": payload})
        }
    }

    #[tokio::test]
    async fn test_dispatch_routes_to_handler() {
        let mut registry = CommandRegistry::new();
        registry.register("test/echo", Arc::new(Echo));
        let host = HostContext::new("/config");

        let result = registry.dispatch("test/echo", &host, &json!({"a": 1})).await;
        assert_eq!(result, json!({"success": true, "data": {"a": 1}}));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_command() {
        let registry = CommandRegistry::new();
        let host = HostContext::new("/config");

        let result = registry.dispatch("test/missing", &host, &json!({})).await;
        assert_eq!(result["success"], json!(false));
        assert_eq!(result["error"]["code"], json!("unknown_command"));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = CommandRegistry::new();
        assert!(!registry.register("test/echo", Arc::new(Echo)));
        assert!(registry.register("test/echo", Arc::new(Echo)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), vec!["test/echo"]);
        assert!(registry.contains("test/echo"));
    }
}
