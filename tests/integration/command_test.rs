//! Command registration and dispatch integration tests.

use ferbos_query_executor::config_flow::ConfigFlow;
use ferbos_query_executor::dispatch::{CommandRegistry, QUERY_COMMAND};
use ferbos_query_executor::setup::{setup, setup_entry};
use pretty_assertions::assert_eq;
use serde_json::json;

use super::seeded_host;

#[tokio::test]
async fn test_dispatch_query_after_setup() {
    let (_dir, host) = seeded_host().await;
    let mut registry = CommandRegistry::new();
    assert!(setup(&host, &mut registry));

    let result = registry
        .dispatch(
            QUERY_COMMAND,
            &host,
            &json!({
                "id": 12,
                "type": QUERY_COMMAND,
                "query": "SELECT state FROM states WHERE entity_id = ?",
                "params": ["sensor.temperature"]
            }),
        )
        .await;

    assert_eq!(result, json!({"success": true, "data": [{"state": "21.5"}]}));
}

#[tokio::test]
async fn test_dispatch_after_entry_setup() {
    let (_dir, host) = seeded_host().await;
    let mut registry = CommandRegistry::new();
    let entry = ConfigFlow::new()
        .step_user(Some(&serde_json::Map::new()))
        .into_entry("entry-1")
        .unwrap();
    assert!(setup_entry(&host, &mut registry, &entry));

    let result = registry
        .dispatch(QUERY_COMMAND, &host, &json!({"query": "DELETE FROM states"}))
        .await;

    assert_eq!(
        result,
        json!({"success": true, "data": {"rowcount": 3, "lastrowid": null}})
    );
}

#[tokio::test]
async fn test_dispatch_missing_query() {
    let (_dir, host) = seeded_host().await;
    let mut registry = CommandRegistry::new();
    setup(&host, &mut registry);

    let result = registry.dispatch(QUERY_COMMAND, &host, &json!({})).await;

    assert_eq!(
        result,
        json!({"success": false, "error": {"code": "invalid", "message": "Missing query"}})
    );
}

#[tokio::test]
async fn test_dispatch_engine_error_keeps_message() {
    let (_dir, host) = seeded_host().await;
    let mut registry = CommandRegistry::new();
    setup(&host, &mut registry);

    let result = registry
        .dispatch(QUERY_COMMAND, &host, &json!({"query": "SELEC 1"}))
        .await;

    assert_eq!(result["success"], json!(false));
    assert_eq!(result["error"]["code"], json!("sqlite_error"));
    assert!(result["error"]["message"]
        .as_str()
        .unwrap()
        .contains("syntax error"));
}
