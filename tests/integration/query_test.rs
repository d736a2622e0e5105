//! Query execution integration tests.
//!
//! Runs the executor with the real SQLite engine.

use ferbos_query_executor::db::{StatementResult, Value};
use ferbos_query_executor::host::HostContext;
use ferbos_query_executor::query::{QueryExecutor, QueryRequest};
use pretty_assertions::assert_eq;
use serde_json::json;

use super::seeded_host;

#[tokio::test]
async fn test_select_literal_row() {
    let (_dir, host) = seeded_host().await;
    let executor = QueryExecutor::sqlite();

    let response = executor
        .execute(&host, &QueryRequest::new("SELECT 1 AS id, 'test' AS name"))
        .await;

    assert_eq!(
        response.to_json(),
        json!({"success": true, "data": [{"id": 1, "name": "test"}]})
    );
}

#[tokio::test]
async fn test_select_preserves_column_order() {
    let (_dir, host) = seeded_host().await;
    let executor = QueryExecutor::sqlite();

    let response = executor
        .execute(
            &host,
            &QueryRequest::new(
                "SELECT state, entity_id, state_id FROM states WHERE entity_id = ?",
            )
            .with_params(vec![Value::from("light.kitchen")]),
        )
        .await;

    let rows = response.data().and_then(StatementResult::rows).unwrap();
    assert_eq!(rows.len(), 1);
    let names: Vec<&str> = rows[0].column_names().collect();
    assert_eq!(names, vec!["state", "entity_id", "state_id"]);
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"success":true,"data":[{"state":"on","entity_id":"light.kitchen","state_id":1}]}"#
    );
}

#[tokio::test]
async fn test_select_with_null_and_real() {
    let (_dir, host) = seeded_host().await;
    let executor = QueryExecutor::sqlite();

    let response = executor
        .execute(
            &host,
            &QueryRequest::new("SELECT entity_id, last_updated_ts FROM states ORDER BY state_id"),
        )
        .await;

    assert_eq!(
        response.to_json()["data"],
        json!([
            {"entity_id": "light.kitchen", "last_updated_ts": 1700000000.5},
            {"entity_id": "sensor.temperature", "last_updated_ts": 1700000001.0},
            {"entity_id": "test.entity", "last_updated_ts": null}
        ])
    );
}

#[tokio::test]
async fn test_select_no_rows_is_empty_list() {
    let (_dir, host) = seeded_host().await;
    let executor = QueryExecutor::sqlite();

    let response = executor
        .execute(
            &host,
            &QueryRequest::new("SELECT * FROM states WHERE entity_id = 'missing'"),
        )
        .await;

    assert_eq!(response.to_json(), json!({"success": true, "data": []}));
}

#[tokio::test]
async fn test_update_then_read_back() {
    let (_dir, host) = seeded_host().await;
    let executor = QueryExecutor::sqlite();

    let update = QueryRequest::new("UPDATE states SET state = ? WHERE entity_id = ?")
        .with_params(vec![Value::from("new_state"), Value::from("test.entity")]);
    let response = executor.execute(&host, &update).await;

    assert_eq!(
        response.to_json(),
        json!({"success": true, "data": {"rowcount": 1, "lastrowid": null}})
    );

    let check = executor
        .execute(
            &host,
            &QueryRequest::new("SELECT state FROM states WHERE entity_id = 'test.entity'"),
        )
        .await;
    assert_eq!(check.to_json()["data"], json!([{"state": "new_state"}]));
}

#[tokio::test]
async fn test_insert_reports_lastrowid() {
    let (_dir, host) = seeded_host().await;
    let executor = QueryExecutor::sqlite();

    let insert = QueryRequest::new("INSERT INTO states (entity_id, state) VALUES (?, ?)")
        .with_params(vec![Value::from("switch.fan"), Value::Bool(true)]);
    let response = executor.execute(&host, &insert).await;

    assert_eq!(
        response.data(),
        Some(&StatementResult::Write {
            rowcount: 1,
            lastrowid: Some(4)
        })
    );
}

#[tokio::test]
async fn test_ddl_is_a_write() {
    let (_dir, host) = seeded_host().await;
    let executor = QueryExecutor::sqlite();

    let response = executor
        .execute(
            &host,
            &QueryRequest::new("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT)"),
        )
        .await;

    assert_eq!(
        response.to_json(),
        json!({"success": true, "data": {"rowcount": 0, "lastrowid": null}})
    );
}

#[tokio::test]
async fn test_second_statement_leaves_table_untouched() {
    let (_dir, host) = seeded_host().await;
    let executor = QueryExecutor::sqlite();

    let response = executor
        .execute(&host, &QueryRequest::new("SELECT 1 AS a; DELETE FROM states"))
        .await;

    assert_eq!(
        response.to_json(),
        json!({
            "success": false,
            "error": {
                "code": "sqlite_error",
                "message": "You can only execute one statement at a time."
            }
        })
    );

    let count = executor
        .execute(&host, &QueryRequest::new("SELECT COUNT(*) AS n FROM states"))
        .await;
    assert_eq!(count.to_json()["data"], json!([{"n": 3}]));
}

#[tokio::test]
async fn test_trailing_semicolon_is_one_statement() {
    let (_dir, host) = seeded_host().await;
    let executor = QueryExecutor::sqlite();

    let response = executor
        .execute(&host, &QueryRequest::new("SELECT COUNT(*) AS n FROM states; -- all"))
        .await;

    assert_eq!(response.to_json(), json!({"success": true, "data": [{"n": 3}]}));
}

#[tokio::test]
async fn test_vacuum_is_a_write() {
    let (_dir, host) = seeded_host().await;
    let executor = QueryExecutor::sqlite();

    let response = executor.execute(&host, &QueryRequest::new("VACUUM")).await;

    assert_eq!(
        response.to_json(),
        json!({"success": true, "data": {"rowcount": 0, "lastrowid": null}})
    );
}

#[tokio::test]
async fn test_unknown_table_is_sqlite_error() {
    let (_dir, host) = seeded_host().await;
    let executor = QueryExecutor::sqlite();

    let response = executor
        .execute(&host, &QueryRequest::new("SELECT * FROM no_such_table"))
        .await;

    let err = response.error().unwrap();
    assert_eq!(err.code(), "sqlite_error");
    assert!(err.message().contains("no such table"));
}

#[tokio::test]
async fn test_missing_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let host = HostContext::new(dir.path());
    let executor = QueryExecutor::sqlite();

    let response = executor.execute(&host, &QueryRequest::new("SELECT 1")).await;

    assert_eq!(response.error().map(|e| e.code()), Some("not_found"));
    assert!(!host.database_path().exists());
}

#[tokio::test]
async fn test_repeated_read_is_idempotent() {
    let (_dir, host) = seeded_host().await;
    let executor = QueryExecutor::sqlite();
    let request = QueryRequest::new("SELECT entity_id, state FROM states ORDER BY state_id");

    let first = executor.execute(&host, &request).await;
    let second = executor.execute(&host, &request).await;

    assert!(first.is_success());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_reads_share_nothing() {
    let (_dir, host) = seeded_host().await;
    let executor = QueryExecutor::sqlite();
    let request = QueryRequest::new("SELECT COUNT(*) AS n FROM states");

    let (a, b) = tokio::join!(
        executor.execute(&host, &request),
        executor.execute(&host, &request)
    );

    assert_eq!(a.to_json(), json!({"success": true, "data": [{"n": 3}]}));
    assert_eq!(a, b);
}
