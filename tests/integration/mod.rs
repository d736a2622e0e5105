//! Integration tests for the query executor.
//!
//! Each test builds its own host config directory containing a seeded
//! `home-assistant_v2.db`.

pub mod command_test;
pub mod query_test;

use ferbos_query_executor::host::HostContext;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use tempfile::TempDir;

/// Creates a host config directory with a small recorder database.
pub async fn seeded_host() -> (TempDir, HostContext) {
    let dir = tempfile::tempdir().expect("temp dir");
    let host = HostContext::new(dir.path());

    let mut conn = SqliteConnectOptions::new()
        .filename(host.database_path())
        .create_if_missing(true)
        .connect()
        .await
        .expect("create database");

    for sql in [
        "CREATE TABLE states (state_id INTEGER PRIMARY KEY, entity_id TEXT NOT NULL, state TEXT, last_updated_ts REAL)",
        "INSERT INTO states (entity_id, state, last_updated_ts) VALUES ('light.kitchen', 'on', 1700000000.5)",
        "INSERT INTO states (entity_id, state, last_updated_ts) VALUES ('sensor.temperature', '21.5', 1700000001.0)",
        "INSERT INTO states (entity_id, state, last_updated_ts) VALUES ('test.entity', 'old_state', NULL)",
    ] {
        sqlx::query(sql).execute(&mut conn).await.expect("seed");
    }
    conn.close().await.expect("close seed connection");

    (dir, host)
}
