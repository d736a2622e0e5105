//! SQLite engine implementation.
//!
//! Provides the `SqliteEngine` struct that implements the `SqlEngine` trait
//! for the on-disk recorder database using sqlx.

use crate::db::statement::is_single_statement;
use crate::db::{EngineConnection, Row, SqlEngine, StatementResult, Value};
use crate::error::{QueryExecutorError, Result};
use async_trait::async_trait;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{
    Column as SqlxColumn, ConnectOptions, Connection, Executor, Row as SqlxRow, Statement,
    TypeInfo, ValueRef,
};
use std::path::Path;
use tracing::debug;

/// Engine that opens one sqlx `SqliteConnection` per call.
#[derive(Debug, Clone, Default)]
pub struct SqliteEngine;

impl SqliteEngine {
    /// Creates a new SQLite engine.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SqlEngine for SqliteEngine {
    async fn open(&self, path: &Path) -> Result<Box<dyn EngineConnection>> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(false)
            .foreign_keys(false);

        let conn = options.connect().await?;
        debug!("Opened SQLite connection to {}", path.display());

        Ok(Box::new(SqliteEngineConnection { conn }))
    }
}

/// A single sqlx connection to the recorder database.
struct SqliteEngineConnection {
    conn: SqliteConnection,
}

#[async_trait]
impl EngineConnection for SqliteEngineConnection {
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<StatementResult> {
        if !is_single_statement(sql) {
            return Err(QueryExecutorError::engine(
                "You can only execute one statement at a time.",
            ));
        }

        let statement = (&mut self.conn).prepare(sql).await?;

        if statement.columns().is_empty() {
            // Outside an explicit transaction SQLite commits the statement
            // before `execute` returns.
            let done = bind_params(statement.query(), params)
                .execute(&mut self.conn)
                .await?;

            debug!(
                "Statement changed {} rows (last insert rowid {})",
                done.rows_affected(),
                done.last_insert_rowid()
            );
            Ok(StatementResult::write(
                done.rows_affected(),
                done.last_insert_rowid(),
            ))
        } else {
            let rows = bind_params(statement.query(), params)
                .fetch_all(&mut self.conn)
                .await?;

            debug!("Statement returned {} rows", rows.len());
            Ok(StatementResult::Rows(rows.iter().map(convert_row).collect()))
        }
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.conn.close().await?;
        debug!("Closed SQLite connection");
        Ok(())
    }
}

/// Binds positional parameters in order.
fn bind_params<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &[Value],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            Value::Null => query.bind(None::<String>),
            Value::Bool(b) => query.bind(*b),
            Value::Int(i) => query.bind(*i),
            Value::Float(f) => query.bind(*f),
            Value::String(s) => query.bind(s.clone()),
            Value::Bytes(b) => query.bind(b.clone()),
        };
    }
    query
}

/// Converts a sqlx SqliteRow to our Row type, keeping engine column order.
fn convert_row(row: &SqliteRow) -> Row {
    let mut out = Row::with_capacity(row.columns().len());
    for (i, col) in row.columns().iter().enumerate() {
        out.push(col.name(), convert_value(row, i));
    }
    out
}

/// Converts a single cell using the storage class of the stored value.
///
/// SQLite is dynamically typed, so the declared column type is not consulted.
fn convert_value(row: &SqliteRow, index: usize) -> Value {
    let type_name = match row.try_get_raw(index) {
        Ok(raw) if raw.is_null() => return Value::Null,
        Ok(raw) => raw.type_info().name().to_uppercase(),
        Err(e) => {
            debug!("Could not read column {index}: {e}");
            return Value::Null;
        }
    };

    match type_name.as_str() {
        "INTEGER" | "INT" | "INT8" | "BIGINT" | "BOOLEAN" => row
            .try_get_unchecked::<i64, _>(index)
            .map(Value::Int)
            .unwrap_or(Value::Null),

        "REAL" | "FLOAT" | "DOUBLE" | "NUMERIC" => row
            .try_get_unchecked::<f64, _>(index)
            .map(Value::Float)
            .unwrap_or(Value::Null),

        "BLOB" => row
            .try_get_unchecked::<Vec<u8>, _>(index)
            .map(Value::Bytes)
            .unwrap_or(Value::Null),

        _ => row
            .try_get_unchecked::<String, _>(index)
            .map(Value::String)
            .unwrap_or(Value::Null),
    }
}
