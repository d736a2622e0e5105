//! Mock engines for testing.
//!
//! Provide scripted in-memory engines that record how connections were used,
//! so callers can assert that every opened connection was released.

use super::{EngineConnection, Row, SqlEngine, StatementResult, Value};
use crate::error::{QueryExecutorError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Counters shared between a mock engine and the connections it hands out.
#[derive(Debug, Default)]
pub struct ConnectionStats {
    opened: AtomicUsize,
    closed: AtomicUsize,
    last_path: Mutex<Option<PathBuf>>,
    last_params: Mutex<Vec<Value>>,
}

impl ConnectionStats {
    /// Number of times `open` was called.
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Number of connections released, by `close` or by drop.
    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    /// Connections opened but not yet released.
    pub fn open_connections(&self) -> usize {
        self.opened().saturating_sub(self.closed())
    }

    /// Path passed to the most recent `open`.
    pub fn last_path(&self) -> Option<PathBuf> {
        self.last_path.lock().ok().and_then(|p| p.clone())
    }

    /// Parameters passed to the most recent `execute`.
    pub fn last_params(&self) -> Vec<Value> {
        self.last_params
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

/// What a mock connection does when a statement is executed.
#[derive(Debug, Clone)]
enum Script {
    Rows(Vec<Row>),
    Write { rowcount: u64, lastrowid: i64 },
    Fail(String),
    Hang,
}

/// A mock engine that returns a predefined statement result.
pub struct MockEngine {
    script: Script,
    stats: Arc<ConnectionStats>,
}

impl MockEngine {
    /// Creates an engine whose statements yield the given rows.
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self::from_script(Script::Rows(rows))
    }

    /// Creates an engine whose statements report a write.
    pub fn with_write(rowcount: u64, lastrowid: i64) -> Self {
        Self::from_script(Script::Write {
            rowcount,
            lastrowid,
        })
    }

    /// Creates an engine that opens fine but fails every statement.
    pub fn failing_execute(message: impl Into<String>) -> Self {
        Self::from_script(Script::Fail(message.into()))
    }

    /// Creates an engine whose statements never complete.
    pub fn hanging() -> Self {
        Self::from_script(Script::Hang)
    }

    fn from_script(script: Script) -> Self {
        Self {
            script,
            stats: Arc::new(ConnectionStats::default()),
        }
    }

    /// Returns the shared usage counters.
    pub fn stats(&self) -> Arc<ConnectionStats> {
        Arc::clone(&self.stats)
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::with_rows(Vec::new())
    }
}

#[async_trait]
impl SqlEngine for MockEngine {
    async fn open(&self, path: &Path) -> Result<Box<dyn EngineConnection>> {
        self.stats.opened.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.stats.last_path.lock() {
            *last = Some(path.to_path_buf());
        }

        Ok(Box::new(MockConnection {
            script: self.script.clone(),
            stats: Arc::clone(&self.stats),
            released: false,
        }))
    }
}

struct MockConnection {
    script: Script,
    stats: Arc<ConnectionStats>,
    released: bool,
}

impl MockConnection {
    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.stats.closed.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl EngineConnection for MockConnection {
    async fn execute(&mut self, _sql: &str, params: &[Value]) -> Result<StatementResult> {
        if let Ok(mut last) = self.stats.last_params.lock() {
            *last = params.to_vec();
        }

        match &self.script {
            Script::Rows(rows) => Ok(StatementResult::Rows(rows.clone())),
            Script::Write {
                rowcount,
                lastrowid,
            } => Ok(StatementResult::write(*rowcount, *lastrowid)),
            Script::Fail(message) => Err(QueryExecutorError::engine(message.clone())),
            Script::Hang => futures::future::pending().await,
        }
    }

    async fn close(self: Box<Self>) -> Result<()> {
        let mut conn = self;
        conn.release();
        Ok(())
    }
}

impl Drop for MockConnection {
    fn drop(&mut self) {
        self.release();
    }
}

/// An engine whose `open` always fails with the given message.
pub struct FailingEngine {
    message: String,
    stats: Arc<ConnectionStats>,
}

impl FailingEngine {
    /// Creates an engine that fails to open with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stats: Arc::new(ConnectionStats::default()),
        }
    }

    /// Returns the shared usage counters.
    pub fn stats(&self) -> Arc<ConnectionStats> {
        Arc::clone(&self.stats)
    }
}

#[async_trait]
impl SqlEngine for FailingEngine {
    async fn open(&self, _path: &Path) -> Result<Box<dyn EngineConnection>> {
        Err(QueryExecutorError::engine(self.message.clone()))
    }
}
