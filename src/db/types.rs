//! Statement result types.
//!
//! Defines the structures used to represent the outcome of one statement run
//! against the recorder database.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Outcome of executing a single statement.
///
/// Which variant is produced depends on whether the engine reported a
/// row-capable statement, not on the text of the SQL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatementResult {
    /// The statement yielded a (possibly empty) row set.
    Rows(Vec<Row>),

    /// The statement yielded no result columns and was committed.
    Write {
        /// Number of rows changed by the statement.
        rowcount: u64,
        /// Rowid of the last inserted row, if the connection inserted one.
        lastrowid: Option<i64>,
    },
}

impl StatementResult {
    /// Creates a write summary from the raw engine counters.
    ///
    /// SQLite reports a last insert rowid of 0 when the connection has not
    /// inserted anything, which is surfaced as `None`.
    pub fn write(rowcount: u64, last_insert_rowid: i64) -> Self {
        Self::Write {
            rowcount,
            lastrowid: (last_insert_rowid != 0).then_some(last_insert_rowid),
        }
    }

    /// Returns the rows if this is a read result.
    pub fn rows(&self) -> Option<&[Row]> {
        match self {
            Self::Rows(rows) => Some(rows),
            Self::Write { .. } => None,
        }
    }

    /// Returns true if this result came from a row-capable statement.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Rows(_))
    }
}

/// A row of data, keyed by column name in engine column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty row with room for `capacity` columns.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity),
        }
    }

    /// Appends a column value.
    ///
    /// A repeated column name keeps its first position and takes the new value.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.columns.push((name, value)),
        }
    }

    /// Looks up a value by column name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (name, value) in iter {
            row.push(name, value.into());
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Represents a single scalar value, either a bind parameter or a cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// NULL value.
    #[default]
    Null,

    /// Boolean value (bound as an integer).
    Bool(bool),

    /// Signed integer (up to i64).
    Int(i64),

    /// Floating point number.
    Float(f64),

    /// Text/string value.
    String(String),

    /// Binary data.
    Bytes(Vec<u8>),
}

impl Value {
    /// Converts a JSON scalar into a value.
    ///
    /// Returns `None` for arrays, objects, and numbers outside the i64/f64 range.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(Value::Null),
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float)),
            serde_json::Value::String(s) => Some(Value::String(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bytes(b) => serializer.serialize_str(&STANDARD.encode(b)),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}
