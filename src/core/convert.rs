//! Row/object conversion
//!
//! Storage rows use underscore-separated column names with `fk_`-prefixed
//! foreign keys and 0/1 integers for booleans; application objects use
//! camelCase keys and real booleans. A [`RowMapping`] declares the remap for
//! one entity and converts in both directions.
//!
//! Conversion never fails: both converters take a reference to an existing
//! map, so the "argument is absent" precondition of the original contract is
//! enforced by the type system.

use serde_json::{Map, Value};
use tracing::trace;

/// How a column value translates between storage and application shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Value passes through unchanged
    Keep,
    /// Storage 0/1 integer <-> application boolean
    Bool01,
}

impl Coercion {
    fn decode(self, value: &Value) -> Value {
        match self {
            Coercion::Keep => value.clone(),
            Coercion::Bool01 => match value {
                Value::Number(n) => Value::Bool(n.as_i64().unwrap_or(0) != 0),
                other => other.clone(),
            },
        }
    }

    fn encode(self, value: &Value) -> Value {
        match self {
            Coercion::Keep => value.clone(),
            Coercion::Bool01 => match value {
                Value::Bool(b) => Value::from(i64::from(*b)),
                other => other.clone(),
            },
        }
    }
}

/// Declaration of one column <-> field pair
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Application-side camelCase field name
    pub field: &'static str,
    /// Storage-side column name
    pub column: &'static str,
    pub coercion: Coercion,
    /// Secret columns are dropped on the way in (never returned to callers)
    pub secret: bool,
}

impl ColumnSpec {
    pub fn new(field: &'static str, column: &'static str) -> Self {
        Self {
            field,
            column,
            coercion: Coercion::Keep,
            secret: false,
        }
    }

    /// Column stored as a 0/1 integer, exposed as a boolean
    pub fn bool01(field: &'static str, column: &'static str) -> Self {
        Self {
            field,
            column,
            coercion: Coercion::Bool01,
            secret: false,
        }
    }

    /// Mark the column as secret (redacted by [`RowMapping::from_row`])
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

/// Bidirectional row <-> object mapping for one entity
///
/// The `id` column is handled implicitly: inbound it is always carried over,
/// outbound it is included only when present on the input object so that
/// creation payloads let storage assign it.
#[derive(Debug, Clone)]
pub struct RowMapping {
    pub entity: &'static str,
    pub columns: Vec<ColumnSpec>,
}

impl RowMapping {
    pub fn new(entity: &'static str, columns: Vec<ColumnSpec>) -> Self {
        Self { entity, columns }
    }

    /// Shape a storage row into an application object, redacting secrets
    pub fn from_row(&self, row: &Map<String, Value>) -> Map<String, Value> {
        self.convert_in(row, false)
    }

    /// Shape a storage row into an application object, keeping secrets
    ///
    /// Only for callers that genuinely need the stored secret, e.g. the
    /// login path comparing password hashes.
    pub fn from_row_unfiltered(&self, row: &Map<String, Value>) -> Map<String, Value> {
        self.convert_in(row, true)
    }

    fn convert_in(&self, row: &Map<String, Value>, keep_secrets: bool) -> Map<String, Value> {
        trace!(entity = self.entity, keep_secrets, "converting row to object");
        let mut object = Map::new();
        if let Some(id) = row.get("id") {
            object.insert("id".to_string(), id.clone());
        }
        for spec in &self.columns {
            if spec.secret && !keep_secrets {
                continue;
            }
            if let Some(value) = row.get(spec.column) {
                object.insert(spec.field.to_string(), spec.coercion.decode(value));
            }
        }
        object
    }

    /// Shape an application object into a storage row
    pub fn to_row(&self, object: &Map<String, Value>) -> Map<String, Value> {
        trace!(entity = self.entity, "converting object to row");
        let mut row = Map::new();
        if let Some(id) = object.get("id") {
            row.insert("id".to_string(), id.clone());
        }
        for spec in &self.columns {
            if let Some(value) = object.get(spec.field) {
                row.insert(spec.column.to_string(), spec.coercion.encode(value));
            }
        }
        row
    }
}
