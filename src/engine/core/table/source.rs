use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::errors::EngineError;
use crate::engine::types::ColumnKind;

/// One declared field: its name and the kind name it should be coerced to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    pub fn column_kind(&self) -> Result<ColumnKind, EngineError> {
        self.kind.parse()
    }
}

/// Ordered field list; order here is the column order of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Schema {
    pub fields: Vec<FieldSpec>,
}

/// Already-materialized rows plus their declared schema.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TableSource {
    pub data: Vec<Value>,
    pub schema: Schema,
}

impl TableSource {
    pub fn new(data: Vec<Value>, schema: Schema) -> Self {
        Self { data, schema }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
