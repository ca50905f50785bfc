use std::sync::Arc;

use indexmap::IndexMap;

use crate::engine::core::column::Column;
use crate::engine::errors::EngineError;

/// Field name to column map, in schema order.
///
/// Columns are held behind `Arc` so that extending a store copies only the
/// entries, never the value arrays.
#[derive(Debug, Clone, Default)]
pub struct ColumnStore {
    columns: IndexMap<String, Arc<Column>>,
}

impl ColumnStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, column: Column) {
        self.columns.insert(name.into(), Arc::new(column));
    }

    pub fn get(&self, name: &str) -> Result<&Column, EngineError> {
        self.columns
            .get(name)
            .map(Arc::as_ref)
            .ok_or_else(|| EngineError::UnknownField(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Shared handle to a column, for checking that stores share storage.
    pub fn shared(&self, name: &str) -> Option<&Arc<Column>> {
        self.columns.get(name)
    }
}
