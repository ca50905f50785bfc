use std::cmp::Ordering;

use tracing::debug;

use crate::engine::core::column::Column;
use crate::engine::core::read::sort_key::SortKey;
use crate::engine::core::table::Table;
use crate::engine::errors::EngineError;

/// Reorders a table's row order by sort keys in priority order.
///
/// Keys compare lexicographically: the first non-equal comparison decides.
/// The sort is stable, so fully tied rows keep their current relative order.
#[derive(Debug, Clone, Default)]
pub struct TableSorter {
    keys: Vec<SortKey>,
}

impl TableSorter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: SortKey) -> Self {
        self.keys.push(key);
        self
    }

    pub fn ascending(self, field: impl Into<String>) -> Self {
        self.key(SortKey::ascending(field))
    }

    pub fn descending(self, field: impl Into<String>) -> Self {
        self.key(SortKey::descending(field))
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn sort(&self, table: &Table) -> Result<Table, EngineError> {
        let resolved = self
            .keys
            .iter()
            .map(|key| table.column(key.field()).map(|column| (column, key)))
            .collect::<Result<Vec<(&Column, &SortKey)>, EngineError>>()?;

        if resolved.is_empty() {
            return Ok(table.clone());
        }

        let order = table.order().sorted_by(|a, b| {
            resolved
                .iter()
                .map(|(column, key)| key.compare(column.value(a), column.value(b)))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        debug!(
            target: "colbundle::sort",
            "Sorted {} rows by {}",
            order.len(),
            self
        );
        Ok(table.with_order(order))
    }
}

impl std::fmt::Display for TableSorter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<String> = self.keys.iter().map(|k| k.to_string()).collect();
        write!(f, "[{}]", keys.join(", "))
    }
}

impl Table {
    pub fn sort(&self, sorter: &TableSorter) -> Result<Table, EngineError> {
        sorter.sort(self).inspect_err(EngineError::log_error)
    }
}
