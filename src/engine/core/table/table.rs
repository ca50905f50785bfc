use std::sync::Arc;

use tracing::info;

use crate::engine::core::bitset::Bitset;
use crate::engine::core::column::{Column, ColumnStore};
use crate::engine::core::index::RowIndexes;
use crate::engine::core::table::source::TableSource;
use crate::engine::errors::EngineError;
use crate::engine::types::{ColumnKind, NullOrder};
use crate::shared::config::CONFIG;

/// Construction-time settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    pub null_order: NullOrder,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            null_order: CONFIG.table.null_order,
        }
    }
}

/// Immutable table handle.
///
/// Every operator returns a new handle; handles share the column store and
/// differ only in their active filter and row order. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Arc<ColumnStore>,
    filter: Option<Arc<Bitset>>,
    order: Arc<RowIndexes>,
    row_count: usize,
}

impl Table {
    /// Builds a table using the configured defaults.
    pub fn from_source(source: &TableSource) -> Result<Self, EngineError> {
        Self::from_source_with(source, TableOptions::default())
    }

    pub fn from_source_with(
        source: &TableSource,
        options: TableOptions,
    ) -> Result<Self, EngineError> {
        let kinds = source
            .schema
            .fields
            .iter()
            .map(|field| field.column_kind())
            .collect::<Result<Vec<ColumnKind>, EngineError>>()
            .inspect_err(EngineError::log_error)?;

        let row_count = source.data.len();
        let mut columns = ColumnStore::new();
        for (field, kind) in source.schema.fields.iter().zip(kinds) {
            let column = Column::from_records(&field.name, kind, &source.data, options.null_order);
            columns.insert(field.name.clone(), column);
        }

        let order = RowIndexes::identity(row_count);
        info!(
            target: "colbundle::table",
            "Table created: {} rows, {} columns, {} row indices, nulls {:?}",
            row_count,
            columns.len(),
            order.width(),
            options.null_order
        );

        Ok(Self {
            columns: Arc::new(columns),
            filter: None,
            order: Arc::new(order),
            row_count,
        })
    }

    pub(crate) fn with_filter(&self, filter: Bitset) -> Self {
        Self {
            columns: Arc::clone(&self.columns),
            filter: Some(Arc::new(filter)),
            order: Arc::clone(&self.order),
            row_count: self.row_count,
        }
    }

    pub(crate) fn with_order(&self, order: RowIndexes) -> Self {
        Self {
            columns: Arc::clone(&self.columns),
            filter: self.filter.clone(),
            order: Arc::new(order),
            row_count: self.row_count,
        }
    }

    pub(crate) fn with_columns(&self, columns: ColumnStore) -> Self {
        Self {
            columns: Arc::new(columns),
            filter: self.filter.clone(),
            order: Arc::clone(&self.order),
            row_count: self.row_count,
        }
    }

    pub fn columns(&self) -> &ColumnStore {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Result<&Column, EngineError> {
        self.columns.get(name)
    }

    pub fn filter(&self) -> Option<&Bitset> {
        self.filter.as_deref()
    }

    pub fn order(&self) -> &RowIndexes {
        &self.order
    }

    /// Rows in the table, regardless of the active filter.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Rows that survive the active filter.
    pub fn visible_count(&self) -> usize {
        self.filter
            .as_ref()
            .map_or(self.row_count, |bits| bits.count_ones())
    }

    #[inline]
    pub fn is_included(&self, row: usize) -> bool {
        self.filter.as_ref().is_none_or(|bits| bits.contains(row))
    }

    pub fn shares_columns_with(&self, other: &Table) -> bool {
        Arc::ptr_eq(&self.columns, &other.columns)
    }

    pub fn shares_filter_with(&self, other: &Table) -> bool {
        match (&self.filter, &other.filter) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    pub fn shares_order_with(&self, other: &Table) -> bool {
        Arc::ptr_eq(&self.order, &other.order)
    }
}
