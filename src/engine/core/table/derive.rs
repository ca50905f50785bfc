use tracing::debug;

use crate::engine::core::column::{Column, ColumnStore};
use crate::engine::core::table::Table;
use crate::engine::errors::EngineError;

/// Read-only view handed to derivations.
pub struct ColumnLens<'a> {
    store: &'a ColumnStore,
    row_count: usize,
}

impl<'a> ColumnLens<'a> {
    pub fn get(&self, name: &str) -> Result<&'a Column, EngineError> {
        self.store.get(name)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

type Derivation<'f> = Box<dyn Fn(&ColumnLens<'_>) -> Result<Column, EngineError> + 'f>;

/// Ordered set of computed columns to add to a table.
#[derive(Default)]
pub struct Derive<'f> {
    derivations: Vec<(String, Derivation<'f>)>,
}

impl<'f> Derive<'f> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column<F>(mut self, name: impl Into<String>, derivation: F) -> Self
    where
        F: Fn(&ColumnLens<'_>) -> Result<Column, EngineError> + 'f,
    {
        self.derivations.push((name.into(), Box::new(derivation)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.derivations.is_empty()
    }
}

impl Table {
    /// Returns a table with the derived columns appended to a copy of the
    /// column map. Existing columns are shared, not copied. Each derivation
    /// sees the columns derived before it.
    pub fn derive(&self, derive: &Derive<'_>) -> Result<Table, EngineError> {
        self.derive_columns(derive)
            .inspect_err(EngineError::log_error)
    }

    fn derive_columns(&self, derive: &Derive<'_>) -> Result<Table, EngineError> {
        let mut store = self.columns().clone();
        for (name, derivation) in &derive.derivations {
            let column = derivation(&ColumnLens {
                store: &store,
                row_count: self.row_count(),
            })?;
            if column.len() != self.row_count() {
                return Err(EngineError::ColumnLength {
                    field: name.clone(),
                    expected: self.row_count(),
                    actual: column.len(),
                });
            }
            debug!(
                target: "colbundle::table",
                "Derived {} column '{}'",
                column.kind(),
                name
            );
            store.insert(name.clone(), column);
        }
        Ok(self.with_columns(store))
    }
}
