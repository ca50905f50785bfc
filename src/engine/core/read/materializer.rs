use std::iter::FusedIterator;

use indexmap::IndexMap;
use tracing::debug;

use crate::engine::core::table::Table;
use crate::engine::types::CellValue;

/// One output row, fields in schema order.
pub type Record = IndexMap<String, CellValue>;

/// Lazy walk over a table's row order honouring its filter and an
/// offset/limit window. Records are built one at a time on demand.
#[derive(Debug, Clone)]
pub struct Records {
    table: Table,
    cursor: usize,
    offset: usize,
    remaining: usize,
}

impl Records {
    pub fn new(table: Table, offset: usize, limit: usize) -> Self {
        debug!(
            target: "colbundle::materialize",
            "Materializing offset={} limit={} over {} rows",
            offset,
            limit,
            table.row_count()
        );
        Self {
            table,
            cursor: 0,
            offset,
            remaining: limit,
        }
    }
}

impl Iterator for Records {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        if self.remaining == 0 {
            return None;
        }
        let order = self.table.order();
        while self.cursor < order.len() {
            let row = order.get(self.cursor);
            self.cursor += 1;
            if !self.table.is_included(row) {
                continue;
            }
            if self.offset > 0 {
                self.offset -= 1;
                continue;
            }
            self.remaining -= 1;
            return Some(self.table.record(row));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.table.row_count() - self.cursor;
        (0, Some(left.min(self.remaining)))
    }
}

impl FusedIterator for Records {}

impl Table {
    /// Builds the record for original row `row`, reading every column.
    /// `row` must be below `row_count`.
    pub(crate) fn record(&self, row: usize) -> Record {
        self.columns()
            .iter()
            .map(|(name, column)| (name.to_string(), column.value(row).to_owned_value()))
            .collect()
    }

    pub fn materialize(&self, offset: usize, limit: usize) -> Records {
        Records::new(self.clone(), offset, limit)
    }

    /// Collecting form of `materialize`.
    pub fn take(&self, offset: usize, limit: usize) -> Vec<Record> {
        self.materialize(offset, limit).collect()
    }
}
