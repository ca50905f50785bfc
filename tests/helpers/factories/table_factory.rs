use crate::engine::core::{Table, TableOptions};
use crate::engine::types::NullOrder;
use crate::test_helpers::factories::SourceFactory;

pub struct TableFactory {
    source: SourceFactory,
    null_order: NullOrder,
}

impl TableFactory {
    pub fn new() -> Self {
        Self {
            source: SourceFactory::people(),
            null_order: NullOrder::First,
        }
    }

    pub fn with_source(mut self, source: SourceFactory) -> Self {
        self.source = source;
        self
    }

    pub fn with_null_order(mut self, null_order: NullOrder) -> Self {
        self.null_order = null_order;
        self
    }

    pub fn create(self) -> Table {
        let options = TableOptions {
            null_order: self.null_order,
        };
        Table::from_source_with(&self.source.create(), options).expect("Failed to build table")
    }
}
