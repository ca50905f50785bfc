pub mod bitset;
pub mod column;
pub mod index;
pub mod read;
pub mod table;

pub use bitset::Bitset;
pub use column::{Column, ColumnStore, ColumnValues};
pub use index::{IndexWidth, RowIndexes};
pub use read::aggregate::{AggOutput, AggregateOp, SplitAggregate};
pub use read::{Inclusion, Predicate, Query, Record, Records, Rollup, SortKey, TableSorter};
pub use table::{ColumnLens, Derive, FieldSpec, Schema, Table, TableOptions, TableSource};
