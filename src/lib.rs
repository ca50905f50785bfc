//! In-memory columnar table engine.
//!
//! A [`Table`] is built once from materialized records. Construction sorts
//! every numeric and text column into an ascending permutation and groups
//! equal text values into contiguous runs, so that:
//!
//! - range and set predicates are answered by binary search and run lookup,
//! - sorting only permutes row indices,
//! - rollups make one pass over raw values per aggregation,
//! - materialization walks the row order lazily.
//!
//! Every operator returns a new [`Table`] handle sharing the column store.

pub mod engine;
pub mod logging;
pub mod shared;

pub use engine::core::{
    AggOutput, AggregateOp, Column, ColumnLens, ColumnValues, Derive, FieldSpec, Inclusion,
    Predicate, Query, Record, Records, Rollup, Schema, SortKey, SplitAggregate, Table,
    TableOptions, TableSorter, TableSource,
};
pub use engine::errors::EngineError;
pub use engine::types::{CellValue, ColumnKind, NullOrder, ValueRef};

#[cfg(test)]
mod logging_test;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
