pub mod aggregate;
pub mod materializer;
pub mod predicate;
pub mod query;
pub mod rollup;
pub mod sort_key;
pub mod table_sorter;

pub use materializer::{Record, Records};
pub use predicate::Predicate;
pub use query::Query;
pub use rollup::{Inclusion, Rollup};
pub use sort_key::{Comparator, SortKey};
pub use table_sorter::TableSorter;

#[cfg(test)]
mod predicate_test;
