pub mod index_width;
pub mod row_indexes;

pub use index_width::IndexWidth;
pub use row_indexes::RowIndexes;

#[cfg(test)]
mod row_indexes_test;
