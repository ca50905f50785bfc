pub mod ascending_pointers;
pub mod coercion;
pub mod column;
pub mod column_store;
pub mod column_values;
pub mod slice_map;

pub use column::{Column, NumericColumn, TemporalColumn, TextualColumn};
pub use column_store::ColumnStore;
pub use column_values::ColumnValues;
pub use slice_map::{Slice, SliceMap};

#[cfg(test)]
mod coercion_test;
