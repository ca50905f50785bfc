pub mod derive;
pub mod source;
pub mod table;

pub use derive::{ColumnLens, Derive};
pub use source::{FieldSpec, Schema, TableSource};
pub use table::{Table, TableOptions};

#[cfg(test)]
mod table_test;
