pub use super::factories::{SourceFactory, TableFactory};

use crate::engine::core::Table;

pub struct Factory;

impl Factory {
    pub fn source() -> SourceFactory {
        SourceFactory::new()
    }

    pub fn table() -> TableFactory {
        TableFactory::new()
    }

    /// Ann 27, Liza 32, John 29, Kate 25.
    pub fn people() -> Table {
        TableFactory::new().create()
    }

    pub fn random_table(seed: u64, rows: usize) -> Table {
        TableFactory::new()
            .with_source(SourceFactory::random(seed, rows))
            .create()
    }
}
