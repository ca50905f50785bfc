pub mod source_factory;
pub mod table_factory;

pub use source_factory::SourceFactory;
pub use table_factory::TableFactory;

#[cfg(test)]
mod source_factory_test;
