pub mod bitset;

pub use bitset::Bitset;
