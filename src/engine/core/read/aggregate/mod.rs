pub mod ops;

pub use ops::{AggOutput, AggregateOp, SplitAggregate, mean_of_included};
