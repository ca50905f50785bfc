use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::engine::core::column::ColumnValues;
use crate::engine::core::read::rollup::Inclusion;
use crate::engine::errors::EngineError;
use crate::engine::types::{CellValue, ColumnKind, ValueRef};

/// Built-in aggregation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateOp {
    /// Rows, nulls included.
    Count,
    CountNonNull,
    CountUnique,
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregateOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateOp::Count => "count",
            AggregateOp::CountNonNull => "count_non_null",
            AggregateOp::CountUnique => "count_unique",
            AggregateOp::Sum => "sum",
            AggregateOp::Avg => "avg",
            AggregateOp::Min => "min",
            AggregateOp::Max => "max",
        }
    }

    pub fn output_name(&self, field: &str) -> String {
        format!("{}({})", self.as_str(), field)
    }

    /// Sum and average only make sense over numbers.
    pub fn check_kind(&self, field: &str, kind: ColumnKind) -> Result<(), EngineError> {
        match (self, kind) {
            (AggregateOp::Sum | AggregateOp::Avg, ColumnKind::Textual | ColumnKind::Temporal) => {
                Err(EngineError::NotImplemented {
                    field: field.to_string(),
                    kind,
                })
            }
            _ => Ok(()),
        }
    }

    /// Single pass over `values`, feeding every row to the all-rows
    /// accumulator and included rows to the second one.
    pub fn evaluate(&self, values: ColumnValues<'_>, inclusion: &Inclusion<'_>) -> SplitAggregate {
        let mut all = Accumulator::new(*self);
        let mut included = Accumulator::new(*self);
        for row in 0..values.len() {
            let value = values.get(row);
            all.update(value);
            if inclusion.includes(row) {
                included.update(value);
            }
        }
        SplitAggregate {
            all: all.finalize(),
            included: included.finalize(),
        }
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finalized output of an accumulator.
#[derive(Debug, Clone, PartialEq)]
pub enum AggOutput {
    Count(usize),
    Sum(f64),
    /// `None` when no numeric value was seen.
    Avg(Option<f64>),
    Min(CellValue),
    Max(CellValue),
}

impl AggOutput {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AggOutput::Count(n) => Some(*n as f64),
            AggOutput::Sum(s) => Some(*s),
            AggOutput::Avg(avg) => *avg,
            AggOutput::Min(CellValue::Number(n)) | AggOutput::Max(CellValue::Number(n)) => Some(*n),
            _ => None,
        }
    }
}

/// Statistic over every row alongside the same statistic over included rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitAggregate {
    pub all: AggOutput,
    pub included: AggOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum UniqueKey {
    Number(u64),
    Text(String),
    Instant(DateTime<Utc>),
}

#[derive(Debug, Clone)]
enum Accumulator {
    Count(usize),
    CountNonNull(usize),
    CountUnique(HashSet<UniqueKey>),
    Sum(f64),
    Avg { sum: f64, count: usize },
    Min(Option<CellValue>),
    Max(Option<CellValue>),
}

impl Accumulator {
    fn new(op: AggregateOp) -> Self {
        match op {
            AggregateOp::Count => Accumulator::Count(0),
            AggregateOp::CountNonNull => Accumulator::CountNonNull(0),
            AggregateOp::CountUnique => Accumulator::CountUnique(HashSet::new()),
            AggregateOp::Sum => Accumulator::Sum(0.0),
            AggregateOp::Avg => Accumulator::Avg { sum: 0.0, count: 0 },
            AggregateOp::Min => Accumulator::Min(None),
            AggregateOp::Max => Accumulator::Max(None),
        }
    }

    fn update(&mut self, value: ValueRef<'_>) {
        match self {
            Accumulator::Count(n) => *n += 1,
            Accumulator::CountNonNull(n) => {
                if !value.is_null() {
                    *n += 1;
                }
            }
            Accumulator::CountUnique(seen) => {
                let key = match value {
                    ValueRef::Null => return,
                    // +0.0 and -0.0 count as one value
                    ValueRef::Number(n) => UniqueKey::Number((n + 0.0).to_bits()),
                    ValueRef::Text(s) => UniqueKey::Text(s.to_string()),
                    ValueRef::Instant(t) => UniqueKey::Instant(t),
                };
                seen.insert(key);
            }
            Accumulator::Sum(sum) => {
                if let Some(n) = value.as_number() {
                    *sum += n;
                }
            }
            Accumulator::Avg { sum, count } => {
                if let Some(n) = value.as_number() {
                    *sum += n;
                    *count += 1;
                }
            }
            Accumulator::Min(current) => {
                if value.is_null() {
                    return;
                }
                let replace = current
                    .as_ref()
                    .is_none_or(|c| value.cmp_ascending(&c.as_value_ref()).is_lt());
                if replace {
                    *current = Some(value.to_owned_value());
                }
            }
            Accumulator::Max(current) => {
                if value.is_null() {
                    return;
                }
                let replace = current
                    .as_ref()
                    .is_none_or(|c| value.cmp_ascending(&c.as_value_ref()).is_gt());
                if replace {
                    *current = Some(value.to_owned_value());
                }
            }
        }
    }

    fn finalize(self) -> AggOutput {
        match self {
            Accumulator::Count(n) | Accumulator::CountNonNull(n) => AggOutput::Count(n),
            Accumulator::CountUnique(seen) => AggOutput::Count(seen.len()),
            Accumulator::Sum(sum) => AggOutput::Sum(sum),
            Accumulator::Avg { sum, count } => {
                AggOutput::Avg((count > 0).then(|| sum / count as f64))
            }
            Accumulator::Min(v) => AggOutput::Min(v.unwrap_or(CellValue::Null)),
            Accumulator::Max(v) => AggOutput::Max(v.unwrap_or(CellValue::Null)),
        }
    }
}

/// Mean of the included numeric values; nulls and excluded rows are skipped.
pub fn mean_of_included(values: ColumnValues<'_>, inclusion: &Inclusion<'_>) -> Option<f64> {
    let numbers = values.as_numbers()?;
    let (sum, count) = numbers
        .iter()
        .enumerate()
        .filter(|(row, _)| inclusion.includes(*row))
        .filter_map(|(_, v)| *v)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
