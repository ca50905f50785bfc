use indexmap::IndexMap;
use tracing::debug;

use crate::engine::core::bitset::Bitset;
use crate::engine::core::column::ColumnValues;
use crate::engine::core::read::aggregate::{AggregateOp, SplitAggregate};
use crate::engine::core::table::Table;
use crate::engine::errors::EngineError;

/// Membership test derived from a table's active filter.
#[derive(Debug, Clone, Copy)]
pub enum Inclusion<'a> {
    All,
    Filtered(&'a Bitset),
}

impl<'a> Inclusion<'a> {
    pub fn of(table: &'a Table) -> Self {
        match table.filter() {
            Some(bits) => Inclusion::Filtered(bits),
            None => Inclusion::All,
        }
    }

    #[inline]
    pub fn includes(&self, row: usize) -> bool {
        match self {
            Inclusion::All => true,
            Inclusion::Filtered(bits) => bits.contains(row),
        }
    }
}

type Aggregation<'f, R> = Box<dyn Fn(ColumnValues<'_>, &Inclusion<'_>) -> R + 'f>;

/// Named aggregations, each over the full raw values of one column.
///
/// Aggregations get every value plus the inclusion test instead of a
/// filtered copy, so one pass can feed both an all-rows and an
/// included-rows accumulator.
pub struct Rollup<'f, R> {
    aggregations: Vec<(String, String, Aggregation<'f, R>)>,
}

impl<'f, R> Default for Rollup<'f, R> {
    fn default() -> Self {
        Self {
            aggregations: Vec::new(),
        }
    }
}

impl<'f, R> Rollup<'f, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregates `field`, reporting under the field's own name.
    pub fn field<F>(self, field: impl Into<String>, aggregation: F) -> Self
    where
        F: Fn(ColumnValues<'_>, &Inclusion<'_>) -> R + 'f,
    {
        let field = field.into();
        self.named(field.clone(), field, aggregation)
    }

    pub fn named<F>(
        mut self,
        output: impl Into<String>,
        field: impl Into<String>,
        aggregation: F,
    ) -> Self
    where
        F: Fn(ColumnValues<'_>, &Inclusion<'_>) -> R + 'f,
    {
        self.aggregations
            .push((output.into(), field.into(), Box::new(aggregation)));
        self
    }

    pub fn len(&self) -> usize {
        self.aggregations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregations.is_empty()
    }

    /// Every field is resolved before any aggregation runs.
    pub fn apply(&self, table: &Table) -> Result<IndexMap<String, R>, EngineError> {
        let columns = self
            .aggregations
            .iter()
            .map(|(_, field, _)| table.column(field))
            .collect::<Result<Vec<_>, EngineError>>()?;

        let inclusion = Inclusion::of(table);
        let mut result = IndexMap::with_capacity(self.aggregations.len());
        for ((output, field, aggregation), column) in self.aggregations.iter().zip(columns) {
            debug!(
                target: "colbundle::rollup",
                "Aggregating '{}' into '{}'",
                field,
                output
            );
            result.insert(output.clone(), aggregation(column.values(), &inclusion));
        }
        Ok(result)
    }
}

impl Table {
    pub fn rollup<R>(&self, rollup: &Rollup<'_, R>) -> Result<IndexMap<String, R>, EngineError> {
        rollup.apply(self).inspect_err(EngineError::log_error)
    }

    /// Runs built-in aggregations. Results are keyed `op(field)`, e.g. `avg(age)`.
    pub fn rollup_ops(
        &self,
        ops: &[(&str, AggregateOp)],
    ) -> Result<IndexMap<String, SplitAggregate>, EngineError> {
        let mut rollup = Rollup::new();
        for (field, op) in ops {
            self.column(field)
                .and_then(|column| op.check_kind(field, column.kind()))
                .inspect_err(EngineError::log_error)?;
            let op = *op;
            rollup = rollup.named(op.output_name(field), *field, move |values, inclusion| {
                op.evaluate(values, inclusion)
            });
        }
        rollup.apply(self).inspect_err(EngineError::log_error)
    }
}
