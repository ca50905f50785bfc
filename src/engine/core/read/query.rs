use tracing::debug;

use crate::engine::core::bitset::Bitset;
use crate::engine::core::column::Column;
use crate::engine::core::read::predicate::Predicate;
use crate::engine::core::table::Table;
use crate::engine::errors::EngineError;

/// Conjunction of per-field predicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    predicates: Vec<(String, Predicate)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, predicate: Predicate) -> Self {
        self.predicates.push((name.into(), predicate));
        self
    }

    pub fn between(self, name: impl Into<String>, min: f64, max: f64) -> Self {
        self.field(name, Predicate::between(min, max))
    }

    pub fn one_of<I, S>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field(name, Predicate::one_of(values))
    }

    pub fn predicates(&self) -> &[(String, Predicate)] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Evaluates every predicate into its own bitset, ANDs them together and
    /// with the table's inherited filter. With no predicates the input table
    /// is returned as is.
    pub fn apply(&self, table: &Table) -> Result<Table, EngineError> {
        let mut combined: Option<Bitset> = None;
        for (field, predicate) in &self.predicates {
            let column = table.column(field)?;
            let bits = evaluate(field, column, predicate, table.row_count())?;
            debug!(
                target: "colbundle::query",
                "Predicate on '{}' matched {} rows",
                field,
                bits.count_ones()
            );
            combined = Some(match combined.take() {
                Some(acc) => acc.intersect(&bits)?,
                None => bits,
            });
        }

        let Some(mut bits) = combined else {
            debug!(target: "colbundle::query", "No predicates, table unchanged");
            return Ok(table.clone());
        };
        if let Some(inherited) = table.filter() {
            bits = bits.intersect(inherited)?;
        }
        debug!(
            target: "colbundle::query",
            "Query kept {} of {} rows",
            bits.count_ones(),
            table.row_count()
        );
        Ok(table.with_filter(bits))
    }
}

/// Builds the bitset of rows matching `predicate`, using only the column's
/// precomputed permutation and slice map.
fn evaluate(
    field: &str,
    column: &Column,
    predicate: &Predicate,
    row_count: usize,
) -> Result<Bitset, EngineError> {
    let mut bits = Bitset::new(row_count);
    match (column, predicate) {
        (Column::Numeric(numeric), Predicate::Range { min, max }) => {
            let pointers = numeric.pointers();
            for position in numeric.range_span(*min, *max) {
                bits.set(pointers.get(position));
            }
        }
        (
            Column::Textual(textual),
            Predicate::OneOf {
                values,
                include_null,
            },
        ) => {
            let pointers = textual.pointers();
            let nulls = include_null.then_some(None);
            for value in values.iter().map(|v| Some(v.as_str())).chain(nulls) {
                for position in textual.value_span(value) {
                    bits.set(pointers.get(position));
                }
            }
        }
        _ => {
            return Err(EngineError::NotImplemented {
                field: field.to_string(),
                kind: column.kind(),
            });
        }
    }
    Ok(bits)
}

impl Table {
    pub fn query(&self, query: &Query) -> Result<Table, EngineError> {
        query.apply(self).inspect_err(EngineError::log_error)
    }
}
