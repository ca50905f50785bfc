use std::ops::{Bound, Range};

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::engine::core::column::ascending_pointers::ascending_pointers;
use crate::engine::core::column::coercion;
use crate::engine::core::column::column_values::ColumnValues;
use crate::engine::core::column::slice_map::{Slice, SliceMap};
use crate::engine::core::index::RowIndexes;
use crate::engine::types::{ColumnKind, NullOrder, ValueRef};

/// Numeric values plus their ascending permutation.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    values: Vec<Option<f64>>,
    pointers: RowIndexes,
    null_order: NullOrder,
}

impl NumericColumn {
    pub fn new(mut values: Vec<Option<f64>>, null_order: NullOrder) -> Self {
        for v in values.iter_mut() {
            if v.is_some_and(f64::is_nan) {
                *v = None;
            }
        }
        let pointers = ascending_pointers(&values, null_order, |a: &f64, b: &f64| a.total_cmp(b));
        Self {
            values,
            pointers,
            null_order,
        }
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn pointers(&self) -> &RowIndexes {
        &self.pointers
    }

    pub fn null_order(&self) -> NullOrder {
        self.null_order
    }

    /// Positions in `pointers` whose rows fall within `[min, max]` (per the bounds).
    ///
    /// Two binary searches; null rows never match.
    pub fn range_span(&self, min: Bound<f64>, max: Bound<f64>) -> Range<usize> {
        if bound_is_nan(&min) || bound_is_nan(&max) {
            return 0..0;
        }
        let nulls_first = self.null_order == NullOrder::First;
        let lo = self.pointers.partition_point(|row| match self.values[row] {
            None => nulls_first,
            Some(v) => below_min(&min, v),
        });
        let hi = self.pointers.partition_point(|row| match self.values[row] {
            None => nulls_first,
            Some(v) => !above_max(&max, v),
        });
        lo..hi.max(lo)
    }
}

fn bound_is_nan(bound: &Bound<f64>) -> bool {
    match bound {
        Bound::Included(b) | Bound::Excluded(b) => b.is_nan(),
        Bound::Unbounded => false,
    }
}

fn below_min(min: &Bound<f64>, v: f64) -> bool {
    match min {
        Bound::Included(m) => v < *m,
        Bound::Excluded(m) => v <= *m,
        Bound::Unbounded => false,
    }
}

fn above_max(max: &Bound<f64>, v: f64) -> bool {
    match max {
        Bound::Included(m) => v > *m,
        Bound::Excluded(m) => v >= *m,
        Bound::Unbounded => false,
    }
}

/// Text values, their ascending permutation, and the per-value run map.
#[derive(Debug, Clone, PartialEq)]
pub struct TextualColumn {
    values: Vec<Option<String>>,
    pointers: RowIndexes,
    slices: SliceMap,
    null_order: NullOrder,
}

impl TextualColumn {
    pub fn new(values: Vec<Option<String>>, null_order: NullOrder) -> Self {
        let pointers = ascending_pointers(&values, null_order, |a: &String, b: &String| a.cmp(b));
        let slices = SliceMap::build(&values, &pointers);
        Self {
            values,
            pointers,
            slices,
            null_order,
        }
    }

    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    pub fn pointers(&self) -> &RowIndexes {
        &self.pointers
    }

    pub fn slices(&self) -> &SliceMap {
        &self.slices
    }

    pub fn null_order(&self) -> NullOrder {
        self.null_order
    }

    /// Positions in `pointers` holding exactly `value`; empty when absent.
    pub fn value_span(&self, value: Option<&str>) -> Range<usize> {
        let slice = match value {
            Some(v) => self.slices.get(v),
            None => self.slices.nulls(),
        };
        slice.as_ref().map_or(0..0, Slice::range)
    }
}

/// Date-time values. No precomputed structures.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalColumn {
    values: Vec<Option<DateTime<Utc>>>,
}

impl TemporalColumn {
    pub fn new(values: Vec<Option<DateTime<Utc>>>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Option<DateTime<Utc>>] {
        &self.values
    }
}

/// One column of the store, tagged by value kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(NumericColumn),
    Textual(TextualColumn),
    Temporal(TemporalColumn),
}

impl Column {
    pub fn numeric(values: Vec<Option<f64>>, null_order: NullOrder) -> Self {
        Column::Numeric(NumericColumn::new(values, null_order))
    }

    pub fn textual(values: Vec<Option<String>>, null_order: NullOrder) -> Self {
        Column::Textual(TextualColumn::new(values, null_order))
    }

    pub fn temporal(values: Vec<Option<DateTime<Utc>>>) -> Self {
        Column::Temporal(TemporalColumn::new(values))
    }

    /// Coerces field `name` of every record to `kind` and builds the column.
    pub fn from_records(
        name: &str,
        kind: ColumnKind,
        records: &[Value],
        null_order: NullOrder,
    ) -> Self {
        let column = match kind {
            ColumnKind::Numeric => Column::numeric(
                records
                    .iter()
                    .map(|r| coercion::to_number(r.get(name)))
                    .collect(),
                null_order,
            ),
            ColumnKind::Textual => Column::textual(
                records
                    .iter()
                    .map(|r| coercion::to_text(r.get(name)))
                    .collect(),
                null_order,
            ),
            ColumnKind::Temporal => Column::temporal(
                records
                    .iter()
                    .map(|r| coercion::to_instant(r.get(name)))
                    .collect(),
            ),
        };
        debug!(
            target: "colbundle::table",
            "Built {} column '{}' ({} rows, {} distinct runs)",
            kind,
            name,
            column.len(),
            column.as_textual().map_or(0, |c| c.slices().len())
        );
        column
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Numeric(_) => ColumnKind::Numeric,
            Column::Textual(_) => ColumnKind::Textual,
            Column::Temporal(_) => ColumnKind::Temporal,
        }
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> ColumnValues<'_> {
        match self {
            Column::Numeric(c) => ColumnValues::Numeric(&c.values),
            Column::Textual(c) => ColumnValues::Textual(&c.values),
            Column::Temporal(c) => ColumnValues::Temporal(&c.values),
        }
    }

    #[inline]
    pub fn value(&self, row: usize) -> ValueRef<'_> {
        self.values().get(row)
    }

    /// Ascending permutation, for the kinds that carry one.
    pub fn pointers(&self) -> Option<&RowIndexes> {
        match self {
            Column::Numeric(c) => Some(&c.pointers),
            Column::Textual(c) => Some(&c.pointers),
            Column::Temporal(_) => None,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericColumn> {
        match self {
            Column::Numeric(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_textual(&self) -> Option<&TextualColumn> {
        match self {
            Column::Textual(c) => Some(c),
            _ => None,
        }
    }
}
