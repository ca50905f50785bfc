use chrono::{DateTime, Utc};

use crate::engine::types::{ColumnKind, ValueRef};

/// Borrowed raw value sequence of one column, index-aligned with the
/// original rows. This is what rollup aggregations receive.
#[derive(Debug, Clone, Copy)]
pub enum ColumnValues<'a> {
    Numeric(&'a [Option<f64>]),
    Textual(&'a [Option<String>]),
    Temporal(&'a [Option<DateTime<Utc>>]),
}

impl<'a> ColumnValues<'a> {
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnValues::Numeric(_) => ColumnKind::Numeric,
            ColumnValues::Textual(_) => ColumnKind::Textual,
            ColumnValues::Temporal(_) => ColumnKind::Temporal,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Textual(v) => v.len(),
            ColumnValues::Temporal(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, row: usize) -> ValueRef<'a> {
        match *self {
            ColumnValues::Numeric(v) => v[row].map_or(ValueRef::Null, ValueRef::Number),
            ColumnValues::Textual(v) => v[row].as_deref().map_or(ValueRef::Null, ValueRef::Text),
            ColumnValues::Temporal(v) => v[row].map_or(ValueRef::Null, ValueRef::Instant),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ValueRef<'a>> + '_ {
        (0..self.len()).map(move |row| self.get(row))
    }

    pub fn as_numbers(&self) -> Option<&'a [Option<f64>]> {
        match *self {
            ColumnValues::Numeric(v) => Some(v),
            _ => None,
        }
    }
}
