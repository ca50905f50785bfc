use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Value kind a column is declared with in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Numeric,
    Textual,
    Temporal,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "number",
            ColumnKind::Textual => "string",
            ColumnKind::Temporal => "datetime",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "number" | "numeric" => Ok(ColumnKind::Numeric),
            "string" | "text" | "textual" => Ok(ColumnKind::Textual),
            "datetime" | "date" | "temporal" => Ok(ColumnKind::Temporal),
            _ => Err(EngineError::UnsupportedKind(s.to_string())),
        }
    }
}

/// Where nulls land in an ascending permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NullOrder {
    #[default]
    First,
    Last,
}

impl NullOrder {
    /// Orders two optional values, placing `None` according to `self`.
    pub fn compare<T, F>(&self, a: Option<T>, b: Option<T>, cmp: F) -> Ordering
    where
        F: FnOnce(T, T) -> Ordering,
    {
        match (a, b) {
            (Some(a), Some(b)) => cmp(a, b),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => match self {
                NullOrder::First => Ordering::Less,
                NullOrder::Last => Ordering::Greater,
            },
            (Some(_), None) => match self {
                NullOrder::First => Ordering::Greater,
                NullOrder::Last => Ordering::Less,
            },
        }
    }
}

/// Borrowed view of a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    Null,
    Number(f64),
    Text(&'a str),
    Instant(DateTime<Utc>),
}

impl<'a> ValueRef<'a> {
    pub fn is_null(&self) -> bool {
        matches!(self, ValueRef::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ValueRef::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            ValueRef::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            ValueRef::Instant(t) => Some(*t),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            ValueRef::Null => 0,
            ValueRef::Number(_) => 1,
            ValueRef::Text(_) => 2,
            ValueRef::Instant(_) => 3,
        }
    }

    /// Total ascending order: nulls first, then by value. Values of
    /// different kinds order by kind so the relation stays total.
    pub fn cmp_ascending(&self, other: &ValueRef<'_>) -> Ordering {
        match (self, other) {
            (ValueRef::Number(a), ValueRef::Number(b)) => a.total_cmp(b),
            (ValueRef::Text(a), ValueRef::Text(b)) => a.cmp(b),
            (ValueRef::Instant(a), ValueRef::Instant(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    pub fn to_owned_value(&self) -> CellValue {
        match self {
            ValueRef::Null => CellValue::Null,
            ValueRef::Number(n) => CellValue::Number(*n),
            ValueRef::Text(s) => CellValue::Text((*s).to_string()),
            ValueRef::Instant(t) => CellValue::Instant(*t),
        }
    }
}

/// Owned cell value as yielded by the materializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Number(f64),
    Text(String),
    Instant(DateTime<Utc>),
}

impl CellValue {
    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            CellValue::Null => ValueRef::Null,
            CellValue::Number(n) => ValueRef::Number(*n),
            CellValue::Text(s) => ValueRef::Text(s),
            CellValue::Instant(t) => ValueRef::Instant(*t),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        CellValue::Instant(value)
    }
}
