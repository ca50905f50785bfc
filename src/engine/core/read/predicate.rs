use std::ops::Bound;

use crate::engine::types::ValueRef;

/// A per-field predicate answerable from a column's precomputed structures.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Numeric range, answered by binary search over the ascending pointers.
    Range { min: Bound<f64>, max: Bound<f64> },
    /// Discrete text values, answered from the slice map.
    OneOf {
        values: Vec<String>,
        include_null: bool,
    },
}

impl Predicate {
    /// Inclusive on both ends.
    pub fn between(min: f64, max: f64) -> Self {
        Predicate::Range {
            min: Bound::Included(min),
            max: Bound::Included(max),
        }
    }

    pub fn greater_than(min: f64) -> Self {
        Predicate::Range {
            min: Bound::Excluded(min),
            max: Bound::Unbounded,
        }
    }

    pub fn at_least(min: f64) -> Self {
        Predicate::Range {
            min: Bound::Included(min),
            max: Bound::Unbounded,
        }
    }

    pub fn less_than(max: f64) -> Self {
        Predicate::Range {
            min: Bound::Unbounded,
            max: Bound::Excluded(max),
        }
    }

    pub fn at_most(max: f64) -> Self {
        Predicate::Range {
            min: Bound::Unbounded,
            max: Bound::Included(max),
        }
    }

    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::OneOf {
            values: values.into_iter().map(Into::into).collect(),
            include_null: false,
        }
    }

    pub fn is_null() -> Self {
        Predicate::OneOf {
            values: Vec::new(),
            include_null: true,
        }
    }

    /// Also match null rows. No effect on ranges, which never match nulls.
    pub fn or_null(self) -> Self {
        match self {
            Predicate::OneOf { values, .. } => Predicate::OneOf {
                values,
                include_null: true,
            },
            range => range,
        }
    }

    /// Row-at-a-time evaluation of the same predicate.
    pub fn matches(&self, value: ValueRef<'_>) -> bool {
        match (self, value) {
            (Predicate::Range { min, max }, ValueRef::Number(v)) => {
                let above_min = match min {
                    Bound::Included(m) => v >= *m,
                    Bound::Excluded(m) => v > *m,
                    Bound::Unbounded => true,
                };
                let below_max = match max {
                    Bound::Included(m) => v <= *m,
                    Bound::Excluded(m) => v < *m,
                    Bound::Unbounded => true,
                };
                above_min && below_max
            }
            (Predicate::OneOf { values, .. }, ValueRef::Text(s)) => {
                values.iter().any(|candidate| candidate == s)
            }
            (Predicate::OneOf { include_null, .. }, ValueRef::Null) => *include_null,
            _ => false,
        }
    }
}
