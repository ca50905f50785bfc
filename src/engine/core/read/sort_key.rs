use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::engine::types::ValueRef;

pub type Comparator = Arc<dyn Fn(ValueRef<'_>, ValueRef<'_>) -> Ordering + Send + Sync>;

/// A field paired with the comparator used to order it.
#[derive(Clone)]
pub struct SortKey {
    field: String,
    comparator: Comparator,
    label: &'static str,
}

impl SortKey {
    /// Nulls first, then ascending values.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            comparator: Arc::new(|a: ValueRef<'_>, b: ValueRef<'_>| a.cmp_ascending(&b)),
            label: "ASC",
        }
    }

    /// Exact reverse of `ascending`, so nulls come last.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            comparator: Arc::new(|a: ValueRef<'_>, b: ValueRef<'_>| b.cmp_ascending(&a)),
            label: "DESC",
        }
    }

    pub fn by<F>(field: impl Into<String>, comparator: F) -> Self
    where
        F: Fn(ValueRef<'_>, ValueRef<'_>) -> Ordering + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            comparator: Arc::new(comparator),
            label: "CUSTOM",
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    #[inline]
    pub fn compare(&self, a: ValueRef<'_>, b: ValueRef<'_>) -> Ordering {
        (self.comparator)(a, b)
    }
}

impl fmt::Debug for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SortKey({} {})", self.field, self.label)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.label)
    }
}
