use std::cmp::Ordering;

use crate::engine::core::index::RowIndexes;
use crate::engine::types::NullOrder;

/// Builds the permutation visiting `values` in non-decreasing order.
///
/// Ties keep ingestion order since the underlying sort is stable.
pub fn ascending_pointers<T, F>(values: &[Option<T>], null_order: NullOrder, cmp: F) -> RowIndexes
where
    F: Fn(&T, &T) -> Ordering,
{
    RowIndexes::identity(values.len()).sorted_by(|a, b| {
        null_order.compare(values[a].as_ref(), values[b].as_ref(), |x, y| cmp(x, y))
    })
}
