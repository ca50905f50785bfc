use std::cmp::Ordering;

use crate::engine::core::index::IndexWidth;

/// A sequence of row indices stored at the narrowest width that fits the table.
///
/// Used for both ascending pointers and row-visitation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIndexes {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
}

macro_rules! with_indexes {
    ($self:expr, $v:ident => $body:expr) => {
        match $self {
            RowIndexes::U8($v) => $body,
            RowIndexes::U16($v) => $body,
            RowIndexes::U32($v) => $body,
            RowIndexes::U64($v) => $body,
        }
    };
}

impl RowIndexes {
    /// The identity permutation `[0, row_count)`.
    pub fn identity(row_count: usize) -> Self {
        match IndexWidth::for_row_count(row_count) {
            IndexWidth::U8 => RowIndexes::U8((0..row_count).map(|i| i as u8).collect()),
            IndexWidth::U16 => RowIndexes::U16((0..row_count).map(|i| i as u16).collect()),
            IndexWidth::U32 => RowIndexes::U32((0..row_count).map(|i| i as u32).collect()),
            IndexWidth::U64 => RowIndexes::U64((0..row_count).map(|i| i as u64).collect()),
        }
    }

    pub fn width(&self) -> IndexWidth {
        match self {
            RowIndexes::U8(_) => IndexWidth::U8,
            RowIndexes::U16(_) => IndexWidth::U16,
            RowIndexes::U32(_) => IndexWidth::U32,
            RowIndexes::U64(_) => IndexWidth::U64,
        }
    }

    pub fn len(&self) -> usize {
        with_indexes!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row index stored at `position`.
    #[inline]
    pub fn get(&self, position: usize) -> usize {
        with_indexes!(self, v => v[position] as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).map(move |position| self.get(position))
    }

    /// Returns a reordered copy, comparing row indices with `compare`.
    ///
    /// The sort is stable: rows comparing equal keep their current relative order.
    pub fn sorted_by<F>(&self, mut compare: F) -> Self
    where
        F: FnMut(usize, usize) -> Ordering,
    {
        let mut sorted = self.clone();
        with_indexes!(&mut sorted, v => v.sort_by(|a, b| compare(*a as usize, *b as usize)));
        sorted
    }

    /// First position whose row index fails `pred`, assuming `pred` holds for a prefix.
    pub fn partition_point<P>(&self, mut pred: P) -> usize
    where
        P: FnMut(usize) -> bool,
    {
        with_indexes!(self, v => v.partition_point(|row| pred(*row as usize)))
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}
