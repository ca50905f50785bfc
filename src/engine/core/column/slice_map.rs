use std::collections::HashMap;
use std::ops::Range;

use crate::engine::core::index::RowIndexes;

/// Contiguous run `[start, start + len)` inside a column's ascending pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub start: usize,
    pub len: usize,
}

impl Slice {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Maps each distinct value of a textual column to the run of pointers
/// holding every row with that value. The null run has its own slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceMap {
    by_value: HashMap<String, Slice>,
    nulls: Option<Slice>,
}

impl SliceMap {
    /// Single pass over `pointers`, which must already order `values` ascending.
    pub fn build(values: &[Option<String>], pointers: &RowIndexes) -> Self {
        let mut map = SliceMap::default();
        let mut cursor: Option<Option<&str>> = None;
        let mut start = 0;

        for position in 0..pointers.len() {
            let value = values[pointers.get(position)].as_deref();
            if cursor != Some(value) {
                if let Some(previous) = cursor {
                    map.insert(previous, start, position - start);
                }
                cursor = Some(value);
                start = position;
            }
        }
        if let Some(last) = cursor {
            map.insert(last, start, pointers.len() - start);
        }
        map
    }

    fn insert(&mut self, value: Option<&str>, start: usize, len: usize) {
        let slice = Slice { start, len };
        match value {
            Some(v) => {
                self.by_value.insert(v.to_string(), slice);
            }
            None => self.nulls = Some(slice),
        }
    }

    pub fn get(&self, value: &str) -> Option<Slice> {
        self.by_value.get(value).copied()
    }

    pub fn nulls(&self) -> Option<Slice> {
        self.nulls
    }

    /// Number of distinct runs, the null run included.
    pub fn len(&self) -> usize {
        self.by_value.len() + usize::from(self.nulls.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All runs, in no particular order.
    pub fn slices(&self) -> impl Iterator<Item = (Option<&str>, Slice)> + '_ {
        self.nulls
            .iter()
            .map(|slice| (None, *slice))
            .chain(self.by_value.iter().map(|(k, v)| (Some(k.as_str()), *v)))
    }
}
