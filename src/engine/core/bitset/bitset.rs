use crate::engine::errors::EngineError;

const WORD_BITS: usize = 32;
const ONE: u32 = 0x8000_0000;

/// Packed one-bit-per-row membership mask.
///
/// Bit `n` lives in word `n >> 5`, counted from the most significant bit, so
/// the words read left to right in row order. The length is fixed at creation.
///
/// Mutation only happens through `&mut self` or by consuming `self`; a bitset
/// stored in a table sits behind an `Arc` and is never mutated again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitset {
    words: Vec<u32>,
    bits: usize,
}

impl Bitset {
    /// All-zero bitset addressing `row_count` rows.
    pub fn new(row_count: usize) -> Self {
        Self {
            words: vec![0u32; row_count.div_ceil(WORD_BITS)],
            bits: row_count,
        }
    }

    pub fn len(&self) -> usize {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < self.bits, "Bitset index out of bounds");
        self.words[index >> 5] |= ONE >> (index & 31);
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        match self.words.get(index >> 5) {
            Some(word) => (word >> (31 - (index & 31))) & 1 == 1,
            None => false,
        }
    }

    /// ANDs `other` into `self` and hands `self` back.
    ///
    /// Takes `self` by value so the receiver is always a bitset the caller
    /// owns outright; `other` is only read.
    pub fn intersect(mut self, other: &Bitset) -> Result<Self, EngineError> {
        if self.words.len() != other.words.len() {
            return Err(EngineError::LengthMismatch {
                left: self.words.len(),
                right: other.words.len(),
            });
        }
        for (word, rhs) in self.words.iter_mut().zip(other.words.iter()) {
            *word &= *rhs;
        }
        Ok(self)
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Set row indices in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter(|(_, word)| **word != 0)
            .flat_map(|(word_idx, word)| {
                let base = word_idx * WORD_BITS;
                (0..WORD_BITS)
                    .filter(move |bit| (word >> (31 - bit)) & 1 == 1)
                    .map(move |bit| base + bit)
            })
    }
}
