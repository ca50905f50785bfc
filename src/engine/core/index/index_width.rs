/// Narrowest unsigned width able to address every row of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IndexWidth {
    U8,
    U16,
    U32,
    /// Fallback for row counts beyond the 32-bit range.
    U64,
}

impl IndexWidth {
    /// Picks the smallest width whose maximum is >= `row_count - 1`.
    pub fn for_row_count(row_count: usize) -> Self {
        let max_index = row_count.saturating_sub(1) as u64;
        if max_index <= u8::MAX as u64 {
            IndexWidth::U8
        } else if max_index <= u16::MAX as u64 {
            IndexWidth::U16
        } else if max_index <= u32::MAX as u64 {
            IndexWidth::U32
        } else {
            IndexWidth::U64
        }
    }

    pub fn bytes(&self) -> usize {
        match self {
            IndexWidth::U8 => 1,
            IndexWidth::U16 => 2,
            IndexWidth::U32 => 4,
            IndexWidth::U64 => 8,
        }
    }
}

impl std::fmt::Display for IndexWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "u{}", self.bytes() * 8)
    }
}
