//! Bitboard sized for an arbitrary N×N grid

/// One bit per cell, row-major, packed into `u64` words.
/// Uses `ceil(cells / 64)` words (a 3×3 board needs one, 26×26 needs eleven).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: Vec<u64>,
    cells: usize,
}

impl Bitboard {
    /// Create empty bitboard covering `cells` cells
    pub fn new(cells: usize) -> Self {
        Self {
            bits: vec![0; cells.div_ceil(64)],
            cells,
        }
    }

    /// Set a bit at index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < self.cells);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Clear a bit at index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < self.cells);
        self.bits[idx / 64] &= !(1u64 << (idx % 64));
    }

    /// Check if bit is set at index
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < self.cells);
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Raw words, lowest cell index first
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.bits
    }

    /// Iterate over set bit indices in ascending order
    pub fn iter_ones(&self) -> BitboardIter<'_> {
        BitboardIter {
            bits: &self.bits,
            word_idx: 0,
            current_word: self.bits.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter<'a> {
    bits: &'a [u64],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.bits.len() {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;

        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        Some(self.word_idx * 64 + bit_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(Bitboard::new(9).words().len(), 1);
        assert_eq!(Bitboard::new(64).words().len(), 1);
        assert_eq!(Bitboard::new(65).words().len(), 2);
        assert_eq!(Bitboard::new(676).words().len(), 11);
    }

    #[test]
    fn test_set_clear_get() {
        let mut bb = Bitboard::new(100);
        bb.set(0);
        bb.set(63);
        bb.set(64);
        bb.set(99);
        assert!(bb.get(63) && bb.get(64));
        assert_eq!(bb.count(), 4);

        bb.clear(63);
        assert!(!bb.get(63));
        assert_eq!(bb.count(), 3);
    }

    #[test]
    fn test_iter_ones_across_words() {
        let mut bb = Bitboard::new(200);
        for idx in [3, 70, 130, 199] {
            bb.set(idx);
        }
        assert_eq!(bb.iter_ones().collect::<Vec<_>>(), vec![3, 70, 130, 199]);
    }

    #[test]
    fn test_iter_ones_empty() {
        let bb = Bitboard::new(9);
        assert!(bb.is_empty());
        assert_eq!(bb.iter_ones().count(), 0);
    }
}
