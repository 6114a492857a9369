// ============================================================================
// Bit Vector
// Word-backed growable bit container with pure resize semantics
// ============================================================================

use smallvec::{smallvec, SmallVec};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of bits per backing word
const WORD_BITS: usize = u64::BITS as usize;

/// A fixed-width-per-instance vector of bits.
///
/// Backed by 64-bit words; vectors up to 128 bits (32 BCD digits) live
/// inline without heap allocation. Bit index 0 is the least-significant
/// bit. Reads past the end return `false` and writes past the end are
/// no-ops, so callers never hit undefined behavior on a width mismatch.
///
/// All bits at index `>= len` are kept zero in the backing words. This
/// makes derived equality value equality and lets `is_zero` scan whole
/// words.
///
/// # Example
/// ```ignore
/// use bcd_engine::bits::BitVec;
///
/// let mut bits = BitVec::new(8);
/// bits.set(1, true);
/// bits.set(2, true);               // 0000 0110
/// assert_eq!(bits.highest_set_bit(), Some(2));
/// let wider = bits.resize(12);     // new vector, high bits zero
/// assert_eq!(wider.len(), 12);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BitVec {
    words: SmallVec<[u64; 2]>,
    len: usize,
}

impl BitVec {
    /// Create a vector of `len` bits, all zero.
    pub fn new(len: usize) -> Self {
        Self {
            words: smallvec![0u64; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Number of bits in the vector.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the vector holds no bits at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read the bit at `index`.
    ///
    /// Out-of-range reads return `false`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    /// Write the bit at `index`.
    ///
    /// Out-of-range writes are no-ops.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        if index >= self.len {
            return;
        }
        let mask = 1u64 << (index % WORD_BITS);
        if value {
            self.words[index / WORD_BITS] |= mask;
        } else {
            self.words[index / WORD_BITS] &= !mask;
        }
    }

    /// Produce a new vector of `new_len` bits holding this vector's value.
    ///
    /// Growing fills the new high bits with zero; shrinking truncates,
    /// masking any partial tail word. The receiver is never mutated.
    pub fn resize(&self, new_len: usize) -> Self {
        let mut resized = Self::new(new_len);
        let words_to_copy = resized.words.len().min(self.words.len());
        resized.words[..words_to_copy].copy_from_slice(&self.words[..words_to_copy]);
        resized.mask_tail();
        resized
    }

    /// Check whether every bit is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Index of the most-significant set bit, or `None` for a zero vector.
    pub fn highest_set_bit(&self) -> Option<usize> {
        for (word_index, &word) in self.words.iter().enumerate().rev() {
            if word != 0 {
                let top = WORD_BITS - 1 - word.leading_zeros() as usize;
                return Some(word_index * WORD_BITS + top);
            }
        }
        None
    }

    /// Produce a new vector of `new_len` bits with this vector's bits
    /// re-indexed upward by `offset`. Bits that land at or beyond
    /// `new_len` are dropped.
    ///
    /// Word-level: each target word is assembled from the two source
    /// words that straddle it, so no per-bit index arithmetic is needed.
    pub fn shift_left(&self, offset: usize, new_len: usize) -> Self {
        let mut shifted = Self::new(new_len);
        let word_offset = offset / WORD_BITS;
        let bit_offset = offset % WORD_BITS;
        for target in word_offset..shifted.words.len() {
            let source = target - word_offset;
            let low = self.words.get(source).copied().unwrap_or(0);
            shifted.words[target] = if bit_offset == 0 {
                low
            } else {
                let high = match source.checked_sub(1) {
                    Some(prev) => self.words.get(prev).copied().unwrap_or(0),
                    None => 0,
                };
                (low << bit_offset) | (high >> (WORD_BITS - bit_offset))
            };
        }
        shifted.mask_tail();
        shifted
    }

    // Zero every bit at index >= len in the backing words.
    fn mask_tail(&mut self) {
        let tail_bits = self.len % WORD_BITS;
        if tail_bits != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << tail_bits) - 1;
            }
        }
    }
}

impl fmt::Debug for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVec<{}>(", self.len)?;
        for index in (0..self.len).rev() {
            write!(f, "{}", if self.get(index) { '1' } else { '0' })?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let bits = BitVec::new(12);
        assert_eq!(bits.len(), 12);
        assert!(bits.is_zero());
        assert!((0..12).all(|i| !bits.get(i)));
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut bits = BitVec::new(8);
        bits.set(0, true);
        bits.set(5, true);
        assert!(bits.get(0));
        assert!(bits.get(5));
        assert!(!bits.get(1));
        bits.set(5, false);
        assert!(!bits.get(5));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut bits = BitVec::new(4);
        assert!(!bits.get(4));
        assert!(!bits.get(1000));
        bits.set(4, true); // no-op
        assert!(bits.is_zero());
    }

    #[test]
    fn test_resize_grow_zero_fills() {
        let mut bits = BitVec::new(4);
        bits.set(3, true);
        let grown = bits.resize(12);
        assert_eq!(grown.len(), 12);
        assert!(grown.get(3));
        assert!((4..12).all(|i| !grown.get(i)));
        // original untouched
        assert_eq!(bits.len(), 4);
    }

    #[test]
    fn test_resize_truncate_masks_tail() {
        let mut bits = BitVec::new(12);
        bits.set(1, true);
        bits.set(11, true);
        let shrunk = bits.resize(4);
        assert_eq!(shrunk.len(), 4);
        assert!(shrunk.get(1));
        // bit 11 must not survive in the backing word
        assert_eq!(shrunk.highest_set_bit(), Some(1));
        assert_eq!(shrunk, {
            let mut expected = BitVec::new(4);
            expected.set(1, true);
            expected
        });
    }

    #[test]
    fn test_resize_across_word_boundary() {
        let mut bits = BitVec::new(72);
        bits.set(70, true);
        bits.set(3, true);
        let shrunk = bits.resize(64);
        assert_eq!(shrunk.highest_set_bit(), Some(3));
        let grown = shrunk.resize(72);
        assert!(!grown.get(70));
        assert!(grown.get(3));
    }

    #[test]
    fn test_highest_set_bit() {
        let mut bits = BitVec::new(68);
        assert_eq!(bits.highest_set_bit(), None);
        bits.set(0, true);
        assert_eq!(bits.highest_set_bit(), Some(0));
        bits.set(67, true);
        assert_eq!(bits.highest_set_bit(), Some(67));
    }

    #[test]
    fn test_shift_left_basic() {
        let mut bits = BitVec::new(8);
        bits.set(0, true);
        bits.set(1, true); // 0011
        let shifted = bits.shift_left(4, 12);
        assert!(!shifted.get(0));
        assert!(!shifted.get(1));
        assert!(shifted.get(4));
        assert!(shifted.get(5));
        assert_eq!(shifted.highest_set_bit(), Some(5));
    }

    #[test]
    fn test_shift_left_drops_excess_bits() {
        let mut bits = BitVec::new(8);
        bits.set(7, true);
        let shifted = bits.shift_left(4, 8); // bit 7 would land at 11
        assert!(shifted.is_zero());
    }

    #[test]
    fn test_shift_left_across_words() {
        let mut bits = BitVec::new(64);
        bits.set(62, true);
        let shifted = bits.shift_left(4, 72);
        assert_eq!(shifted.highest_set_bit(), Some(66));
    }

    #[test]
    fn test_shift_left_zero_offset_is_copy() {
        let mut bits = BitVec::new(8);
        bits.set(2, true);
        let shifted = bits.shift_left(0, 8);
        assert_eq!(shifted, bits);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut bits = BitVec::new(8);
        bits.set(2, true);
        let mut copy = bits.clone();
        copy.set(2, false);
        assert!(bits.get(2));
        assert!(!copy.get(2));
    }

    #[test]
    fn test_debug_renders_msb_first() {
        let mut bits = BitVec::new(4);
        bits.set(0, true);
        bits.set(3, true);
        assert_eq!(format!("{:?}", bits), "BitVec<4>(1001)");
    }
}
