// ============================================================================
// BCD Comparator
// Magnitude-only comparison ignoring leading zero bits
// ============================================================================

use std::cmp::Ordering;

use crate::bits::BitVec;

/// Compare two magnitudes, ignoring stored width.
///
/// Each operand's effective length is the position of its highest set
/// bit, so vectors of different stored widths compare correctly. When
/// the effective lengths match, the first differing bit from the top
/// decides.
pub fn compare_magnitude(a: &BitVec, b: &BitVec) -> Ordering {
    let effective_a = a.highest_set_bit().map_or(0, |bit| bit + 1);
    let effective_b = b.highest_set_bit().map_or(0, |bit| bit + 1);
    if effective_a != effective_b {
        return effective_a.cmp(&effective_b);
    }
    for index in (0..effective_a).rev() {
        match (a.get(index), b.get(index)) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {},
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::convert::encode_magnitude;

    #[test]
    fn test_equal_magnitudes() {
        let a = encode_magnitude(123);
        let b = encode_magnitude(123);
        assert_eq!(compare_magnitude(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_ordering_by_effective_length() {
        let small = encode_magnitude(99);
        let large = encode_magnitude(100);
        assert_eq!(compare_magnitude(&small, &large), Ordering::Less);
        assert_eq!(compare_magnitude(&large, &small), Ordering::Greater);
    }

    #[test]
    fn test_stored_width_is_ignored() {
        // 5 stored in 4 digit groups still equals 5 stored in one
        let narrow = encode_magnitude(5);
        let wide = narrow.resize(16);
        assert_eq!(compare_magnitude(&narrow, &wide), Ordering::Equal);
        assert_eq!(
            compare_magnitude(&wide, &encode_magnitude(6)),
            Ordering::Less
        );
    }

    #[test]
    fn test_same_length_differs_below_top_bit() {
        // 9 = 1001, 8 = 1000: same effective length, decided lower down
        let eight = encode_magnitude(8);
        let nine = encode_magnitude(9);
        assert_eq!(compare_magnitude(&nine, &eight), Ordering::Greater);
    }

    #[test]
    fn test_zero_comparisons() {
        let zero = encode_magnitude(0);
        let wide_zero = BitVec::new(20);
        let one = encode_magnitude(1);
        assert_eq!(compare_magnitude(&zero, &wide_zero), Ordering::Equal);
        assert_eq!(compare_magnitude(&zero, &one), Ordering::Less);
    }
}
