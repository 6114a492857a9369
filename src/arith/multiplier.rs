// ============================================================================
// BCD Multiplier
// Long multiplication by repeated addition per multiplier digit
// ============================================================================

use crate::arith::adder::add_magnitude;
use crate::bits::BitVec;
use crate::codec::digits::{aligned_width, checked_digit_at, digit_count, DIGIT_BITS};
use crate::errors::BcdResult;

/// Multiply two magnitudes.
///
/// For each digit of `b` (low to high): build the partial product
/// `a * digit` by `digit` repeated additions — deliberately the simple
/// schoolbook scheme, not a digit product table — place it at the
/// digit's decimal position, and accumulate into the running total,
/// re-padding both sides to the wider width before every addition.
///
/// The result buffer is `len(a) + len(b)` bits, which decimal digit
/// counts guarantee is enough; bits shifted past it would be dropped,
/// tolerated defensively. Sign is the caller's concern.
///
/// # Errors
/// Returns `InvalidDigit` when a multiplier digit decodes outside
/// `0..=9` — corrupted input is reported, never skipped over.
pub fn multiply_magnitude(a: &BitVec, b: &BitVec) -> BcdResult<BitVec> {
    let a_padded = a.resize(aligned_width(a.len()));
    let b_padded = b.resize(aligned_width(b.len()));

    let result_width = a_padded.len() + b_padded.len();
    let mut total = BitVec::new(result_width);

    for group in 0..digit_count(&b_padded) {
        let digit = checked_digit_at(&b_padded, group)?;
        if digit == 0 {
            continue;
        }

        let operand = a_padded.resize(result_width);
        let mut partial = BitVec::new(result_width);
        for _ in 0..digit {
            let width = partial.len().max(operand.len());
            partial = add_magnitude(&partial.resize(width), &operand.resize(width))?;
        }

        let shifted = partial.shift_left(group * DIGIT_BITS, result_width);

        let width = total.len().max(shifted.len());
        total = add_magnitude(&total.resize(width), &shifted.resize(width))?;
    }

    tracing::debug!(width = total.len(), "accumulated product magnitude");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::convert::{decode_magnitude, encode_magnitude};
    use crate::errors::BcdError;

    fn multiply_values(a: u64, b: u64) -> u64 {
        let product = multiply_magnitude(&encode_magnitude(a), &encode_magnitude(b)).unwrap();
        decode_magnitude(&product).unwrap()
    }

    #[test]
    fn test_single_digit_products() {
        assert_eq!(multiply_values(7, 8), 56);
        assert_eq!(multiply_values(9, 9), 81);
    }

    #[test]
    fn test_multi_digit_products() {
        assert_eq!(multiply_values(99, 99), 9801);
        assert_eq!(multiply_values(123, 456), 56088);
        assert_eq!(multiply_values(1001, 99), 99099);
    }

    #[test]
    fn test_zero_operand() {
        assert_eq!(multiply_values(0, 12345), 0);
        assert_eq!(multiply_values(12345, 0), 0);
    }

    #[test]
    fn test_identity() {
        assert_eq!(multiply_values(1, 987), 987);
        assert_eq!(multiply_values(987, 1), 987);
    }

    #[test]
    fn test_result_width_bound() {
        let a = encode_magnitude(999);
        let b = encode_magnitude(99);
        let product = multiply_magnitude(&a, &b).unwrap();
        // 3 + 2 digit groups
        assert_eq!(product.len(), a.len() + b.len());
        assert_eq!(decode_magnitude(&product), Ok(98901));
    }

    #[test]
    fn test_interior_zero_digits_skip() {
        assert_eq!(multiply_values(105, 205), 21525);
        assert_eq!(multiply_values(1000, 1000), 1_000_000);
    }

    #[test]
    fn test_invalid_multiplier_digit() {
        let a = encode_magnitude(3);
        let mut bad = encode_magnitude(5);
        bad.set(1, true);
        bad.set(3, true); // nibble now 1111
        assert_eq!(
            multiply_magnitude(&a, &bad),
            Err(BcdError::InvalidDigit(15))
        );
    }

    #[test]
    fn test_exhaustive_small_range() {
        for a in 0u64..=20 {
            for b in 0u64..=20 {
                assert_eq!(multiply_values(a, b), a * b, "a={a} b={b}");
            }
        }
    }
}
