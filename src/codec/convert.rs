// ============================================================================
// Integer Conversion
// Decimal decomposition of native integers to and from digit vectors
// ============================================================================

use arrayvec::ArrayVec;

use crate::bits::BitVec;
use crate::codec::digits::{checked_digit_at, digit_count, set_digit, DIGIT_BITS};
use crate::errors::{BcdError, BcdResult};

/// A u64 magnitude has at most 20 decimal digits
const MAX_U64_DIGITS: usize = 20;

/// Encode an unsigned magnitude as a digit vector, least-significant
/// digit first. Zero encodes as a single `0000` group.
pub fn encode_magnitude(value: u64) -> BitVec {
    let mut digits = ArrayVec::<u8, MAX_U64_DIGITS>::new();
    let mut rest = value;
    loop {
        digits.push((rest % 10) as u8);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    let mut bits = BitVec::new(digits.len() * DIGIT_BITS);
    for (group, &digit) in digits.iter().enumerate() {
        set_digit(&mut bits, group, digit);
    }
    bits
}

/// Decode a digit vector back to an unsigned magnitude.
///
/// Walks digit groups low-to-high, accumulating `digit * 10^position`
/// with checked arithmetic.
///
/// # Errors
/// - `InvalidDigit` when any group decodes outside `0..=9`
/// - `Overflow` when the value exceeds `u64` (leading zero groups past
///   the `u64` digit range are tolerated; only a non-zero digit there
///   overflows)
pub fn decode_magnitude(bits: &BitVec) -> BcdResult<u64> {
    let mut value: u64 = 0;
    let mut scale: u64 = 1;
    let mut scale_overflowed = false;
    for group in 0..digit_count(bits) {
        let digit = checked_digit_at(bits, group)?;
        if digit != 0 {
            if scale_overflowed {
                return Err(BcdError::Overflow);
            }
            let term = u64::from(digit)
                .checked_mul(scale)
                .ok_or(BcdError::Overflow)?;
            value = value.checked_add(term).ok_or(BcdError::Overflow)?;
        }
        match scale.checked_mul(10) {
            Some(next) => scale = next,
            None => scale_overflowed = true,
        }
    }
    Ok(value)
}
