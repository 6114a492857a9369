// ============================================================================
// BCD Adder
// Digit-wise magnitude addition with excess-6 correction and growth
// ============================================================================

use crate::arith::corrector::correct;
use crate::bits::BitVec;
use crate::codec::digits::{digit_at, digit_count, set_digit, DIGIT_BITS};
use crate::errors::{BcdError, BcdResult};

/// Add two magnitudes of equal bit width.
///
/// Iterates digit groups low-to-high: the two nibbles plus the carry
/// from the previous digit are summed in binary, split into a raw 4-bit
/// value and a binary carry, and run through the corrector. A carry
/// surviving the most-significant digit grows the result by one digit
/// group set to `0001`, so the result is `len(a)` or `len(a) + 4` bits.
///
/// Magnitude-only: signs are composed by the caller. Padding both
/// operands to a common digit-aligned width is the caller's job.
///
/// # Errors
/// Returns `SizeMismatch` when the operands differ in width; that is a
/// caller bug, not a data error.
pub fn add_magnitude(a: &BitVec, b: &BitVec) -> BcdResult<BitVec> {
    if a.len() != b.len() {
        return Err(BcdError::SizeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut sum = BitVec::new(a.len());
    let mut carry = false;
    for group in 0..digit_count(a) {
        let total = digit_at(a, group) + digit_at(b, group) + u8::from(carry);
        let corrected = correct(total & 0xF, total > 0xF);
        set_digit(&mut sum, group, corrected.digit);
        carry = corrected.carry;
    }

    // A final carry grows the result by one digit group holding 1.
    if carry {
        let old_len = sum.len();
        sum = sum.resize(old_len + DIGIT_BITS);
        sum.set(old_len, true);
        tracing::trace!(width = sum.len(), "addition carried into a new digit group");
    }

    Ok(sum)
}
