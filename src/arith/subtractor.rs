// ============================================================================
// BCD Subtractor
// Magnitude difference via 9's/10's complement and end-around carry
// ============================================================================

use std::cmp::Ordering;

use crate::arith::adder::add_magnitude;
use crate::arith::comparator::compare_magnitude;
use crate::bits::BitVec;
use crate::codec::digits::{aligned_width, checked_digit_at, digit_count, set_digit, DIGIT_BITS};
use crate::errors::BcdResult;

/// Magnitude difference and the sign it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    pub magnitude: BitVec,
    pub negative: bool,
}

/// Compute `|a - b|` and whether `a - b` is negative.
///
/// Classic decimal complement subtraction: order the operands by
/// magnitude, take the 9's complement of the smaller, add one for the
/// 10's complement (through the growing adder, so the width change is
/// tracked rather than discarded), and add the larger. A sum that
/// outgrows the addition width signals an end-around carry: the
/// magnitude is the sum with the carry digit dropped, not an error.
/// Without the carry, equal operands yield exact zero and anything else
/// is re-complemented relative to the addition width.
///
/// Zero results are always non-negative, whatever the operand order.
///
/// # Errors
/// Propagates `InvalidDigit` from complementing a corrupted vector;
/// `SizeMismatch` cannot occur since all widths are equalized here.
pub fn subtract_magnitude(a: &BitVec, b: &BitVec) -> BcdResult<Difference> {
    let cmp = compare_magnitude(a, b);
    let negative = cmp == Ordering::Less;
    let (larger, smaller) = if negative { (b, a) } else { (a, b) };

    // A zero subtrahend needs no complement pass. Running it through one
    // would grow the 10's complement to a full extra digit and hide the
    // end-around carry from the width test below.
    if smaller.is_zero() {
        if larger.is_zero() {
            return Ok(Difference {
                magnitude: BitVec::new(DIGIT_BITS),
                negative: false,
            });
        }
        return Ok(Difference {
            magnitude: larger.resize(aligned_width(larger.len())),
            negative,
        });
    }

    let common_width = aligned_width(larger.len().max(smaller.len()));
    let larger_padded = larger.resize(common_width);
    let smaller_padded = smaller.resize(common_width);

    let nines = nines_complement(&smaller_padded)?;
    let mut one = BitVec::new(common_width);
    one.set(0, true);
    // 10's complement = 9's complement + 1; the adder may grow it by a digit.
    let tens = add_magnitude(&nines, &one)?;

    let add_width = common_width.max(tens.len());
    let sum = add_magnitude(&larger_padded.resize(add_width), &tens.resize(add_width))?;

    if sum.len() > add_width {
        // End-around carry: non-negative difference, carry digit discarded.
        tracing::debug!(width = add_width, "end-around carry in complement subtraction");
        return Ok(Difference {
            magnitude: sum.resize(add_width),
            negative,
        });
    }

    if cmp == Ordering::Equal {
        return Ok(Difference {
            magnitude: BitVec::new(DIGIT_BITS),
            negative: false,
        });
    }

    // No end-around carry: the true magnitude is the 10's complement of
    // the sum, relative to the width the addition ran at.
    let nines_of_sum = nines_complement(&sum)?;
    let mut one = BitVec::new(add_width);
    one.set(0, true);
    let magnitude = add_magnitude(&nines_of_sum, &one)?;
    Ok(Difference { magnitude, negative })
}

// 9's complement: every digit d becomes 9 - d.
fn nines_complement(bits: &BitVec) -> BcdResult<BitVec> {
    let mut complement = BitVec::new(bits.len());
    for group in 0..digit_count(bits) {
        let digit = checked_digit_at(bits, group)?;
        set_digit(&mut complement, group, 9 - digit);
    }
    Ok(complement)
}
