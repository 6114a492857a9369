// ============================================================================
// BCD Number
// Signed arbitrary-precision decimal over a BCD digit vector
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::arith::{add_magnitude, compare_magnitude, multiply_magnitude, subtract_magnitude};
use crate::bits::BitVec;
use crate::codec::digits::{aligned_width, digit_at, digit_count, set_digit, trim, DIGIT_BITS};
use crate::codec::{decode_magnitude, encode_magnitude};
use crate::errors::{BcdError, BcdResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signed arbitrary-precision decimal number in BCD encoding.
///
/// The magnitude is a vector of 4-bit digit groups, least-significant
/// digit first; the sign is a separate flag. Values are always canonical:
/// the width is a multiple of 4, no leading all-zero digit group exists
/// except for zero itself (stored as a single `0000` group), and zero is
/// never negative.
///
/// All operations are pure: operands are borrowed immutably and every
/// result is a newly owned, canonical value.
///
/// # Example
/// ```ignore
/// use bcd_engine::number::BcdNumber;
///
/// let a = BcdNumber::from_i64(123);
/// let b = BcdNumber::from_i64(456);
/// let sum = a.checked_add(&b)?;        // 579
/// assert_eq!(sum.to_i64()?, 579);
/// assert_eq!(sum.to_bcd_string(), "0101 0111 1001");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BcdNumber {
    bits: BitVec,
    negative: bool,
}

impl BcdNumber {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The canonical zero (one `0000` digit group, non-negative).
    pub fn zero() -> Self {
        Self {
            bits: BitVec::new(DIGIT_BITS),
            negative: false,
        }
    }

    /// Create from a signed integer.
    ///
    /// `i64::MIN` is handled exactly: the magnitude is taken with
    /// `unsigned_abs`, so no intermediate negation can overflow.
    pub fn from_i64(value: i64) -> Self {
        Self {
            bits: encode_magnitude(value.unsigned_abs()),
            negative: value < 0,
        }
    }

    /// Create from an unsigned integer.
    pub fn from_u64(value: u64) -> Self {
        Self {
            bits: encode_magnitude(value),
            negative: false,
        }
    }

    // Canonicalize a raw magnitude/sign pair: trim leading zero digit
    // groups and strip the sign off zero.
    fn canonical(bits: BitVec, negative: bool) -> Self {
        let bits = trim(&bits);
        let negative = negative && !bits.is_zero();
        Self { bits, negative }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }

    /// Check if the value is negative. Zero is never negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of decimal digits in the canonical representation.
    #[inline]
    pub fn digit_count(&self) -> usize {
        digit_count(&self.bits)
    }

    /// Decimal digit at `position` (least-significant digit is 0).
    /// Positions past the top read as zero.
    #[inline]
    pub fn digit(&self, position: usize) -> u8 {
        digit_at(&self.bits, position)
    }

    /// Borrow the magnitude digit vector.
    #[inline]
    pub fn magnitude(&self) -> &BitVec {
        &self.bits
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            negative: false,
        }
    }

    /// Additive inverse. Zero stays non-negative.
    pub fn negate(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            negative: !self.negative && !self.is_zero(),
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Signed addition.
    ///
    /// Same signs add magnitudes and keep the shared sign; differing
    /// signs take the magnitude difference, and the larger-magnitude
    /// operand's sign wins. The result is canonical.
    ///
    /// # Errors
    /// Propagates `InvalidDigit` if either operand was corrupted.
    pub fn checked_add(&self, rhs: &Self) -> BcdResult<Self> {
        if rhs.is_zero() {
            return Ok(self.clone());
        }
        if self.is_zero() {
            return Ok(rhs.clone());
        }
        if self.negative == rhs.negative {
            let width = aligned_width(self.bits.len().max(rhs.bits.len()));
            let sum = add_magnitude(&self.bits.resize(width), &rhs.bits.resize(width))?;
            Ok(Self::canonical(sum, self.negative))
        } else {
            let difference = subtract_magnitude(&self.bits, &rhs.bits)?;
            let negative = if difference.negative {
                rhs.negative
            } else {
                self.negative
            };
            Ok(Self::canonical(difference.magnitude, negative))
        }
    }

    /// Signed subtraction, defined as `self + (-rhs)`.
    ///
    /// # Errors
    /// Propagates `InvalidDigit` if either operand was corrupted.
    pub fn checked_sub(&self, rhs: &Self) -> BcdResult<Self> {
        self.checked_add(&rhs.negate())
    }

    /// Signed multiplication.
    ///
    /// Either operand being zero short-circuits to canonical zero;
    /// otherwise the magnitudes are multiplied and the sign is the XOR
    /// of the operand signs.
    ///
    /// # Errors
    /// Propagates `InvalidDigit` if either operand was corrupted.
    pub fn checked_mul(&self, rhs: &Self) -> BcdResult<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::zero());
        }
        let product = multiply_magnitude(&self.bits, &rhs.bits)?;
        Ok(Self::canonical(product, self.negative != rhs.negative))
    }

    // Signed comparison: differing signs decide immediately; equal signs
    // compare magnitudes, reversed when both are negative.
    fn compare(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => compare_magnitude(&self.bits, &other.bits),
            (true, true) => compare_magnitude(&other.bits, &self.bits),
        }
    }

    // ========================================================================
    // Integer Conversion
    // ========================================================================

    /// Convert to a signed integer.
    ///
    /// # Errors
    /// - `InvalidDigit` if a digit group was corrupted
    /// - `Overflow` when the value is outside the `i64` range (the
    ///   magnitude of `i64::MIN` is admitted only with a negative sign)
    pub fn to_i64(&self) -> BcdResult<i64> {
        let magnitude = decode_magnitude(&self.bits)?;
        if self.negative {
            if magnitude <= i64::MAX as u64 {
                Ok(-(magnitude as i64))
            } else if magnitude == i64::MIN.unsigned_abs() {
                Ok(i64::MIN)
            } else {
                Err(BcdError::Overflow)
            }
        } else {
            i64::try_from(magnitude).map_err(|_| BcdError::Overflow)
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render the raw digit groups, most-significant first, separated by
    /// spaces, with a leading `1111` group for negative values (the BCD
    /// sign-nibble convention). `Display` is the decimal rendering with
    /// a textual minus.
    pub fn to_bcd_string(&self) -> String {
        let groups = digit_count(&self.bits);
        let mut out = String::with_capacity(5 * (groups + 1));
        if self.negative {
            out.push_str("1111");
        }
        for group in (0..groups).rev() {
            if !out.is_empty() {
                out.push(' ');
            }
            for bit in (0..DIGIT_BITS).rev() {
                out.push(if self.bits.get(group * DIGIT_BITS + bit) {
                    '1'
                } else {
                    '0'
                });
            }
        }
        out
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for BcdNumber {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for BcdNumber {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BcdNumber {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Neg for &BcdNumber {
    type Output = BcdNumber;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for BcdNumber {
    type Output = BcdNumber;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// Infallible operators for ergonomics (panic on corrupted digit vectors -
// use checked_* in production)
impl Add for &BcdNumber {
    type Output = BcdNumber;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("BCD addition failed")
    }
}

impl Sub for &BcdNumber {
    type Output = BcdNumber;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("BCD subtraction failed")
    }
}

impl Mul for &BcdNumber {
    type Output = BcdNumber;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("BCD multiplication failed")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for BcdNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BcdNumber({}, width={})", self, self.bits.len())
    }
}

impl fmt::Display for BcdNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        for group in (0..digit_count(&self.bits)).rev() {
            write!(f, "{}", digit_at(&self.bits, group))?;
        }
        Ok(())
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for BcdNumber {
    type Err = BcdError;

    /// Parse from a decimal string of any length.
    ///
    /// Digits are encoded directly into the vector, so parsing is not
    /// limited to the native integer range.
    ///
    /// # Examples
    /// - "579" -> three digit groups
    /// - "-42" -> negative
    /// - "007" -> canonicalized to one digit group
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(BcdError::InvalidInput);
        }

        let mut bits = BitVec::new(digits.len() * DIGIT_BITS);
        for (group, byte) in digits.bytes().rev().enumerate() {
            set_digit(&mut bits, group, byte - b'0');
        }

        Ok(Self::canonical(bits, negative))
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl BcdNumber {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries only (parsing user input).
    ///
    /// # Errors
    /// Returns `PrecisionLoss` when the decimal carries a non-zero
    /// fractional part; this crate represents whole numbers only.
    pub fn from_decimal(d: rust_decimal::Decimal) -> BcdResult<Self> {
        if !d.fract().is_zero() {
            return Err(BcdError::PrecisionLoss);
        }
        // The normalized digit string is exact for any Decimal mantissa,
        // which can exceed the u64 range.
        d.trunc().normalize().to_string().parse()
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// This is intended for display/debugging only.
    ///
    /// # Errors
    /// - `InvalidDigit` if a digit group was corrupted
    /// - `Overflow` when the value exceeds the `Decimal` mantissa range
    pub fn to_decimal(&self) -> BcdResult<rust_decimal::Decimal> {
        use rust_decimal::Decimal;

        let mut value = Decimal::ZERO;
        for group in (0..self.digit_count()).rev() {
            let digit = crate::codec::checked_digit_at(&self.bits, group)?;
            value = value
                .checked_mul(Decimal::TEN)
                .and_then(|scaled| scaled.checked_add(Decimal::from(digit)))
                .ok_or(BcdError::Overflow)?;
        }
        Ok(if self.negative { -value } else { value })
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_integer_roundtrip(value in any::<i64>()) {
            prop_assert_eq!(BcdNumber::from_i64(value).to_i64(), Ok(value));
        }

        #[test]
        fn prop_addition_matches_integers(a in any::<i32>(), b in any::<i32>()) {
            let sum = BcdNumber::from_i64(a as i64)
                .checked_add(&BcdNumber::from_i64(b as i64))
                .unwrap();
            prop_assert_eq!(sum.to_i64(), Ok(a as i64 + b as i64));
        }

        #[test]
        fn prop_addition_commutes(a in any::<i32>(), b in any::<i32>()) {
            let x = BcdNumber::from_i64(a as i64);
            let y = BcdNumber::from_i64(b as i64);
            prop_assert_eq!(x.checked_add(&y).unwrap(), y.checked_add(&x).unwrap());
        }

        #[test]
        fn prop_addition_associates(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
            let x = BcdNumber::from_i64(a as i64);
            let y = BcdNumber::from_i64(b as i64);
            let z = BcdNumber::from_i64(c as i64);
            let left = x.checked_add(&y).unwrap().checked_add(&z).unwrap();
            let right = x.checked_add(&y.checked_add(&z).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_additive_inverse(value in any::<i64>()) {
            let a = BcdNumber::from_i64(value);
            let sum = a.checked_add(&a.negate()).unwrap();
            prop_assert!(sum.is_zero());
            prop_assert!(!sum.is_negative());
        }

        #[test]
        fn prop_subtraction_is_add_of_negation(a in any::<i32>(), b in any::<i32>()) {
            let x = BcdNumber::from_i64(a as i64);
            let y = BcdNumber::from_i64(b as i64);
            prop_assert_eq!(
                x.checked_sub(&y).unwrap(),
                x.checked_add(&y.negate()).unwrap()
            );
        }

        #[test]
        fn prop_multiplication_matches_integers(a in any::<i32>(), b in any::<i32>()) {
            let product = BcdNumber::from_i64(a as i64)
                .checked_mul(&BcdNumber::from_i64(b as i64))
                .unwrap();
            prop_assert_eq!(product.to_i64(), Ok(a as i64 * b as i64));
        }

        #[test]
        fn prop_comparison_matches_integers(a in any::<i64>(), b in any::<i64>()) {
            let x = BcdNumber::from_i64(a);
            let y = BcdNumber::from_i64(b);
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        #[test]
        fn prop_display_matches_integers(value in any::<i64>()) {
            prop_assert_eq!(BcdNumber::from_i64(value).to_string(), value.to_string());
        }

        #[test]
        fn prop_parse_display_roundtrip(value in any::<i64>()) {
            let number = BcdNumber::from_i64(value);
            let reparsed: BcdNumber = number.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, number);
        }
    }
}
