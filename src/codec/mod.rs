// ============================================================================
// Codec Module
// Digit-group interpretation of bit vectors and integer conversion
// ============================================================================
//
// This module provides:
// - digit access over `BitVec` in 4-bit groups, with validation
// - canonicalization (leading-zero trim, minimal zero width)
// - decimal decomposition of native integers
//
// Sign handling lives with `number::BcdNumber`; everything here operates
// on unsigned magnitudes.

pub mod convert;
pub mod digits;

pub use convert::{decode_magnitude, encode_magnitude};
pub use digits::{
    aligned_width, checked_digit_at, digit_at, digit_count, set_digit, trim, DIGIT_BITS, MAX_DIGIT,
};
