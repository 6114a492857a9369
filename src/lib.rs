// ============================================================================
// BCD Engine Library
// Arbitrary-precision binary-coded decimal arithmetic with exact signs
// ============================================================================

//! # BCD Engine
//!
//! Exact decimal arithmetic over Binary-Coded Decimal digit vectors.
//!
//! Every decimal digit occupies its own 4-bit group in a growable bit
//! vector, least-significant digit first, with an explicit sign flag.
//! Because no binary floating point is involved, results are exact at
//! any width — the core a financial or fixed-point decimal library
//! needs.
//!
//! ## Features
//!
//! - **Arbitrary precision**: results grow digit by digit on carry; no
//!   fixed word size caps the value range
//! - **Excess-6 correction** in a single shared kernel, so no operation
//!   can produce an invalid (non-decimal) digit group
//! - **Complement-based subtraction** with explicit end-around-carry
//!   tracking and exact sign resolution
//! - **Pure operations**: operands are borrowed immutably and every
//!   result is a newly owned, canonical value
//!
//! ## Example
//!
//! ```rust
//! use bcd_engine::prelude::*;
//!
//! let a = BcdNumber::from_i64(123);
//! let b = BcdNumber::from_i64(456);
//!
//! let sum = a.checked_add(&b)?;
//! assert_eq!(sum.to_i64()?, 579);
//! assert_eq!(sum.to_bcd_string(), "0101 0111 1001");
//!
//! // widths beyond any native integer are fine
//! let huge: BcdNumber = "99999999999999999999".parse()?;
//! let grown = huge.checked_add(&BcdNumber::from_i64(1))?;
//! assert_eq!(grown.to_string(), "100000000000000000000");
//! # Ok::<(), bcd_engine::errors::BcdError>(())
//! ```

pub mod arith;
pub mod bits;
pub mod codec;
pub mod errors;
pub mod number;

// Re-exports for convenience
pub mod prelude {
    pub use crate::bits::BitVec;
    pub use crate::errors::{BcdError, BcdResult};
    pub use crate::number::BcdNumber;
}
