// ============================================================================
// Number Module
// The signed BCD number entity and its public operations
// ============================================================================
//
// This module provides:
// - BcdNumber: canonical signed arbitrary-precision decimal value
// - integer, string and rust_decimal conversions at the API boundary
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics outside the operator sugar)
// - Operands are immutable; every result is newly owned and canonical

mod bcd_number;

pub use bcd_number::BcdNumber;
