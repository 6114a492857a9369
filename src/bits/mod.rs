// ============================================================================
// Bits Module
// Generic bit container underlying the BCD digit vectors
// ============================================================================

mod bit_vec;

pub use bit_vec::BitVec;
