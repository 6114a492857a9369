// ============================================================================
// Arithmetic Module
// Magnitude-only BCD arithmetic over digit vectors
// ============================================================================
//
// Every routine here is a pure function over immutable inputs producing a
// newly owned output. Signs are composed one level up by `number`.

pub mod adder;
pub mod comparator;
pub mod corrector;
pub mod multiplier;
pub mod subtractor;

pub use adder::add_magnitude;
pub use comparator::compare_magnitude;
pub use corrector::{correct, Corrected, CORRECTION_MASK};
pub use multiplier::multiply_magnitude;
pub use subtractor::{subtract_magnitude, Difference};
