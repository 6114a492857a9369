// ============================================================================
// Basic Usage Example
// ============================================================================

use bcd_engine::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== BCD Engine Example ===\n");

    // Construct numbers from native integers
    let a = BcdNumber::from_i64(123);
    let b = BcdNumber::from_i64(456);

    println!("a = {}  ({})", a, a.to_bcd_string());
    println!("b = {}  ({})\n", b, b.to_bcd_string());

    // Exact signed arithmetic
    let sum = a.checked_add(&b).unwrap();
    let difference = a.checked_sub(&b).unwrap();
    let product = a.checked_mul(&b).unwrap();

    println!("a + b = {}  ({})", sum, sum.to_bcd_string());
    println!("a - b = {}  ({})", difference, difference.to_bcd_string());
    println!("a * b = {}  ({})\n", product, product.to_bcd_string());

    // Comparison
    println!("a < b: {}", a < b);
    println!("a == a: {}\n", a == a.clone());

    // Precision beyond any native integer
    let huge: BcdNumber = "99999999999999999999999999999999".parse().unwrap();
    let grown = huge.checked_add(&BcdNumber::from_i64(1)).unwrap();
    println!("{} + 1", huge);
    println!("  = {}", grown);
    println!("  = {} digits", grown.digit_count());

    // Conversion back to i64 reports overflow instead of wrapping
    match grown.to_i64() {
        Ok(value) => println!("fits in i64: {}", value),
        Err(error) => println!("does not fit in i64: {}", error),
    }
}
