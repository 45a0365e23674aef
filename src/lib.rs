// ============================================================================
// Money Engine Library
// Exact fixed-precision decimal arithmetic for monetary values
// ============================================================================

//! # Money Engine
//!
//! An exact, reproducible decimal arithmetic engine for monetary values.
//!
//! ## Features
//!
//! - **No binary floating-point** - amounts are scaled i128 integers, so
//!   results never drift and every operation is deterministic
//! - **Configurable precision** - each calculator rounds results to a fixed
//!   number of fractional digits (default 2), half away from zero
//! - **Validating parse boundary** - amounts enter as text once, through
//!   [`Amount`]'s `FromStr`; arithmetic then operates on the typed value
//! - **Recoverable errors** - malformed input and zero divisors surface as
//!   [`MoneyError`] values, never panics
//!
//! ## Example
//!
//! ```rust
//! use money_engine::prelude::*;
//!
//! let calc = MoneyCalculator::default(); // 2 fractional digits
//!
//! assert_eq!(calc.add("10.005", "0.004").unwrap(), "10.01");
//! assert_eq!(calc.subtract("5.00", "7.50").unwrap(), "-2.50");
//! assert_eq!(calc.multiply("3.333", "3").unwrap(), "10.00");
//! assert_eq!(calc.divide("1.00", "3.00").unwrap(), "0.33");
//!
//! // A divisor that rounds to zero at the active precision is rejected
//! assert_eq!(calc.divide("10.00", "0.001"), Err(MoneyError::DivisionByZero));
//!
//! // Parse once, then stay in the typed world
//! let subtotal: Amount = "99.95".parse().unwrap();
//! let tax_rate: Amount = "0.0825".parse().unwrap();
//! let tax = calc.multiply_amounts(subtotal, tax_rate).unwrap();
//! assert_eq!(tax.to_string(), "8.25");
//! ```

pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::{MoneyCalculator, DEFAULT_PRECISION};
    pub use crate::numeric::{Amount, MoneyError, MoneyResult, MAX_PRECISION};
}

pub use numeric::{MoneyError, MoneyResult};

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::cmp::Ordering;

    #[test]
    fn test_end_to_end_ledger_arithmetic() {
        let calc = MoneyCalculator::default();

        // A small running balance: deposit, fee, interest
        let balance = calc.add("1000.00", "250.505").unwrap();
        assert_eq!(balance, "1250.51");

        let balance = calc.subtract(&balance, "12.99").unwrap();
        assert_eq!(balance, "1237.52");

        let interest = calc.multiply(&balance, "0.035").unwrap();
        assert_eq!(interest, "43.31");

        let installment = calc.divide(&balance, "12").unwrap();
        assert_eq!(installment, "103.13");

        assert_eq!(calc.compare(&balance, "1237.520").unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_precision_is_per_instance() {
        let cents = MoneyCalculator::default();
        let basis_points = cents.with_precision(4);

        assert_eq!(cents.divide("1.00", "3.00").unwrap(), "0.33");
        assert_eq!(basis_points.divide("1.00", "3.00").unwrap(), "0.3333");

        // The original instance is untouched
        assert_eq!(cents.precision(), 2);
    }

    #[test]
    fn test_calculator_is_shareable_across_threads() {
        let calc = MoneyCalculator::default();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let lhs = format!("{}.005", i);
                    calc.add(&lhs, "0.004").unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("{}.01", i));
        }
    }

    #[test]
    fn test_decimal_boundary_roundtrip() {
        use rust_decimal::Decimal;

        let calc = MoneyCalculator::default();
        let d = Decimal::new(19_995, 3); // 19.995
        let rounded = calc.round_amount(Amount::from_decimal(d)).unwrap();
        assert_eq!(rounded.to_string(), "20.00");
        assert_eq!(rounded.to_decimal().unwrap(), Decimal::new(2_000, 2));
    }
}
