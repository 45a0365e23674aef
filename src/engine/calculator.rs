// ============================================================================
// Money Calculator
// Fixed-precision decimal arithmetic over monetary values
// ============================================================================

use crate::numeric::{Amount, MoneyError, MoneyResult, MAX_PRECISION};
use std::cmp::Ordering;

/// Default number of fractional digits (cents)
pub const DEFAULT_PRECISION: u32 = 2;

/// Fixed-precision decimal arithmetic engine for monetary values.
///
/// Every operation re-normalizes its result to the calculator's precision
/// (fractional-digit count), rounding half away from zero, and computes on
/// exact scaled integers throughout - binary floating-point is never
/// involved. Precision is fixed at construction, so a calculator can be
/// shared freely across concurrent callers; "changing" precision means
/// constructing a new instance.
///
/// Two API surfaces are exposed:
/// - string-boundary operations (`add`, `divide`, ...) that parse, compute,
///   and format in one call, for hosts exchanging amounts as text
/// - typed operations (`add_amounts`, `divide_amounts`, ...) over [`Amount`]
///   values parsed once at the boundary, so the invalid-input failure path
///   collapses to a single `parse` call
///
/// # Example
/// ```
/// use money_engine::prelude::*;
///
/// let calc = MoneyCalculator::default(); // precision 2
/// assert_eq!(calc.add("10.005", "0.004").unwrap(), "10.01");
/// assert_eq!(calc.divide("1.00", "3.00").unwrap(), "0.33");
/// assert_eq!(calc.divide("1.00", "0.001"), Err(MoneyError::DivisionByZero));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyCalculator {
    precision: u32,
}

impl Default for MoneyCalculator {
    #[inline]
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl MoneyCalculator {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a calculator producing results with `precision` fractional
    /// digits.
    ///
    /// # Panics
    /// Panics if `precision` exceeds [`MAX_PRECISION`] (18), the practical
    /// bound of the i128 internal representation.
    pub fn new(precision: u32) -> Self {
        assert!(
            precision <= MAX_PRECISION,
            "precision {} exceeds MAX_PRECISION ({})",
            precision,
            MAX_PRECISION
        );
        Self { precision }
    }

    /// A new calculator with a different precision. Previously produced
    /// values are unaffected.
    #[inline]
    pub fn with_precision(self, precision: u32) -> Self {
        Self::new(precision)
    }

    /// The configured number of fractional digits.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check whether `value` is a well-formed monetary amount: optional
    /// leading sign, base-10 digits, at most one decimal point, no grouping
    /// separators, no exponent notation. Negative values are valid - they
    /// represent debts, refunds, or overpayments.
    pub fn is_valid_money(&self, value: &str) -> bool {
        value.parse::<Amount>().is_ok()
    }

    fn parse_operand(value: &str) -> MoneyResult<Amount> {
        value.parse()
    }

    // ========================================================================
    // String-Boundary Operations
    // ========================================================================

    /// `a + b`, rounded to precision.
    pub fn add(&self, a: &str, b: &str) -> MoneyResult<String> {
        tracing::trace!(precision = self.precision, a, b, "add");
        let (a, b) = (Self::parse_operand(a)?, Self::parse_operand(b)?);
        Ok(self.add_amounts(a, b)?.to_string())
    }

    /// `a - b`, rounded to precision.
    pub fn subtract(&self, a: &str, b: &str) -> MoneyResult<String> {
        tracing::trace!(precision = self.precision, a, b, "subtract");
        let (a, b) = (Self::parse_operand(a)?, Self::parse_operand(b)?);
        Ok(self.subtract_amounts(a, b)?.to_string())
    }

    /// `a * b`, computed at full precision and rounded once at the end.
    pub fn multiply(&self, a: &str, b: &str) -> MoneyResult<String> {
        tracing::trace!(precision = self.precision, a, b, "multiply");
        let (a, b) = (Self::parse_operand(a)?, Self::parse_operand(b)?);
        Ok(self.multiply_amounts(a, b)?.to_string())
    }

    /// `a / b`, rounded to precision.
    ///
    /// # Errors
    /// Fails with `DivisionByZero` when `b` rounds to zero at the current
    /// precision (`"0.001"` is a zero divisor at precision 2). The division
    /// itself uses the unrounded `b`.
    pub fn divide(&self, a: &str, b: &str) -> MoneyResult<String> {
        tracing::trace!(precision = self.precision, a, b, "divide");
        let (a, b) = (Self::parse_operand(a)?, Self::parse_operand(b)?);
        Ok(self.divide_amounts(a, b)?.to_string())
    }

    /// Remainder of the truncated division `a / b`, re-normalized to
    /// precision. The sign follows the dividend.
    ///
    /// # Errors
    /// Same zero-divisor policy as [`MoneyCalculator::divide`].
    pub fn modulus(&self, a: &str, b: &str) -> MoneyResult<String> {
        tracing::trace!(precision = self.precision, a, b, "modulus");
        let (a, b) = (Self::parse_operand(a)?, Self::parse_operand(b)?);
        Ok(self.modulus_amounts(a, b)?.to_string())
    }

    /// Compare `a` and `b` after rounding both to precision.
    pub fn compare(&self, a: &str, b: &str) -> MoneyResult<Ordering> {
        tracing::trace!(precision = self.precision, a, b, "compare");
        let (a, b) = (Self::parse_operand(a)?, Self::parse_operand(b)?);
        self.compare_amounts(a, b)
    }

    /// Re-normalize `value` to exactly `precision` fractional digits,
    /// rounding half away from zero.
    pub fn round(&self, value: &str) -> MoneyResult<String> {
        tracing::trace!(precision = self.precision, value, "round");
        Ok(self.round_amount(Self::parse_operand(value)?)?.to_string())
    }

    // ========================================================================
    // Typed Operations
    // ========================================================================

    /// Exact sum, rounded to precision.
    pub fn add_amounts(&self, a: Amount, b: Amount) -> MoneyResult<Amount> {
        a.checked_add(b)?.rescale(self.precision)
    }

    /// Exact difference, rounded to precision.
    pub fn subtract_amounts(&self, a: Amount, b: Amount) -> MoneyResult<Amount> {
        a.checked_sub(b)?.rescale(self.precision)
    }

    /// Full-precision product, rounded once to precision. Intermediate
    /// operands are never rounded.
    pub fn multiply_amounts(&self, a: Amount, b: Amount) -> MoneyResult<Amount> {
        a.checked_mul(b)?.rescale(self.precision)
    }

    /// Quotient rounded to precision; see [`MoneyCalculator::divide`] for
    /// the zero-divisor policy.
    pub fn divide_amounts(&self, a: Amount, b: Amount) -> MoneyResult<Amount> {
        self.ensure_nonzero_divisor(b)?;
        a.checked_div(b, self.precision)
    }

    /// Truncated-division remainder, re-normalized to precision.
    pub fn modulus_amounts(&self, a: Amount, b: Amount) -> MoneyResult<Amount> {
        self.ensure_nonzero_divisor(b)?;
        a.checked_rem(b)?.rescale(self.precision)
    }

    /// Comparison after rounding both operands to precision.
    pub fn compare_amounts(&self, a: Amount, b: Amount) -> MoneyResult<Ordering> {
        Ok(a.rescale(self.precision)?.cmp(&b.rescale(self.precision)?))
    }

    /// Round a single amount to precision.
    pub fn round_amount(&self, value: Amount) -> MoneyResult<Amount> {
        value.rescale(self.precision)
    }

    /// A divisor counts as zero when it rounds to zero at the current
    /// precision, not only when it is exactly zero.
    fn ensure_nonzero_divisor(&self, divisor: Amount) -> MoneyResult<()> {
        if divisor.rescale(self.precision)?.is_zero() {
            Err(MoneyError::DivisionByZero)
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_precision() {
        let calc = MoneyCalculator::default();
        assert_eq!(calc.precision(), 2);
    }

    #[test]
    fn test_with_precision_builds_new_instance() {
        let calc = MoneyCalculator::default();
        let wide = calc.with_precision(4);
        assert_eq!(wide.precision(), 4);
        assert_eq!(calc.precision(), 2);
    }

    #[test]
    #[should_panic(expected = "exceeds MAX_PRECISION")]
    fn test_precision_above_maximum_panics() {
        let _ = MoneyCalculator::new(19);
    }

    #[test]
    fn test_is_valid_money() {
        let calc = MoneyCalculator::default();

        for valid in ["123.45", "-0.07", "+1", "0", "10.", ".5", " 2.50 "] {
            assert!(calc.is_valid_money(valid), "expected {:?} to be valid", valid);
        }
        for invalid in ["", "abc", "12.3.4", "1,000.00", "1e5", "$5", "--1"] {
            assert!(!calc.is_valid_money(invalid), "expected {:?} to be invalid", invalid);
        }
    }

    #[test]
    fn test_add() {
        let calc = MoneyCalculator::default();
        assert_eq!(calc.add("10.005", "0.004").unwrap(), "10.01");
        assert_eq!(calc.add("1.23", "4.56").unwrap(), "5.79");
        assert_eq!(calc.add("-1.00", "0.25").unwrap(), "-0.75");
        assert_eq!(calc.add("2", "3").unwrap(), "5.00");
    }

    #[test]
    fn test_subtract() {
        let calc = MoneyCalculator::default();
        assert_eq!(calc.subtract("5.00", "7.50").unwrap(), "-2.50");
        assert_eq!(calc.subtract("10.00", "0.004").unwrap(), "10.00");
        assert_eq!(calc.subtract("10.00", "0.005").unwrap(), "10.00");
    }

    #[test]
    fn test_multiply_rounds_full_precision_product() {
        let calc = MoneyCalculator::default();
        // 3.333 * 3 = 9.999 exactly; one rounding at the end gives 10.00.
        // Rounding the operands first would have produced 9.99.
        assert_eq!(calc.multiply("3.333", "3").unwrap(), "10.00");
        assert_eq!(calc.multiply("0.105", "2").unwrap(), "0.21");
        assert_eq!(calc.multiply("-1.5", "1.5").unwrap(), "-2.25");
    }

    #[test]
    fn test_divide() {
        let calc = MoneyCalculator::default();
        assert_eq!(calc.divide("1.00", "3.00").unwrap(), "0.33");
        assert_eq!(calc.divide("2.00", "3.00").unwrap(), "0.67");
        assert_eq!(calc.divide("-1.00", "3.00").unwrap(), "-0.33");
        assert_eq!(calc.divide("7.00", "2.00").unwrap(), "3.50");
    }

    #[test]
    fn test_divide_by_zero_at_precision() {
        let calc = MoneyCalculator::default();
        assert_eq!(calc.divide("10.00", "0"), Err(MoneyError::DivisionByZero));
        assert_eq!(calc.divide("10.00", "0.00"), Err(MoneyError::DivisionByZero));
        // 0.001 rounds to 0.00 at precision 2, so it is a zero divisor
        assert_eq!(calc.divide("10.00", "0.001"), Err(MoneyError::DivisionByZero));
        assert_eq!(calc.divide("10.00", "-0.004"), Err(MoneyError::DivisionByZero));
        // 0.005 rounds to 0.01, so it divides - against the unrounded value
        assert_eq!(calc.divide("10.00", "0.005").unwrap(), "2000.00");
    }

    #[test]
    fn test_modulus() {
        let calc = MoneyCalculator::default();
        assert_eq!(calc.modulus("10.00", "3.00").unwrap(), "1.00");
        assert_eq!(calc.modulus("5.5", "2").unwrap(), "1.50");
        assert_eq!(calc.modulus("-5.5", "2").unwrap(), "-1.50");
        assert_eq!(calc.modulus("10.00", "0.001"), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_compare() {
        let calc = MoneyCalculator::default();
        assert_eq!(calc.compare("2.50", "2.5").unwrap(), Ordering::Equal);
        assert_eq!(calc.compare("1.00", "2.00").unwrap(), Ordering::Less);
        assert_eq!(calc.compare("-1.00", "-2.00").unwrap(), Ordering::Greater);
        // Comparison happens after rounding both sides to precision
        assert_eq!(calc.compare("0.004", "0.005").unwrap(), Ordering::Less);
        assert_eq!(calc.compare("0.004", "0.0041").unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_round() {
        let calc = MoneyCalculator::default();
        assert_eq!(calc.round("2.675").unwrap(), "2.68");
        assert_eq!(calc.round("-0.005").unwrap(), "-0.01");
        assert_eq!(calc.round("7").unwrap(), "7.00");
        assert_eq!(calc.round("1.999").unwrap(), "2.00");
    }

    #[test]
    fn test_invalid_operands_fail_before_computation() {
        let calc = MoneyCalculator::default();
        assert_eq!(calc.add("abc", "1.00"), Err(MoneyError::InvalidAmount));
        assert_eq!(calc.subtract("1.00", ""), Err(MoneyError::InvalidAmount));
        assert_eq!(calc.multiply("12.3.4", "2"), Err(MoneyError::InvalidAmount));
        assert_eq!(calc.divide("1.00", "x"), Err(MoneyError::InvalidAmount));
        assert_eq!(calc.modulus("x", "1.00"), Err(MoneyError::InvalidAmount));
        assert!(calc.compare("1.00", "1,00").is_err());
        assert_eq!(calc.round("1.2.3"), Err(MoneyError::InvalidAmount));
    }

    #[test]
    fn test_output_always_carries_precision_digits() {
        let calc = MoneyCalculator::default();
        assert_eq!(calc.add("1", "1").unwrap(), "2.00");
        assert_eq!(calc.multiply("2", "3").unwrap(), "6.00");

        let whole = MoneyCalculator::new(0);
        assert_eq!(whole.add("1.5", "1.5").unwrap(), "3");
        assert_eq!(whole.round("0.5").unwrap(), "1");

        let fine = MoneyCalculator::new(4);
        assert_eq!(fine.divide("1", "3").unwrap(), "0.3333");
        assert_eq!(fine.round("2.5").unwrap(), "2.5000");
    }

    #[test]
    fn test_typed_boundary() {
        let calc = MoneyCalculator::default();
        let a: Amount = "10.005".parse().unwrap();
        let b: Amount = "0.004".parse().unwrap();

        let sum = calc.add_amounts(a, b).unwrap();
        assert_eq!(sum.to_string(), "10.01");
        assert_eq!(sum.scale(), calc.precision());

        assert_eq!(calc.compare_amounts(a, b).unwrap(), Ordering::Greater);
        assert_eq!(
            calc.divide_amounts(a, Amount::ZERO),
            Err(MoneyError::DivisionByZero)
        );
    }
}
