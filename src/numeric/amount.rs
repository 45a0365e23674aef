// ============================================================================
// Decimal Amount
// Exact scaled-integer representation of monetary values
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Maximum number of fractional digits an amount (or an engine precision)
/// may carry.
///
/// Tied to the i128 internal width: two operands at this scale still
/// multiply exactly (the product carries up to 36 fractional digits)
/// without leaving the representable range for realistic magnitudes.
pub const MAX_PRECISION: u32 = 18;

/// Compute 10^n (valid for n <= 38)
const fn pow10(n: u32) -> i128 {
    let mut result: i128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Integer division rounding half away from zero.
fn div_rounded(num: i128, den: i128) -> i128 {
    let quotient = num / den;
    let remainder = num % den;
    if remainder != 0 && remainder.unsigned_abs() * 2 >= den.unsigned_abs() {
        if (num < 0) == (den < 0) {
            quotient + 1
        } else {
            quotient - 1
        }
    } else {
        quotient
    }
}

/// An exact decimal amount.
///
/// Internally stores `value × 10^scale` as an i128, so no binary
/// floating-point is involved at any point. Two amounts with different
/// scales compare by numeric value (`2.50 == 2.5`).
///
/// # Example
/// ```
/// use money_engine::numeric::Amount;
///
/// let price: Amount = "19.99".parse().unwrap();
/// let qty = Amount::from_integer(3);
/// let total = price.checked_mul(qty).unwrap().rescale(2).unwrap();
/// assert_eq!(total.to_string(), "59.97");
/// ```
#[derive(Clone, Copy)]
pub struct Amount {
    units: i128,
    scale: u32,
}

impl Amount {
    /// Zero value
    pub const ZERO: Self = Self { units: 0, scale: 0 };

    /// One (1.0)
    pub const ONE: Self = Self { units: 1, scale: 0 };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw scaled representation (`units × 10^-scale`).
    ///
    /// # Panics
    /// Panics if `scale` exceeds [`MAX_PRECISION`].
    #[inline]
    pub fn from_units(units: i128, scale: u32) -> Self {
        assert!(scale <= MAX_PRECISION, "scale exceeds MAX_PRECISION");
        Self { units, scale }
    }

    /// Create from an integer value.
    #[inline]
    pub const fn from_integer(value: i128) -> Self {
        Self { units: value, scale: 0 }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw scaled value (`value × 10^scale`).
    #[inline]
    pub const fn units(self) -> i128 {
        self.units
    }

    /// Number of fractional digits this amount carries.
    #[inline]
    pub const fn scale(self) -> u32 {
        self.scale
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i128 {
        self.units / pow10(self.scale)
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u128 {
        (self.units % pow10(self.scale)).unsigned_abs()
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.units == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.units > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.units < 0
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(self) -> MoneyResult<Self> {
        self.units
            .checked_abs()
            .map(|units| Self { units, scale: self.scale })
            .ok_or(MoneyError::Overflow)
    }

    // ========================================================================
    // Rescaling
    // ========================================================================

    /// Re-normalize to exactly `scale` fractional digits.
    ///
    /// Scaling up is exact; scaling down rounds half away from zero
    /// (`0.005 -> 0.01`, `-0.005 -> -0.01`). This is the single rounding
    /// primitive every operation funnels through.
    ///
    /// # Panics
    /// Panics if `scale` exceeds [`MAX_PRECISION`].
    ///
    /// # Errors
    /// Returns `Overflow` if scaling up leaves the representable range.
    pub fn rescale(self, scale: u32) -> MoneyResult<Self> {
        assert!(scale <= MAX_PRECISION, "scale exceeds MAX_PRECISION");
        if scale >= self.scale {
            let factor = pow10(scale - self.scale);
            self.units
                .checked_mul(factor)
                .map(|units| Self { units, scale })
                .ok_or(MoneyError::Overflow)
        } else {
            let divisor = pow10(self.scale - scale);
            Ok(Self {
                units: div_rounded(self.units, divisor),
                scale,
            })
        }
    }

    /// Scale up exactly to a wider scale (internal alignment helper).
    #[inline]
    fn aligned(self, scale: u32) -> MoneyResult<Self> {
        debug_assert!(scale >= self.scale);
        let factor = pow10(scale - self.scale);
        self.units
            .checked_mul(factor)
            .map(|units| Self { units, scale })
            .ok_or(MoneyError::Overflow)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition, exact at the wider operand scale.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> MoneyResult<Self> {
        let scale = self.scale.max(rhs.scale);
        let (a, b) = (self.aligned(scale)?, rhs.aligned(scale)?);
        a.units
            .checked_add(b.units)
            .map(|units| Self { units, scale })
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction, exact at the wider operand scale.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> MoneyResult<Self> {
        let scale = self.scale.max(rhs.scale);
        let (a, b) = (self.aligned(scale)?, rhs.aligned(scale)?);
        a.units
            .checked_sub(b.units)
            .map(|units| Self { units, scale })
            .ok_or(MoneyError::Overflow)
    }

    /// Checked multiplication.
    ///
    /// The product is exact: it carries the combined scale of both
    /// operands (bounded at 2 × [`MAX_PRECISION`]). Round it down to a
    /// working scale with [`Amount::rescale`] once, at the end.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> MoneyResult<Self> {
        let scale = self.scale + rhs.scale;
        if scale > MAX_PRECISION * 2 {
            return Err(MoneyError::Overflow);
        }
        self.units
            .checked_mul(rhs.units)
            .map(|units| Self { units, scale })
            .ok_or(MoneyError::Overflow)
    }

    /// Checked division, rounded half away from zero at the target scale.
    ///
    /// Division is the one operation that cannot stay exact, so the caller
    /// names the scale the quotient is produced at.
    ///
    /// # Panics
    /// Panics if `scale` exceeds [`MAX_PRECISION`].
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is exactly zero
    /// - `Overflow` if an intermediate value is out of range
    pub fn checked_div(self, rhs: Self, scale: u32) -> MoneyResult<Self> {
        assert!(scale <= MAX_PRECISION, "scale exceeds MAX_PRECISION");
        if rhs.units == 0 {
            return Err(MoneyError::DivisionByZero);
        }

        // quotient = round(self/rhs × 10^scale)
        //          = (units_a × 10^(scale + rhs.scale - self.scale)) / units_b
        let (num, den) = if rhs.scale + scale >= self.scale {
            let exp = rhs.scale + scale - self.scale;
            let factor = 10i128.checked_pow(exp).ok_or(MoneyError::Overflow)?;
            (
                self.units.checked_mul(factor).ok_or(MoneyError::Overflow)?,
                rhs.units,
            )
        } else {
            let exp = self.scale - rhs.scale - scale;
            let factor = 10i128.checked_pow(exp).ok_or(MoneyError::Overflow)?;
            (
                self.units,
                rhs.units.checked_mul(factor).ok_or(MoneyError::Overflow)?,
            )
        };

        Ok(Self {
            units: div_rounded(num, den),
            scale,
        })
    }

    /// Checked remainder of truncated division, exact at the wider
    /// operand scale. The result carries the sign of the dividend.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is exactly zero
    /// - `Overflow` if operand alignment is out of range
    pub fn checked_rem(self, rhs: Self) -> MoneyResult<Self> {
        if rhs.units == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        let scale = self.scale.max(rhs.scale);
        let (a, b) = (self.aligned(scale)?, rhs.aligned(scale)?);
        Ok(Self {
            units: a.units % b.units,
            scale,
        })
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Scale-independent numeric comparison.
    fn value_cmp(&self, other: &Self) -> Ordering {
        self.integer_part()
            .cmp(&other.integer_part())
            .then_with(|| {
                // Fractions widened to a common scale; each stays strictly
                // below 10^scale, so the widening cannot overflow.
                let scale = self.scale.max(other.scale);
                let fa = (self.units % pow10(self.scale)) * pow10(scale - self.scale);
                let fb = (other.units % pow10(other.scale)) * pow10(scale - other.scale);
                fa.cmp(&fb)
            })
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Amount {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Amount {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value_cmp(other) == Ordering::Equal
    }
}

impl Eq for Amount {}

impl PartialOrd for Amount {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.value_cmp(other))
    }
}

impl Ord for Amount {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value_cmp(other)
    }
}

impl Hash for Amount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the reduced form so equal values hash equally across scales
        let (mut units, mut scale) = (self.units, self.scale);
        if units == 0 {
            scale = 0;
        } else {
            while scale > 0 && units % 10 == 0 {
                units /= 10;
                scale -= 1;
            }
        }
        units.hash(state);
        scale.hash(state);
    }
}

impl Neg for Amount {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            units: -self.units,
            scale: self.scale,
        }
    }
}

// Infallible Add/Sub for ergonomics (panics on overflow - use checked_* in production)
impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Amount addition overflow")
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("Amount subtraction overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({}, units={}, scale={})", self, self.units, self.scale)
    }
}

impl fmt::Display for Amount {
    /// Fixed-point form with exactly `scale` fractional digits, `.` as
    /// the separator. No exponent notation, no grouping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.integer_part();
        let frac_part = self.fractional_part();

        if self.scale == 0 {
            write!(f, "{}", int_part)
        } else if self.units < 0 && int_part == 0 {
            // Handle -0.xxx case
            write!(f, "-0.{:0>width$}", frac_part, width = self.scale as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = self.scale as usize)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Amount {
    type Err = MoneyError;

    /// Parse from a fixed-point decimal string.
    ///
    /// Accepts an optional leading sign, an integer part, and an optional
    /// fractional part: `"123"`, `"123.45"`, `"-0.07"`, `"+.5"`, `"5."`.
    /// Surrounding ASCII whitespace is tolerated. Grouping separators,
    /// exponent notation, and more than [`MAX_PRECISION`] fractional
    /// digits are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyError::InvalidAmount);
        }

        let (is_negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (int_str, frac_str) = match digits.find('.') {
            Some(pos) => (&digits[..pos], &digits[pos + 1..]),
            None => (digits, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(MoneyError::InvalidAmount);
        }
        if frac_str.contains('.') {
            return Err(MoneyError::InvalidAmount);
        }
        if frac_str.len() > MAX_PRECISION as usize {
            return Err(MoneyError::InvalidAmount);
        }

        let mut units: i128 = 0;
        for c in int_str.chars().chain(frac_str.chars()) {
            let digit = c.to_digit(10).ok_or(MoneyError::InvalidAmount)? as i128;
            units = units
                .checked_mul(10)
                .and_then(|u| u.checked_add(digit))
                .ok_or(MoneyError::Overflow)?;
        }

        Ok(Self {
            units: if is_negative { -units } else { units },
            scale: frac_str.len() as u32,
        })
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Amount {
    /// Convert from rust_decimal::Decimal.
    ///
    /// This is intended for API boundaries only (host applications already
    /// holding `Decimal` values). The amount retains the Decimal's scale,
    /// which may exceed [`MAX_PRECISION`] (Decimal allows up to 28).
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self {
            units: d.mantissa(),
            scale: d.scale(),
        }
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `Overflow` if the value does not fit Decimal's 96-bit range.
    pub fn to_decimal(self) -> MoneyResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::try_from_i128_with_scale(self.units, self.scale)
            .map_err(|_| MoneyError::Overflow)
    }
}

// ============================================================================
// Serde (string form, via the validating parse)
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
