//! Fraction approximation for quantity display.
//!
//! Recipe quantities are parsed as decimals but read better as simple
//! fractions ("1/2 lemon", not "0.5 lemon"). This module finds the fraction
//! with the smallest denominator within a relative error tolerance of the
//! given value, using a mediant (Stern-Brocot) binary search on the
//! fractional part.
//!
//! # Examples
//!
//! ```rust
//! use bake_ast::fraction::Fraction;
//!
//! assert_eq!(Fraction::approximate(0.5).to_string(), "1/2");
//! assert_eq!(Fraction::approximate(2.25).to_string(), "9/4");
//! assert_eq!(Fraction::approximate(200.0).to_string(), "200");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative error tolerance used by [`Fraction::approximate`].
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// A fraction represented as `numerator / denominator`.
///
/// Normalized to lowest terms on construction. Denominator is always
/// positive; the sign lives on the numerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    /// Numerator (can be negative)
    pub num: i32,
    /// Denominator (always positive, never zero)
    pub denom: i32,
}

impl Fraction {
    /// Create a new fraction, normalized to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `denom == 0`.
    pub fn new(num: i32, denom: i32) -> Self {
        debug_assert!(denom > 0, "denominator must be positive (got {denom})");

        if num == 0 {
            return Fraction { num: 0, denom: 1 };
        }

        let gcd = gcd(num.unsigned_abs(), denom.unsigned_abs());
        Fraction {
            num: num / gcd as i32,
            denom: denom / gcd as i32,
        }
    }

    /// Approximate a decimal value with the default relative tolerance.
    pub fn approximate(value: f64) -> Self {
        Self::approximate_with(value, DEFAULT_TOLERANCE)
    }

    /// Approximate a decimal value as the simplest fraction within `tolerance`.
    ///
    /// The tolerance is relative: it is scaled by the magnitude of `value`
    /// before the search. Values within tolerance of an integer (on either
    /// side) collapse to denominator 1. Otherwise the fractional part is
    /// narrowed by mediant bisection between 0/1 and 1/1 until a fraction
    /// lands inside the error band; the Stern-Brocot walk guarantees the
    /// first hit has the smallest possible denominator.
    ///
    /// # Panics
    ///
    /// Panics in debug mode unless `0 < tolerance < 1`.
    pub fn approximate_with(value: f64, tolerance: f64) -> Self {
        debug_assert!(
            tolerance > 0.0 && tolerance < 1.0,
            "tolerance must be between 0 and 1 exclusive (got {tolerance})"
        );

        let sign: i32 = match value.partial_cmp(&0.0) {
            Some(std::cmp::Ordering::Less) => -1,
            Some(std::cmp::Ordering::Greater) => 1,
            _ => 0,
        };
        let value = value.abs();

        // Scale the tolerance by the value's magnitude.
        let error = if sign != 0 { tolerance * value } else { tolerance };

        let whole = value.floor() as i32;
        let fractional = value - value.floor();

        if fractional < error {
            return Fraction::new(sign * whole, 1);
        }
        if 1.0 - error < fractional {
            return Fraction::new(sign * (whole + 1), 1);
        }

        // The lower bound is 0/1, the upper bound is 1/1.
        let (mut lower_n, mut lower_d) = (0i32, 1i32);
        let (mut upper_n, mut upper_d) = (1i32, 1i32);

        loop {
            let middle_n = lower_n + upper_n;
            let middle_d = lower_d + upper_d;

            if f64::from(middle_d) * (fractional + error) < f64::from(middle_n) {
                // fractional + error < middle: middle is the new upper bound
                upper_n = middle_n;
                upper_d = middle_d;
            } else if f64::from(middle_n) < (fractional - error) * f64::from(middle_d) {
                // middle < fractional - error: middle is the new lower bound
                lower_n = middle_n;
                lower_d = middle_d;
            } else {
                return Fraction::new((whole * middle_d + middle_n) * sign, middle_d);
            }
        }
    }

    /// Check if this fraction is an integer (denom == 1).
    pub const fn is_integer(self) -> bool {
        self.denom == 1
    }

    /// Convert to f64 (lossy).
    pub fn to_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.denom)
    }
}

/// Compute greatest common divisor using the Euclidean algorithm.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.denom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(Fraction::new(2, 4), Fraction::new(1, 2));
        assert_eq!(Fraction::new(6, 9), Fraction::new(2, 3));
        assert_eq!(Fraction::new(12, 8), Fraction::new(3, 2));
        assert_eq!(Fraction::new(0, 5), Fraction::new(0, 1));
    }

    #[test]
    fn test_half() {
        assert_eq!(Fraction::approximate(0.5), Fraction::new(1, 2));
        assert_eq!(Fraction::approximate(0.5).to_string(), "1/2");
    }

    #[test]
    fn test_integers_collapse() {
        assert_eq!(Fraction::approximate(1.0).to_string(), "1");
        assert_eq!(Fraction::approximate(0.0).to_string(), "0");
        assert_eq!(Fraction::approximate(200.0).to_string(), "200");
    }

    #[test]
    fn test_near_integer_rounds() {
        // 2.9999 is within relative tolerance of 3
        assert_eq!(Fraction::approximate(2.9999).to_string(), "3");
        assert_eq!(Fraction::approximate(3.0001).to_string(), "3");
    }

    #[test]
    fn test_third_within_tolerance() {
        assert_eq!(Fraction::approximate(0.3333).to_string(), "1/3");
        assert_eq!(Fraction::approximate(0.6667).to_string(), "2/3");
    }

    #[test]
    fn test_mixed_value() {
        assert_eq!(Fraction::approximate(2.25).to_string(), "9/4");
        assert_eq!(Fraction::approximate(1.5).to_string(), "3/2");
    }

    #[test]
    fn test_sign_preserved_on_numerator() {
        assert_eq!(Fraction::approximate(-0.5), Fraction::new(-1, 2));
        assert_eq!(Fraction::approximate(-0.5).to_string(), "-1/2");
        assert_eq!(Fraction::approximate(-2.25).to_string(), "-9/4");
    }

    #[test]
    fn test_smallest_denominator_wins() {
        // A loose tolerance prefers the simpler fraction.
        assert_eq!(Fraction::approximate_with(0.34, 0.1), Fraction::new(1, 3));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Fraction::new(1, 2).to_f64(), 0.5);
        assert!((Fraction::new(1, 3).to_f64() - 0.33333333).abs() < 1e-7);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(0, 5), 5);
    }
}
