//! Exact rational numbers using dashu
//!
//! Uses dashu-ratio (RBig) so that elimination, inversion and
//! determinants stay exact: no rounding, no tolerance when testing a
//! pivot against zero.

use crate::{Result, TabulaError};
use dashu_base::Approximation;
use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use num_traits::{One, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Arbitrary precision fraction, always kept in lowest terms
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rational {
    inner: RBig,
}

impl Rational {
    // ========== Construction ==========

    /// Create from numerator and denominator
    pub fn from_ratio(num: i64, den: i64) -> Result<Self> {
        if den == 0 {
            return Err(TabulaError::DivisionByZero);
        }
        Ok(Self {
            inner: RBig::from_parts_signed(IBig::from(num), IBig::from(den)),
        })
    }

    /// Create from i64
    pub fn from_i64(n: i64) -> Self {
        Self { inner: RBig::from(IBig::from(n)) }
    }

    // ========== Predicates ==========

    /// Check if value is an integer
    pub fn is_integer(&self) -> bool {
        *self.inner.denominator() == UBig::ONE
    }

    /// Check if negative
    pub fn is_negative(&self) -> bool {
        self.inner < RBig::ZERO
    }

    // ========== Parts ==========

    /// Numerator, carrying the sign
    pub fn numerator(&self) -> &IBig {
        self.inner.numerator()
    }

    /// Denominator, always positive
    pub fn denominator(&self) -> &UBig {
        self.inner.denominator()
    }

    // ========== Arithmetic ==========

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            Err(TabulaError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Reciprocal 1/x
    pub fn recip(&self) -> Result<Self> {
        Self::one().checked_div(self)
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Convert to f64 (nearest representable value)
    pub fn to_f64(&self) -> f64 {
        match self.inner.to_f64() {
            Approximation::Exact(f) => f,
            Approximation::Inexact(f, _) => f,
        }
    }
}

// ========== Parsing ==========

fn parse_int(s: &str, whole: &str) -> Result<IBig> {
    s.trim()
        .parse::<IBig>()
        .map_err(|_| TabulaError::Parse(whole.to_string()))
}

fn parse_decimal(s: &str, whole: &str) -> Result<RBig> {
    let Some((int_part, frac_part)) = s.split_once('.') else {
        return Ok(RBig::from(parse_int(s, whole)?));
    };
    if frac_part.is_empty() || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TabulaError::Parse(whole.to_string()));
    }
    let int_part = match int_part.trim() {
        "" | "+" => "0".to_string(),
        "-" => "-0".to_string(),
        other => other.to_string(),
    };
    let negative = int_part.starts_with('-');
    let scale = UBig::from(10u8).pow(frac_part.len());
    let int_value = parse_int(&int_part, whole)?;
    let frac_value = parse_int(frac_part, whole)?;
    let numerator = int_value * IBig::from(scale.clone())
        + if negative { -frac_value } else { frac_value };
    Ok(RBig::from_parts(numerator, scale))
}

impl FromStr for Rational {
    type Err = TabulaError;

    /// Supports: "42", "-7", "3/4", "-1/-3", "1.25"
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TabulaError::Parse(s.to_string()));
        }

        if let Some((num_str, den_str)) = s.split_once('/') {
            let num = parse_int(num_str, s)?;
            let den = parse_int(den_str, s)?;
            if den == IBig::ZERO {
                return Err(TabulaError::DivisionByZero);
            }
            return Ok(Self { inner: RBig::from_parts_signed(num, den) });
        }

        Ok(Self { inner: parse_decimal(s, s)? })
    }
}

// ========== Trait Implementations ==========

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_i64(n as i64)
    }
}

impl From<IBig> for Rational {
    fn from(n: IBig) -> Self {
        Self { inner: RBig::from(n) }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self { inner: RBig::ZERO }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self { inner: RBig::ZERO }
    }

    fn is_zero(&self) -> bool {
        self.inner == RBig::ZERO
    }
}

impl One for Rational {
    fn one() -> Self {
        Self { inner: RBig::ONE }
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        Rational { inner: self.inner + rhs.inner }
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        Rational { inner: self.inner - rhs.inner }
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational { inner: self.inner * rhs.inner }
    }
}

/// Panics on a zero divisor, like integer division. Use
/// [`Rational::checked_div`] when the divisor is not known to be non-zero.
impl Div for Rational {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Rational {
        Rational { inner: self.inner / rhs.inner }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational { inner: -self.inner }
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Rational) {
        self.inner = &self.inner + &rhs.inner;
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Rational) {
        self.inner = &self.inner - &rhs.inner;
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Rational) {
        self.inner = &self.inner * &rhs.inner;
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Rational) {
        self.inner = &self.inner / &rhs.inner;
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(num: i64, den: i64) -> Rational {
        Rational::from_ratio(num, den).unwrap()
    }

    #[test]
    fn test_lowest_terms() {
        assert_eq!(r(2, 4), r(1, 2));
        assert_eq!(r(3, -6), r(-1, 2));
        assert_eq!(r(-3, -6).to_string(), "1/2");
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Rational::from_ratio(1, 0), Err(TabulaError::DivisionByZero));
        assert_eq!("3/0".parse::<Rational>(), Err(TabulaError::DivisionByZero));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("42".parse::<Rational>().unwrap(), Rational::from(42));
        assert_eq!(" -7 ".parse::<Rational>().unwrap(), Rational::from(-7));
        assert_eq!("3/4".parse::<Rational>().unwrap(), r(3, 4));
        assert_eq!("-1/-3".parse::<Rational>().unwrap(), r(1, 3));
        assert_eq!("1.25".parse::<Rational>().unwrap(), r(5, 4));
        assert_eq!("-0.5".parse::<Rational>().unwrap(), r(-1, 2));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(matches!("".parse::<Rational>(), Err(TabulaError::Parse(_))));
        assert!(matches!("abc".parse::<Rational>(), Err(TabulaError::Parse(_))));
        assert!(matches!("1/x".parse::<Rational>(), Err(TabulaError::Parse(_))));
        assert!(matches!("1.-5".parse::<Rational>(), Err(TabulaError::Parse(_))));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(r(1, 2) + r(1, 3), r(5, 6));
        assert_eq!(r(1, 2) - r(1, 3), r(1, 6));
        assert_eq!(r(2, 3) * r(3, 4), r(1, 2));
        assert_eq!(r(1, 2) / r(1, 4), Rational::from(2));
        assert_eq!(-r(1, 2), r(-1, 2));

        let mut x = r(1, 2);
        x += r(1, 2);
        x *= Rational::from(3);
        x -= Rational::from(1);
        x /= Rational::from(4);
        assert_eq!(x, r(1, 2));
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(r(3, 4).checked_div(&r(3, 2)).unwrap(), r(1, 2));
        assert_eq!(r(3, 4).checked_div(&Rational::zero()), Err(TabulaError::DivisionByZero));
        assert_eq!(r(-2, 3).recip().unwrap(), r(-3, 2));
        assert!(Rational::zero().recip().is_err());
    }

    #[test]
    fn test_predicates() {
        assert!(Rational::from(5).is_integer());
        assert!(!r(5, 2).is_integer());
        assert!(r(-1, 9).is_negative());
        assert_eq!(r(-1, 9).abs(), r(1, 9));
        assert!(r(1, 3) < r(1, 2));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(r(1, 4).to_f64(), 0.25);
        assert!((r(1, 3).to_f64() - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&r(-7, 3)).unwrap();
        assert_eq!(json, "\"-7/3\"");
        let back: Rational = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r(-7, 3));
        assert!(serde_json::from_str::<Rational>("\"1/0\"").is_err());
    }
}
