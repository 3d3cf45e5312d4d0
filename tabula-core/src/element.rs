//! Element trait for matrix cells

use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Trait for types that can be stored in a matrix
///
/// # Bounds
/// - `Clone + Default` - cells are default-constructed, then assigned
/// - `PartialEq + Debug` - equality of whole matrices, assertion output
/// - `Zero + One` - identity construction, product accumulators, pivot checks
/// - `Add + Sub + Mul + Div` and their assign forms - element-wise arithmetic
///
/// Solving and inversion assume exact division: floating point and
/// [`Rational`](crate::Rational) work, integer types truncate.
///
/// Implemented for every type meeting the bounds.
pub trait Element:
    Clone
    + Default
    + PartialEq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
}

impl<T> Element for T where
    T: Clone
        + Default
        + PartialEq
        + Debug
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rational;

    fn assert_element<T: Element>() {}

    #[test]
    fn test_primitives_are_elements() {
        assert_element::<f32>();
        assert_element::<f64>();
        assert_element::<i32>();
        assert_element::<i64>();
        assert_element::<u64>();
    }

    #[test]
    fn test_rational_is_element() {
        assert_element::<Rational>();
        assert!(Rational::zero().is_zero());
        assert_eq!(Rational::one(), Rational::from(1));
        assert_eq!(Rational::default(), Rational::zero());
    }
}
