//! Structural properties: transpose, trace, determinant, symmetry

use crate::helpers::check_square;
use crate::types::Matrix;
use std::ops::AddAssign;
use tabula_core::{requires, Element};

impl<T: Clone> Matrix<T> {
    /// New columns×rows matrix with `(j, i) = self(i, j)`
    pub fn transpose(&self) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.size());
        for j in 0..self.columns {
            data.extend(self.column(j).cloned());
        }
        Matrix::from_parts(self.columns, self.rows, data)
    }

    /// Sum of the diagonal, accumulated in `R` starting from `R::default()`
    ///
    /// ```
    /// use tabula_matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![2u8, 0], vec![0, 250]]).unwrap();
    /// assert_eq!(m.trace_as::<u32>(), 252);
    /// ```
    pub fn trace_as<R>(&self) -> R
    where
        R: Default + AddAssign + From<T>,
    {
        check_square(self, "trace");
        let mut acc = R::default();
        for i in 0..self.rows {
            acc += R::from(self[(i, i)].clone());
        }
        acc
    }
}

impl<T: Clone + Default + AddAssign> Matrix<T> {
    /// Sum of the diagonal in the element type
    pub fn trace(&self) -> T {
        self.trace_as::<T>()
    }
}

impl<T: PartialEq> Matrix<T> {
    /// Square and equal to its own transpose
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        (0..self.rows).all(|i| (0..i).all(|j| self[(i, j)] == self[(j, i)]))
    }
}

impl<T: Element> Matrix<T> {
    /// Determinant
    ///
    /// Dimensions 1 to 3 use the cofactor formulas. Larger matrices use
    /// fraction-free elimination, exact for integers and rationals; a
    /// column without a non-zero pivot gives zero.
    pub fn det(&self) -> T {
        check_square(self, "det");
        requires!(!self.is_empty(), "det: matrix must not be empty");

        let m = |i: usize, j: usize| self[(i, j)].clone();
        match self.rows {
            1 => m(0, 0),
            2 => m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0),
            3 => {
                m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
                    - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
                    + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
            }
            _ => self.det_bareiss(),
        }
    }

    /// Fraction-free (Bareiss) elimination on a copy
    ///
    /// Each division is exact, so integer elements give the exact
    /// determinant. Unsigned elements additionally need every leading
    /// minor met along the way to be non-negative.
    fn det_bareiss(&self) -> T {
        let n = self.rows;
        let mut a = self.clone();
        let mut negate = false;
        let mut previous = T::one();

        for k in 0..n - 1 {
            let Some(p) = (k..n).find(|&r| !a[(r, k)].is_zero()) else {
                return T::zero();
            };
            if p != k {
                a.swap_rows(p, k);
                negate = !negate;
            }
            let pivot = a[(k, k)].clone();
            for i in k + 1..n {
                let factor = a[(i, k)].clone();
                a.op_row_binary(i, k, i, |x, y| {
                    (x.clone() * pivot.clone() - factor.clone() * y.clone()) / previous.clone()
                });
            }
            previous = pivot;
        }

        let det = a[(n - 1, n - 1)].clone();
        if negate {
            T::zero() - det
        } else {
            det
        }
    }
}
