//! Gauss-Jordan solve and inverse
//!
//! Rows are eliminated in index order. A pivot that is exactly zero stops
//! the solve with [`TabulaError::Singular`] before any division by it.

use crate::helpers::check_square;
use crate::types::Matrix;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tabula_core::{requires, Element, Result, TabulaError};
use tracing::{debug, trace};

/// Row reordering policy when a pivot is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pivoting {
    /// Rows are never reordered; a zero pivot is reported as singular
    None,
    /// Swap in the first lower row whose entry in the pivot column is non-zero
    NonZero,
}

impl Default for Pivoting {
    fn default() -> Self {
        Pivoting::None
    }
}

impl FromStr for Pivoting {
    type Err = TabulaError;

    /// Case-insensitive: "none", "off", "nonzero", "non-zero"
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(Pivoting::None),
            "nonzero" | "non-zero" => Ok(Pivoting::NonZero),
            _ => Err(TabulaError::Parse(s.to_string())),
        }
    }
}

/// Solver configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveOptions {
    pub pivoting: Pivoting,
}

impl SolveOptions {
    /// Set the pivoting policy
    pub fn with_pivoting(mut self, pivoting: Pivoting) -> Self {
        self.pivoting = pivoting;
        self
    }
}

impl<T: Element> Matrix<T> {
    /// Solve `self · X = b` in place, leaving X in `b`
    ///
    /// `self` is reduced to upper-triangular form. On error both
    /// matrices are left partially eliminated and must not be reused.
    ///
    /// # Errors
    /// [`TabulaError::Singular`] when a pivot is zero.
    pub fn solve_perf(&mut self, b: &mut Matrix<T>) -> Result<()> {
        self.solve_perf_with(b, SolveOptions::default())
    }

    /// [`Matrix::solve_perf`] with explicit options
    pub fn solve_perf_with(&mut self, b: &mut Matrix<T>, options: SolveOptions) -> Result<()> {
        check_square(self, "solve");
        requires!(
            self.columns == b.rows,
            "solve: right-hand side has {} rows, expected {}", b.rows, self.columns
        );

        let n = self.rows;
        debug!(n, rhs_columns = b.columns, pivoting = ?options.pivoting, "solve");

        // Forward elimination to upper-triangular form
        for i in 0..n {
            self.prepare_pivot(b, i, options.pivoting)?;
            let pivot = self[(i, i)].clone();

            for j in i + 1..n {
                let c = self[(j, i)].clone() / pivot.clone();
                trace!(pivot_row = i, row = j, coefficient = ?c, "eliminate");
                self.op_row_binary(j, i, j, |x, y| x.clone() - c.clone() * y.clone());
                b.op_row_binary(j, i, j, |x, y| x.clone() - c.clone() * y.clone());
            }
        }

        // Back substitution, then normalization of each row
        for i in (0..n).rev() {
            for j in i + 1..n {
                let a_ij = self[(i, j)].clone();
                if !a_ij.is_zero() {
                    b.op_row_binary(i, j, i, |x, y| x.clone() - a_ij.clone() * y.clone());
                }
            }
            let pivot = self[(i, i)].clone();
            b.op_row(i, i, |x| x.clone() / pivot.clone());
        }
        Ok(())
    }

    /// Ensure `self(i, i)` is non-zero, swapping rows if the policy allows
    fn prepare_pivot(&mut self, b: &mut Matrix<T>, i: usize, pivoting: Pivoting) -> Result<()> {
        if !self[(i, i)].is_zero() {
            return Ok(());
        }

        if pivoting == Pivoting::NonZero {
            if let Some(p) = (i + 1..self.rows).find(|&r| !self[(r, i)].is_zero()) {
                trace!(pivot_row = i, swapped_with = p, "row swap");
                self.swap_rows(i, p);
                b.swap_rows(i, p);
                return Ok(());
            }
        }

        debug!(pivot = i, "zero pivot, matrix is singular");
        Err(TabulaError::Singular { pivot: i })
    }

    /// Solve `self · X = b`, leaving both operands untouched
    ///
    /// # Errors
    /// [`TabulaError::Singular`] when a pivot is zero.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>> {
        self.solve_with(b, SolveOptions::default())
    }

    pub fn solve_with(&self, b: &Matrix<T>, options: SolveOptions) -> Result<Matrix<T>> {
        let mut a = self.clone();
        let mut x = b.clone();
        a.solve_perf_with(&mut x, options)?;
        Ok(x)
    }

    /// Inverse, consuming `self` as scratch space
    ///
    /// Calculus complexity: O(n³)
    pub fn inverse_perf(&mut self) -> Result<Matrix<T>> {
        self.inverse_perf_with(SolveOptions::default())
    }

    pub fn inverse_perf_with(&mut self, options: SolveOptions) -> Result<Matrix<T>> {
        check_square(self, "inverse");
        let mut inverse = Matrix::identity(self.rows);
        self.solve_perf_with(&mut inverse, options)?;
        Ok(inverse)
    }

    /// Inverse
    ///
    /// ```
    /// use tabula_matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 2.0]]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv, Matrix::from_rows(vec![vec![0.5, 0.0], vec![0.0, 0.5]]).unwrap());
    /// ```
    ///
    /// # Errors
    /// [`TabulaError::Singular`] when a pivot is zero.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        self.inverse_with(SolveOptions::default())
    }

    pub fn inverse_with(&self, options: SolveOptions) -> Result<Matrix<T>> {
        self.clone().inverse_perf_with(options)
    }
}
