//! Tabula Matrix - Generic dense matrices
//!
//! Provides a row-major `Matrix<T>` over any [`Element`] type:
//! - Construction (new, filled, identity, from_rows, from_vec, from_fn)
//! - Checked (`at`) and contract-checked (`m[(i, j)]`) element access
//! - Row-major and column-major iteration
//! - Element-wise arithmetic, scalar arithmetic, the matrix product
//! - Row and column transform primitives
//! - Gauss-Jordan solve and inverse, determinant, trace, transpose
//!
//! Use [`Rational`] elements for exact elimination, floats when rounding
//! is acceptable.
//!
//! ```
//! use tabula_matrix::prelude::*;
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 1.0], vec![0.0, 1.0]])?;
//! let b = Matrix::from_rows(vec![vec![3.0], vec![1.0]])?;
//! let x = a.solve(&b)?;
//! assert_eq!(x, Matrix::from_rows(vec![vec![2.0], vec![1.0]])?);
//! # Ok::<(), TabulaError>(())
//! ```

mod types;
mod helpers;
mod construct;
mod iter;
mod ops;
mod row_ops;
mod props;
mod solve;

pub use iter::{Column, ColumnIter};
pub use solve::{Pivoting, SolveOptions};
pub use tabula_core::{codes, Element, Rational, Result, TabulaError};
pub use types::Matrix;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Matrix, Pivoting, SolveOptions};
    pub use tabula_core::prelude::*;
}
