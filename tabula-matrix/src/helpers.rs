//! Shape checks shared by the matrix operations
//!
//! Every helper is a precondition: a mismatch is a programmer error and
//! goes through `requires!`, never through `Result`.

use crate::types::Matrix;
use tabula_core::requires;

/// Check that two matrices have the same dimensions
pub(crate) fn check_same_dims<T, U>(a: &Matrix<T>, b: &Matrix<U>, op: &str) {
    requires!(
        a.has_same_dimensions(b),
        "{}: matrices must have same dimensions: {}×{} vs {}×{}",
        op, a.rows(), a.columns(), b.rows(), b.columns()
    );
}

/// Check dimensions for a matrix product
pub(crate) fn check_mprod_dims<T>(a: &Matrix<T>, b: &Matrix<T>) {
    requires!(
        a.columns() == b.rows(),
        "mprod: cannot multiply {}×{} by {}×{}",
        a.rows(), a.columns(), b.rows(), b.columns()
    );
}

/// Check that a matrix is square
pub(crate) fn check_square<T>(m: &Matrix<T>, op: &str) {
    requires!(
        m.is_square(),
        "{}: matrix must be square, got {}×{}",
        op, m.rows(), m.columns()
    );
}

pub(crate) fn check_row<T>(m: &Matrix<T>, i: usize, op: &str) {
    requires!(m.is_valid_row(i), "{}: no row {} in a {}-row matrix", op, i, m.rows());
}

pub(crate) fn check_column<T>(m: &Matrix<T>, j: usize, op: &str) {
    requires!(
        m.is_valid_column(j),
        "{}: no column {} in a {}-column matrix", op, j, m.columns()
    );
}
