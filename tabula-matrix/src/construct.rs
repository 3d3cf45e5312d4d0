//! Matrix construction

use crate::types::{cell_count, Matrix};
use tabula_core::{Element, Result, TabulaError};

impl<T: Clone + Default> Matrix<T> {
    /// Create a rows×columns matrix of default elements
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::filled(rows, columns, T::default())
    }

    /// Create a dim×dim matrix of default elements
    pub fn square(dim: usize) -> Self {
        Self::new(dim, dim)
    }
}

impl<T: Clone> Matrix<T> {
    /// Create a matrix with every cell set to `value`
    pub fn filled(rows: usize, columns: usize, value: T) -> Self {
        let size = cell_count(rows, columns);
        Matrix::from_parts(rows, columns, vec![value; size])
    }

    /// Identity built from caller-supplied zero and one
    ///
    /// For element types whose zero and one are not reachable through
    /// [`num_traits::Zero`] / [`num_traits::One`].
    pub fn identity_with(dim: usize, zero: T, one: T) -> Self {
        let mut m = Self::filled(dim, dim, zero);
        for i in 0..dim {
            m[(i, i)] = one.clone();
        }
        m
    }
}

impl<T> Matrix<T> {
    /// Create a matrix from a row-major buffer
    ///
    /// # Errors
    /// [`TabulaError::DataLength`] if `data.len() != rows * columns`.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<T>) -> Result<Self> {
        let expected = rows.checked_mul(columns);
        if expected != Some(data.len()) {
            return Err(TabulaError::DataLength {
                expected: expected.unwrap_or(usize::MAX),
                got: data.len(),
            });
        }
        Ok(Matrix::from_parts(rows, columns, data))
    }

    /// Create a matrix from nested rows
    ///
    /// An empty list gives a 0×0 matrix.
    ///
    /// # Errors
    /// [`TabulaError::RaggedRows`] if rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(cell_count(n_rows, n_cols));
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(TabulaError::RaggedRows { row: i, len: row.len(), expected: n_cols });
            }
            data.extend(row);
        }
        Ok(Matrix::from_parts(n_rows, n_cols, data))
    }

    /// Create a matrix where cell (i, j) is `f(i, j)`
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(cell_count(rows, columns));
        for i in 0..rows {
            for j in 0..columns {
                data.push(f(i, j));
            }
        }
        Matrix::from_parts(rows, columns, data)
    }

    /// Element-wise conversion from a matrix of another type
    pub fn convert_from<U>(other: &Matrix<U>) -> Self
    where
        U: Clone,
        T: From<U>,
    {
        let data = other.as_slice().iter().cloned().map(T::from).collect();
        Matrix::from_parts(other.rows(), other.columns(), data)
    }
}

impl<T: Element> Matrix<T> {
    /// Create a dim×dim identity matrix
    pub fn identity(dim: usize) -> Self {
        Self::identity_with(dim, T::zero(), T::one())
    }
}

/// The empty 0×0 matrix
impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix { rows: 0, columns: 0, data: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::Rational;

    #[test]
    fn test_new_and_square() {
        let m = Matrix::<f64>::new(2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert!(m.iter().all(|&x| x == 0.0));

        let s = Matrix::<i32>::square(4);
        assert_eq!(s.shape(), (4, 4));
        assert_eq!(s.size(), 16);
    }

    #[test]
    fn test_zero_sized() {
        let m = Matrix::<i32>::new(0, 5);
        assert_eq!(m.shape(), (0, 5));
        assert!(m.is_empty());
        assert_eq!(Matrix::<i32>::default().shape(), (0, 0));
    }

    #[test]
    fn test_filled() {
        let m = Matrix::filled(2, 2, 7u8);
        assert_eq!(m.as_slice(), &[7, 7, 7, 7]);
    }

    #[test]
    fn test_identity() {
        let id = Matrix::<f64>::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(id[(i, j)], if i == j { 1.0 } else { 0.0 });
            }
        }

        let named = Matrix::identity_with(2, "o", "x");
        assert_eq!(named.as_slice(), &["x", "o", "o", "x"]);
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m[(2, 1)], 6);

        let empty = Matrix::<i32>::from_rows(vec![]).unwrap();
        assert_eq!(empty.shape(), (0, 0));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err, TabulaError::RaggedRows { row: 1, len: 1, expected: 2 });
    }

    #[test]
    fn test_from_vec_length() {
        let err = Matrix::from_vec(2, 3, vec![0; 5]).unwrap_err();
        assert_eq!(err, TabulaError::DataLength { expected: 6, got: 5 });
        assert!(Matrix::from_vec(2, 3, vec![0; 6]).is_ok());
    }

    #[test]
    fn test_from_fn() {
        let m = Matrix::from_fn(2, 3, |i, j| 10 * i + j);
        assert_eq!(m.as_slice(), &[0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_clone_is_equal_and_independent() {
        let a = Matrix::from_fn(2, 2, |i, j| (i + j) as f64);
        let mut b = a.clone();
        assert_eq!(a, b);
        b[(0, 0)] = 9.0;
        assert_ne!(a, b);
    }

    #[test]
    fn test_convert_from() {
        let ints = Matrix::from_rows(vec![vec![1i32, -2], vec![3, 4]]).unwrap();
        let floats = Matrix::<f64>::convert_from(&ints);
        assert_eq!(floats.as_slice(), &[1.0, -2.0, 3.0, 4.0]);

        let exact = Matrix::<Rational>::convert_from(&ints);
        assert_eq!(exact[(0, 1)], Rational::from(-2));
        assert_eq!(exact.shape(), ints.shape());
    }
}
