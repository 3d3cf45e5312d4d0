//! Core matrix type: storage, shape and element access

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use tabula_core::{ensures, requires, Result, TabulaError};

/// Dense matrix with row-major storage
///
/// Row `i` starts at offset `i * columns` of a single contiguous buffer,
/// so rows are reachable in O(1). The matrix owns its buffer; borrowed
/// iterators and row slices cannot outlive it.
///
/// Two access tiers:
/// - `m[(i, j)]` / `m[k]`: subscripts are preconditions, a bad one is a
///   contract violation
/// - [`Matrix::at`] / [`Matrix::at_index`]: checked, out-of-range subscripts
///   are reported as [`TabulaError`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) data: Vec<T>,
}

/// Unvalidated serialized form
#[derive(Deserialize)]
struct RawMatrix<T> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

/// Rejects buffers whose length does not match the declared shape
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawMatrix::<T>::deserialize(deserializer)?;
        Matrix::from_vec(raw.rows, raw.columns, raw.data).map_err(serde::de::Error::custom)
    }
}

/// Number of cells for a shape
///
/// Panics when the count overflows `usize`, whether or not contracts are
/// enabled: no buffer of that size could be allocated.
pub(crate) fn cell_count(rows: usize, columns: usize) -> usize {
    rows.checked_mul(columns)
        .unwrap_or_else(|| panic!("{}×{} matrix overflows usize", rows, columns))
}

impl<T> Matrix<T> {
    /// Assemble a matrix from a buffer already known to fit the shape
    pub(crate) fn from_parts(rows: usize, columns: usize, data: Vec<T>) -> Self {
        let m = Matrix { rows, columns, data };
        ensures!(m.is_coherent());
        m
    }

    /// Buffer length matches the shape
    pub(crate) fn is_coherent(&self) -> bool {
        self.rows.checked_mul(self.columns) == Some(self.data.len())
    }

    #[inline]
    pub(crate) fn offset(&self, i: usize, j: usize) -> usize {
        i * self.columns + j
    }

    // ========== Shape ==========

    /// Get number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cells, always `rows * columns`
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// True when the matrix holds no cell
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    pub fn is_valid_row(&self, i: usize) -> bool {
        i < self.rows
    }

    pub fn is_valid_column(&self, j: usize) -> bool {
        j < self.columns
    }

    /// Whether `(i, j)` addresses a cell of this matrix
    pub fn is_valid_subscript(&self, i: usize, j: usize) -> bool {
        self.is_valid_row(i) && self.is_valid_column(j)
    }

    /// Same number of rows and same number of columns
    pub fn has_same_dimensions<U>(&self, other: &Matrix<U>) -> bool {
        self.rows == other.rows && self.columns == other.columns
    }

    // ========== Checked access ==========

    /// Get element at (row, col), `None` when out of range
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if self.is_valid_subscript(i, j) {
            self.data.get(self.offset(i, j))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut T> {
        if self.is_valid_subscript(i, j) {
            let k = self.offset(i, j);
            self.data.get_mut(k)
        } else {
            None
        }
    }

    /// Gets the element at (row, col)
    ///
    /// # Errors
    /// [`TabulaError::OutOfRange`] if the subscript is not valid.
    pub fn at(&self, i: usize, j: usize) -> Result<&T> {
        let (rows, columns) = self.shape();
        self.get(i, j).ok_or(TabulaError::OutOfRange { row: i, column: j, rows, columns })
    }

    /// Mutable counterpart of [`Matrix::at`]
    pub fn at_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        let (rows, columns) = self.shape();
        self.get_mut(i, j).ok_or(TabulaError::OutOfRange { row: i, column: j, rows, columns })
    }

    /// Gets the element at a row-major position
    ///
    /// # Errors
    /// [`TabulaError::IndexOutOfRange`] if `index >= size()`.
    pub fn at_index(&self, index: usize) -> Result<&T> {
        let size = self.size();
        self.data.get(index).ok_or(TabulaError::IndexOutOfRange { index, size })
    }

    pub fn at_index_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.size();
        self.data.get_mut(index).ok_or(TabulaError::IndexOutOfRange { index, size })
    }

    // ========== Rows and raw storage ==========

    /// Borrow row `i` as a slice
    pub fn row(&self, i: usize) -> &[T] {
        requires!(self.is_valid_row(i), "row {} of a {}-row matrix", i, self.rows);
        let start = self.offset(i, 0);
        &self.data[start..start + self.columns]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        requires!(self.is_valid_row(i), "row {} of a {}-row matrix", i, self.rows);
        let start = self.offset(i, 0);
        let end = start + self.columns;
        &mut self.data[start..end]
    }

    /// Row-major view of every cell
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Take the row-major buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Exchange contents with another matrix without copying elements
    ///
    /// Calculus complexity: O(1)
    pub fn swap(&mut self, other: &mut Matrix<T>) {
        std::mem::swap(self, other);
    }
}

impl<T: Clone + Default> Matrix<T> {
    /// Resizes the matrix; the previous content is discarded
    ///
    /// The new buffer is built before the old one is released.
    pub fn resize(&mut self, rows: usize, columns: usize) {
        let mut fresh = Matrix::new(rows, columns);
        self.swap(&mut fresh);
    }
}

impl<T> Matrix<T> {
    /// Clears the matrix, setting its shape to 0×0
    pub fn clear(&mut self) {
        self.rows = 0;
        self.columns = 0;
        self.data = Vec::new();
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        requires!(
            self.is_valid_subscript(i, j),
            "subscript ({}, {}) in a {}×{} matrix", i, j, self.rows, self.columns
        );
        &self.data[self.offset(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        requires!(
            self.is_valid_subscript(i, j),
            "subscript ({}, {}) in a {}×{} matrix", i, j, self.rows, self.columns
        );
        let k = self.offset(i, j);
        &mut self.data[k]
    }
}

/// Row-major flat subscript
impl<T> Index<usize> for Matrix<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        requires!(index < self.size(), "index {} in a matrix of size {}", index, self.size());
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        requires!(index < self.size(), "index {} in a matrix of size {}", index, self.size());
        &mut self.data[index]
    }
}

/// Tab-separated columns, one line per row
///
/// Nothing is written for a matrix without rows or columns.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 || self.columns == 0 {
            return Ok(());
        }

        for i in 0..self.rows {
            for (j, val) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::codes;

    fn sample() -> Matrix<i32> {
        Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    #[test]
    fn test_shape() {
        let m = sample();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        assert_eq!(m.size(), 6);
        assert_eq!(m.shape(), (2, 3));
        assert!(!m.is_square());
        assert!(!m.is_empty());
    }

    #[test]
    fn test_has_same_dimensions() {
        let m = sample();
        assert!(m.has_same_dimensions(&Matrix::<f64>::new(2, 3)));
        assert!(!m.has_same_dimensions(&Matrix::<i32>::new(3, 2)));
        assert!(!m.has_same_dimensions(&Matrix::<i32>::new(2, 4)));
        assert!(!m.has_same_dimensions(&Matrix::<i32>::new(1, 3)));
    }

    #[test]
    fn test_subscript_validity() {
        let m = sample();
        assert!(m.is_valid_subscript(0, 0));
        assert!(m.is_valid_subscript(1, 2));
        assert!(!m.is_valid_subscript(2, 0));
        assert!(!m.is_valid_subscript(0, 3));
        assert!(!Matrix::<i32>::default().is_valid_subscript(0, 0));
    }

    #[test]
    fn test_unchecked_and_checked_agree() {
        let mut m = sample();
        *m.at_mut(0, 0).unwrap() = 10;
        assert_eq!(m[(0, 0)], 10);

        m[(1, 0)] = 20;
        assert_eq!(*m.at(1, 0).unwrap(), 20);
        assert_eq!(m[3], 20);
        assert_eq!(*m.at_index(5).unwrap(), 6);
    }

    #[test]
    fn test_at_out_of_range() {
        let m = sample();
        let err = m.at(2, 3).unwrap_err();
        assert_eq!(err, TabulaError::OutOfRange { row: 2, column: 3, rows: 2, columns: 3 });
        assert_eq!(err.code(), codes::OUT_OF_RANGE);
        assert_eq!(m.get(0, 3), None);

        let err = m.at_index(6).unwrap_err();
        assert_eq!(err, TabulaError::IndexOutOfRange { index: 6, size: 6 });
    }

    #[test]
    #[should_panic(expected = "contract violated")]
    fn test_unchecked_out_of_range() {
        let m = sample();
        let _ = m[(2, 3)];
    }

    #[test]
    #[should_panic(expected = "contract violated")]
    fn test_flat_out_of_range() {
        let mut m = sample();
        m[6] = 0;
    }

    #[test]
    fn test_rows() {
        let mut m = sample();
        assert_eq!(m.row(1), &[4, 5, 6]);
        m.row_mut(0)[2] = 9;
        assert_eq!(m.as_slice(), &[1, 2, 9, 4, 5, 6]);
    }

    #[test]
    fn test_swap_is_whole_exchange() {
        let mut a = sample();
        let mut b = Matrix::filled(1, 1, 7);
        a.swap(&mut b);
        assert_eq!(a, Matrix::filled(1, 1, 7));
        assert_eq!(b, sample());
    }

    #[test]
    fn test_resize_discards_content() {
        let mut m = sample();
        m.resize(3, 1);
        assert_eq!(m.shape(), (3, 1));
        assert_eq!(m.as_slice(), &[0, 0, 0]);
        m.clear();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
    }

    #[test]
    fn test_equality_needs_same_shape() {
        let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::from_vec(1, 4, vec![1, 2, 3, 4]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "1\t2\n3\t4\n");

        let column = Matrix::from_vec(2, 1, vec![5, 6]).unwrap();
        assert_eq!(column.to_string(), "5\n6\n");

        assert_eq!(Matrix::<i32>::new(0, 3).to_string(), "");
        assert_eq!(Matrix::<i32>::new(3, 0).to_string(), "");
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(cell_count(3, 4), 12);
        assert_eq!(cell_count(0, usize::MAX), 0);
    }

    #[test]
    #[should_panic(expected = "matrix overflows usize")]
    fn test_cell_count_overflow() {
        let _ = Matrix::filled(usize::MAX, 2, 0u8);
    }

    #[test]
    fn test_serde_round_trip() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"rows":2,"columns":3,"data":[1,2,3,4,5,6]}"#);
        let back: Matrix<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_serde_rejects_bad_length() {
        let json = r#"{"rows":2,"columns":2,"data":[1,2,3]}"#;
        let err = serde_json::from_str::<Matrix<i32>>(json).unwrap_err();
        assert!(err.to_string().contains("Expected 4 values, got 3"));
    }
}
