//! Row-major and column-major traversal

use crate::helpers::check_column;
use crate::types::Matrix;
use std::iter::{FusedIterator, Skip, StepBy};
use std::slice;

/// Column-major traversal of a matrix
///
/// Walks column 0 top to bottom, then column 1, and so on. Runs from
/// either end and knows its remaining length.
#[derive(Debug, Clone)]
pub struct ColumnIter<'a, T> {
    matrix: &'a Matrix<T>,
    front: usize,
    back: usize,
}

impl<'a, T> ColumnIter<'a, T> {
    fn new(matrix: &'a Matrix<T>) -> Self {
        ColumnIter { matrix, front: 0, back: matrix.size() }
    }

    /// Cell at column-major position `p`
    fn cell(&self, p: usize) -> &'a T {
        let matrix = self.matrix;
        let rows = matrix.rows();
        &matrix.as_slice()[matrix.offset(p % rows, p / rows)]
    }
}

impl<'a, T> Iterator for ColumnIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.cell(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for ColumnIter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.cell(self.back))
    }
}

impl<T> ExactSizeIterator for ColumnIter<'_, T> {}

impl<T> FusedIterator for ColumnIter<'_, T> {}

/// Iterator over a single column, top to bottom
pub type Column<'a, T> = StepBy<Skip<slice::Iter<'a, T>>>;

impl<T> Matrix<T> {
    /// Row-major iterator over every cell
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutable row-major iterator over every cell
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Column-major iterator over every cell
    pub fn column_iter(&self) -> ColumnIter<'_, T> {
        ColumnIter::new(self)
    }

    /// Iterator over column `j`
    pub fn column(&self, j: usize) -> Column<'_, T> {
        check_column(self, j, "column");
        self.data.iter().skip(j).step_by(self.columns)
    }
}

impl<T> IntoIterator for Matrix<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Matrix<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
