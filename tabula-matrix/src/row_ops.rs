//! Row and column transform primitives
//!
//! Elimination is written entirely in terms of these. Each one reads cell
//! `c` of its sources before writing cell `c` of its target, so a target
//! that is also a source behaves as an in-place transform.

use crate::helpers::{check_column, check_row};
use crate::types::Matrix;
use tabula_core::requires;

impl<T: Clone> Matrix<T> {
    /// Set row `j` to `f` applied to each cell of row `i`
    pub fn op_row<F>(&mut self, i: usize, j: usize, mut f: F)
    where
        F: FnMut(&T) -> T,
    {
        check_row(self, i, "op_row");
        check_row(self, j, "op_row");
        for c in 0..self.columns {
            let value = f(&self.data[self.offset(i, c)]);
            let k = self.offset(j, c);
            self.data[k] = value;
        }
    }

    /// Set row `k` to `f(row i, row j)` cell by cell
    pub fn op_row_binary<F>(&mut self, i: usize, j: usize, k: usize, mut f: F)
    where
        F: FnMut(&T, &T) -> T,
    {
        check_row(self, i, "op_row_binary");
        check_row(self, j, "op_row_binary");
        check_row(self, k, "op_row_binary");
        for c in 0..self.columns {
            let value = f(&self.data[self.offset(i, c)], &self.data[self.offset(j, c)]);
            let target = self.offset(k, c);
            self.data[target] = value;
        }
    }

    /// Set column `j` to `f` applied to each cell of column `i`
    pub fn op_column<F>(&mut self, i: usize, j: usize, mut f: F)
    where
        F: FnMut(&T) -> T,
    {
        check_column(self, i, "op_column");
        check_column(self, j, "op_column");
        for r in 0..self.rows {
            let value = f(&self.data[self.offset(r, i)]);
            let target = self.offset(r, j);
            self.data[target] = value;
        }
    }

    /// Set column `k` to `f(column i, column j)` cell by cell
    pub fn op_column_binary<F>(&mut self, i: usize, j: usize, k: usize, mut f: F)
    where
        F: FnMut(&T, &T) -> T,
    {
        check_column(self, i, "op_column_binary");
        check_column(self, j, "op_column_binary");
        check_column(self, k, "op_column_binary");
        for r in 0..self.rows {
            let value = f(&self.data[self.offset(r, i)], &self.data[self.offset(r, j)]);
            let target = self.offset(r, k);
            self.data[target] = value;
        }
    }
}

impl<T> Matrix<T> {
    /// Exchange rows `i` and `j`
    ///
    /// Calculus complexity: O(columns)
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        check_row(self, i, "swap_rows");
        check_row(self, j, "swap_rows");
        requires!(i != j, "swap_rows: cannot swap row {} with itself", i);

        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let columns = self.columns;
        let (head, tail) = self.data.split_at_mut(hi * columns);
        head[lo * columns..(lo + 1) * columns].swap_with_slice(&mut tail[..columns]);
    }

    /// Exchange columns `i` and `j`
    ///
    /// Calculus complexity: O(rows)
    pub fn swap_columns(&mut self, i: usize, j: usize) {
        check_column(self, i, "swap_columns");
        check_column(self, j, "swap_columns");
        requires!(i != j, "swap_columns: cannot swap column {} with itself", i);

        for r in 0..self.rows {
            let (a, b) = (self.offset(r, i), self.offset(r, j));
            self.data.swap(a, b);
        }
    }
}
