//! Element-wise arithmetic and the matrix product
//!
//! Non-mutating forms clone the left operand and apply the compound
//! assignment to the copy. Matrix-matrix element-wise forms require equal
//! shapes; `*` between two matrices is the true product.

use crate::helpers::{check_mprod_dims, check_same_dims};
use crate::types::Matrix;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign,
};
use tabula_core::{Element, Rational};

impl<T> Matrix<T> {
    /// Apply `f` to each cell paired with the same cell of `other`
    pub(crate) fn zip_apply<U, F>(&mut self, other: &Matrix<U>, op: &str, mut f: F)
    where
        F: FnMut(&mut T, &U),
    {
        check_same_dims(self, other, op);
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            f(a, b);
        }
    }

    /// Apply `f` to every cell in place
    pub fn apply<F: FnMut(&mut T)>(&mut self, f: F) {
        self.data.iter_mut().for_each(f);
    }

    /// New matrix of the same shape with `f` applied to every cell
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Matrix<U> {
        Matrix::from_parts(self.rows, self.columns, self.data.iter().map(f).collect())
    }
}

impl<T: Clone> Matrix<T> {
    /// Set every cell to `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

// ========== Element-wise products ==========

impl<T: Clone + MulAssign> Matrix<T> {
    /// Element-wise (Hadamard) product in place
    pub fn hadamard_assign(&mut self, other: &Matrix<T>) {
        self.zip_apply(other, "hadamard", |a, b| *a *= b.clone());
    }

    /// Element-wise (Hadamard) product
    pub fn hadamard(&self, other: &Matrix<T>) -> Matrix<T> {
        let mut out = self.clone();
        out.hadamard_assign(other);
        out
    }
}

impl<T: Clone + DivAssign> Matrix<T> {
    pub fn div_elementwise_assign(&mut self, other: &Matrix<T>) {
        self.zip_apply(other, "div_elementwise", |a, b| *a /= b.clone());
    }

    /// Element-wise quotient
    pub fn div_elementwise(&self, other: &Matrix<T>) -> Matrix<T> {
        let mut out = self.clone();
        out.div_elementwise_assign(other);
        out
    }
}

impl<T: Clone + RemAssign> Matrix<T> {
    pub fn rem_elementwise_assign(&mut self, other: &Matrix<T>) {
        self.zip_apply(other, "rem_elementwise", |a, b| *a %= b.clone());
    }

    /// Element-wise remainder
    pub fn rem_elementwise(&self, other: &Matrix<T>) -> Matrix<T> {
        let mut out = self.clone();
        out.rem_elementwise_assign(other);
        out
    }
}

// ========== Matrix product ==========

impl<T: Element> Matrix<T> {
    /// Matrix product `self · other`
    ///
    /// Requires `self.columns() == other.rows()`.
    /// Calculus complexity: O(n·m·p)
    pub fn mprod(&self, other: &Matrix<T>) -> Matrix<T> {
        check_mprod_dims(self, other);
        let (n, m, p) = (self.rows, self.columns, other.columns);
        let mut out = Matrix::filled(n, p, T::zero());
        for i in 0..n {
            for k in 0..m {
                let a = &self[(i, k)];
                for j in 0..p {
                    out[(i, j)] += a.clone() * other[(k, j)].clone();
                }
            }
        }
        out
    }
}

impl<T: Element> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.mprod(rhs)
    }
}

impl<T: Element> Mul<Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self.mprod(&rhs)
    }
}

// ========== Operator impls ==========

macro_rules! impl_elementwise_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $name:literal) => {
        impl<T: Clone + $OpAssign> $OpAssign<&Matrix<T>> for Matrix<T> {
            fn $op_assign(&mut self, rhs: &Matrix<T>) {
                self.zip_apply(rhs, $name, |a, b| a.$op_assign(b.clone()));
            }
        }

        impl<T: Clone + $OpAssign> $OpAssign<Matrix<T>> for Matrix<T> {
            fn $op_assign(&mut self, rhs: Matrix<T>) {
                <Self as $OpAssign<&Matrix<T>>>::$op_assign(self, &rhs);
            }
        }

        impl<T: Clone + $OpAssign> $Op<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $op(self, rhs: &Matrix<T>) -> Matrix<T> {
                let mut out = self.clone();
                <Matrix<T> as $OpAssign<&Matrix<T>>>::$op_assign(&mut out, rhs);
                out
            }
        }

        impl<T: Clone + $OpAssign> $Op<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $op(mut self, rhs: &Matrix<T>) -> Matrix<T> {
                <Self as $OpAssign<&Matrix<T>>>::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<T: Clone + $OpAssign> $Op<Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $op(mut self, rhs: Matrix<T>) -> Matrix<T> {
                <Self as $OpAssign<&Matrix<T>>>::$op_assign(&mut self, &rhs);
                self
            }
        }
    };
}

macro_rules! impl_scalar_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Clone + $OpAssign> $OpAssign<T> for Matrix<T> {
            fn $op_assign(&mut self, rhs: T) {
                for x in self.data.iter_mut() {
                    x.$op_assign(rhs.clone());
                }
            }
        }

        impl<T: Clone + $OpAssign> $Op<T> for Matrix<T> {
            type Output = Matrix<T>;

            fn $op(mut self, rhs: T) -> Matrix<T> {
                <Self as $OpAssign<T>>::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<T: Clone + $OpAssign> $Op<T> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $op(self, rhs: T) -> Matrix<T> {
                let mut out = self.clone();
                <Matrix<T> as $OpAssign<T>>::$op_assign(&mut out, rhs);
                out
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign, "add");
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign, "sub");

impl_scalar_op!(Add, add, AddAssign, add_assign);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign);
impl_scalar_op!(Div, div, DivAssign, div_assign);
impl_scalar_op!(Rem, rem, RemAssign, rem_assign);

/// `scalar * matrix` for concrete element types
macro_rules! impl_left_scalar_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_left_scalar_mul!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, Rational,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Matrix<f64> {
        Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap()
    }

    fn b() -> Matrix<f64> {
        Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap()
    }

    #[test]
    fn test_add_sub() {
        let sum = &a() + &b();
        assert_eq!(sum.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
        assert_eq!(&sum - &b(), a());

        let mut m = a();
        m += &b();
        m -= a();
        assert_eq!(m, b());
        assert_eq!(a() + b() - b(), a());
    }

    #[test]
    #[should_panic(expected = "add: matrices must have same dimensions")]
    fn test_add_shape_mismatch() {
        let _ = a() + Matrix::<f64>::new(2, 3);
    }

    #[test]
    #[should_panic(expected = "contract violated")]
    fn test_sub_assign_shape_mismatch() {
        let mut m = a();
        m -= &Matrix::<f64>::new(1, 2);
    }

    #[test]
    fn test_scalar_distributes() {
        let m = a();
        let doubled = &m * 2.0;
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(doubled[(i, j)], m[(i, j)] * 2.0);
            }
        }
        assert_eq!(2.0 * &m, doubled);
        assert_eq!(2.0 * m.clone(), doubled);
        assert_eq!(doubled / 2.0, m);
    }

    #[test]
    fn test_scalar_add_sub() {
        let mut m = a() + 1.0;
        assert_eq!(m.as_slice(), &[2.0, 3.0, 4.0, 5.0]);
        m -= 1.0;
        m *= 3.0;
        m /= 3.0;
        assert_eq!(m, a());
        assert_eq!(&a() - 1.0, a().map(|x| x - 1.0));
    }

    #[test]
    fn test_integer_scalar() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!((3i32 * m).as_slice(), &[3, 6, 9, 12]);
    }

    #[test]
    fn test_rational_scalar() {
        let m = Matrix::<Rational>::convert_from(&Matrix::filled(1, 2, 3i64));
        let half = Rational::from_ratio(1, 2).unwrap();
        let scaled = half.clone() * m;
        assert_eq!(scaled[(0, 1)], Rational::from_ratio(3, 2).unwrap());
    }

    #[test]
    fn test_hadamard() {
        let h = a().hadamard(&b());
        assert_eq!(h.as_slice(), &[5.0, 12.0, 21.0, 32.0]);
        let q = h.div_elementwise(&b());
        assert_eq!(q, a());
    }

    #[test]
    fn test_rem_elementwise() {
        let m = Matrix::from_rows(vec![vec![7, 8], vec![9, 10]]).unwrap();
        let d = Matrix::filled(2, 2, 4);
        assert_eq!(m.rem_elementwise(&d).as_slice(), &[3, 0, 1, 2]);
    }

    #[test]
    fn test_scalar_rem() {
        let m = Matrix::from_rows(vec![vec![7i32, 8], vec![9, -10]]).unwrap();
        assert_eq!((&m % 4).as_slice(), &[3, 0, 1, -2]);

        let mut r = m.clone();
        r %= 3;
        assert_eq!(r.as_slice(), &[1, 2, 0, -1]);
        assert_eq!(m.clone() % 5, m.map(|x| x % 5));
    }

    #[test]
    fn test_fill_map_apply() {
        let mut m = Matrix::<i32>::new(2, 3);
        m.fill(4);
        m.apply(|x| *x += 1);
        assert!(m.iter().all(|&x| x == 5));

        let text = m.map(|x| x.to_string());
        assert_eq!(text.shape(), (2, 3));
        assert_eq!(text[(1, 2)], "5");
    }

    #[test]
    fn test_product() {
        let p = &a() * &b();
        assert_eq!(p.as_slice(), &[19.0, 22.0, 43.0, 50.0]);

        let row = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        let col = Matrix::from_rows(vec![vec![4.0], vec![5.0], vec![6.0]]).unwrap();
        assert_eq!((&row * &col).as_slice(), &[32.0]);
        assert_eq!((col * row).shape(), (3, 3));
    }

    #[test]
    fn test_identity_is_neutral() {
        let id = Matrix::<f64>::identity(2);
        assert_eq!(&a() * &id, a());
        assert_eq!(&id * &a(), a());
    }

    #[test]
    #[should_panic(expected = "mprod: cannot multiply")]
    fn test_product_shape_mismatch() {
        let _ = a().mprod(&Matrix::<f64>::new(3, 1));
    }
}
