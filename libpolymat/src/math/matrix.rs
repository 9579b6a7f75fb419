#![allow(clippy::should_implement_trait)]

use crate::errors::{MathError, MatrixOp, Shape};
use crate::math::Poly;

use core::ops::Neg;
use num_traits::One;

/// A rectangular, row-major grid of [Poly] elements.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Matrix {
    data: Vec<Vec<Poly>>,
    /// Kept apart from `data` so that matrices without rows still have a width.
    cols: usize,
}

impl Matrix {
    /// Creates a `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![vec![Poly::zero(); cols]; rows],
            cols,
        }
    }

    /// Creates an `n x n` matrix of zeros.
    #[inline]
    pub fn square(n: usize) -> Self {
        Self::zeros(n, n)
    }

    /// Creates a matrix from its rows.
    ///
    /// Fails with [MathError::NotRectangular] if there are no rows, the rows are empty, or the rows
    /// are of different lengths.
    pub fn new(data: Vec<Vec<Poly>>) -> Result<Self, MathError> {
        let cols = data.first().map_or(0, Vec::len);
        if cols == 0 || data.iter().any(|row| row.len() != cols) {
            return Err(MathError::NotRectangular);
        }
        Ok(Self { data, cols })
    }

    /// Creates a matrix from rows already known to be rectangular.
    pub(crate) fn from_grid(data: Vec<Vec<Poly>>) -> Self {
        debug_assert!(data.windows(2).all(|w| w[0].len() == w[1].len()));
        let cols = data.first().map_or(0, Vec::len);
        Self { data, cols }
    }

    /// Creates the `n x n` identity matrix.
    pub fn unit(n: usize) -> Self {
        let mut unit = Self::square(n);
        for i in 0..n {
            unit.data[i][i] = Poly::one();
        }
        unit
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape {
            rows: self.rows(),
            cols: self.cols(),
        }
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Poly> {
        self.data.get(row).and_then(|r| r.get(col))
    }

    /// The rows of the matrix.
    #[inline]
    pub fn data(&self) -> &[Vec<Poly>] {
        &self.data
    }

    pub fn into_data(self) -> Vec<Vec<Poly>> {
        self.data
    }

    /// Multiplies every element by `coeff`.
    pub fn scale_assign(&mut self, coeff: &Poly) {
        for elem in self.data.iter_mut().flatten() {
            *elem *= coeff;
        }
    }

    pub fn scale(&self, coeff: &Poly) -> Self {
        let mut scaled = self.clone();
        scaled.scale_assign(coeff);
        scaled
    }

    fn check_same_shape(&self, other: &Self, op: MatrixOp) -> Result<(), MathError> {
        if self.shape() != other.shape() {
            return Err(MathError::ShapeMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(())
    }

    /// Adds `other` to `self` elementwise. The matrices must have the same shape.
    pub fn add_assign(&mut self, other: &Self) -> Result<(), MathError> {
        self.check_same_shape(other, MatrixOp::Add)?;
        for (lhs, rhs) in self.data.iter_mut().flatten().zip(other.data.iter().flatten()) {
            *lhs += rhs;
        }
        Ok(())
    }

    /// Subtracts `other` from `self` elementwise. The matrices must have the same shape.
    pub fn sub_assign(&mut self, other: &Self) -> Result<(), MathError> {
        self.check_same_shape(other, MatrixOp::Sub)?;
        for (lhs, rhs) in self.data.iter_mut().flatten().zip(other.data.iter().flatten()) {
            *lhs -= rhs;
        }
        Ok(())
    }

    pub fn add(&self, other: &Self) -> Result<Self, MathError> {
        let mut sum = self.clone();
        sum.add_assign(other)?;
        Ok(sum)
    }

    pub fn sub(&self, other: &Self) -> Result<Self, MathError> {
        let mut diff = self.clone();
        diff.sub_assign(other)?;
        Ok(diff)
    }

    /// Computes the matrix product `self * other`.
    ///
    /// The column count of `self` must equal the row count of `other`.
    pub fn mul(&self, other: &Self) -> Result<Self, MathError> {
        if self.cols() != other.rows() {
            return Err(MathError::ShapeMismatch {
                op: MatrixOp::Mul,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let mut product = Self::zeros(self.rows(), other.cols());
        for (i, row) in product.data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..self.cols() {
                    *cell += &(&self.data[i][k] * &other.data[k][j]);
                }
            }
        }
        Ok(product)
    }

    /// Computes the determinant by expanding over every permutation of columns.
    ///
    /// This takes O(n!) time. The determinant of a non-square matrix is reported as zero.
    ///
    /// # Examples:
    ///
    /// ```
    /// # use libpolymat::{poly, Matrix};
    /// // | x 1 |
    /// // | 1 x | -> x^2 - 1
    /// let m = Matrix::new(vec![
    ///     vec![poly![0, 1], poly![1]],
    ///     vec![poly![1], poly![0, 1]],
    /// ])
    /// .unwrap();
    /// assert_eq!(m.determinant(), poly![-1, 0, 1]);
    /// ```
    pub fn determinant(&self) -> Poly {
        if !self.is_square() {
            log::warn!(
                "determinant of a non-square {} matrix is taken to be 0",
                self.shape()
            );
            return Poly::zero();
        }
        let mut available = vec![true; self.cols()];
        let mut det = Poly::zero();
        self.expand_determinant(0, &mut available, Poly::one(), &mut det);
        log::debug!("determinant of a {} matrix is {}", self.shape(), det);
        det
    }

    /// Chooses a column for `row` among the `available` ones and recurses into the next row,
    /// adding each complete signed product into `det`.
    ///
    /// Choosing the k-th remaining column contributes k inversions to the permutation, so the
    /// product flips sign on odd k.
    fn expand_determinant(
        &self,
        row: usize,
        available: &mut [bool],
        product: Poly,
        det: &mut Poly,
    ) {
        if row == available.len() {
            *det += &product;
            return;
        }
        let mut choice = 0;
        for col in 0..available.len() {
            if !available[col] {
                continue;
            }
            let mut next = &product * &self.data[row][col];
            if choice % 2 == 1 {
                next = -next;
            }
            choice += 1;
            if next.is_zero() {
                continue;
            }
            available[col] = false;
            self.expand_determinant(row + 1, available, next, det);
            available[col] = true;
        }
    }

    /// Computes the inverse of the matrix by Gauss-Jordan elimination.
    ///
    /// Fails with [MathError::NonSquare] or [MathError::Singular] if the matrix has no inverse.
    /// Elimination divides by pivot elements, so a non-constant pivot fails with
    /// [MathError::NonConstantDivision].
    pub fn inverted(&self) -> Result<Self, MathError> {
        if !self.is_square() {
            return Err(MathError::NonSquare(self.shape()));
        }
        if self.determinant().is_zero() {
            return Err(MathError::Singular);
        }

        let n = self.rows();
        let mut work = self.data.clone();
        let mut inverse = Self::unit(n).data;

        for line in 0..n {
            let found = (line..n)
                .find(|&i| !work[i][line].is_zero())
                .ok_or(MathError::Singular)?;
            if found != line {
                log::trace!("pivot {}: swapping rows {} and {}", line, line, found);
                work.swap(line, found);
                inverse.swap(line, found);
            }

            let pivot = work[line][line].clone();
            log::trace!("pivot {}: dividing by {}", line, pivot);
            for j in 0..n {
                work[line][j].div_assign(&pivot)?;
                inverse[line][j].div_assign(&pivot)?;
            }

            for i in 0..n {
                if i == line || work[i][line].is_zero() {
                    continue;
                }
                let coeff = work[i][line].clone();
                for j in 0..n {
                    let delta = &work[line][j] * &coeff;
                    work[i][j] -= &delta;
                    let delta = &inverse[line][j] * &coeff;
                    inverse[i][j] -= &delta;
                }
            }
        }

        Ok(Self::from_grid(inverse))
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.scale(&-Poly::one())
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(mut self) -> Matrix {
        self.scale_assign(&-Poly::one());
        self
    }
}
