//! Dense matrices of rational numbers and the pivoted elimination engine
//! behind `det`, `inv` and the echelon forms.

use std::{
    fmt::Display,
    ops::{Index, IndexMut},
    slice::Chunks,
};

use crate::{
    domains::{
        integer::Integer,
        rational::{Rational, RationalError},
    },
    printer::{MatrixPrinter, PrintMode},
};

/// A raw matrix entry. Coercion to a canonical [Rational] happens once, at
/// the construction boundary; the arithmetic paths only ever see rationals.
#[derive(Clone, Debug)]
pub enum Entry {
    Int(i64),
    Big(Integer),
    /// A floating-point literal, truncated towards zero on coercion.
    Float(f64),
    Rational(Rational),
}

impl Entry {
    fn into_rational(self) -> Result<Rational, RationalError> {
        match self {
            Entry::Int(n) => Ok(Rational::from(n)),
            Entry::Big(n) => Ok(Rational::from(n)),
            Entry::Float(f) => Rational::from_f64(f),
            Entry::Rational(r) => Ok(r),
        }
    }
}

impl From<i64> for Entry {
    fn from(value: i64) -> Self {
        Entry::Int(value)
    }
}

impl From<Integer> for Entry {
    fn from(value: Integer) -> Self {
        Entry::Big(value)
    }
}

impl From<f64> for Entry {
    fn from(value: f64) -> Self {
        Entry::Float(value)
    }
}

impl From<Rational> for Entry {
    fn from(value: Rational) -> Self {
        Entry::Rational(value)
    }
}

/// Errors that can occur when performing matrix operations.
#[derive(Debug)]
pub enum MatrixError {
    InvalidArgument(String),
    ShapeMismatch,
    NotSquare,
    Singular,
    NonColumnVector,
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::InvalidArgument(s) => write!(f, "{}", s),
            MatrixError::ShapeMismatch => {
                write!(f, "The shapes of the matrices are not compatible")
            }
            MatrixError::NotSquare => write!(f, "The matrix is not square"),
            MatrixError::Singular => write!(f, "The matrix is singular"),
            MatrixError::NonColumnVector => {
                write!(f, "The operand is not a column vector")
            }
        }
    }
}

/// A dense row-major matrix of rational numbers with at least one row and
/// one column. `clone` deep-copies every entry; two matrices never share
/// entries.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Matrix {
    data: Vec<Rational>,
    nrows: u32,
    ncols: u32,
}

impl Matrix {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn new(nrows: u32, ncols: u32) -> Matrix {
        debug_assert!(nrows > 0 && ncols > 0, "empty matrix");
        Matrix {
            data: (0..nrows as usize * ncols as usize)
                .map(|_| Rational::zero())
                .collect(),
            nrows,
            ncols,
        }
    }

    /// Create the `nrows` x `nrows` matrix with ones on the main diagonal
    /// and zeroes elsewhere.
    pub fn identity(nrows: u32) -> Matrix {
        Matrix {
            data: (0..nrows as usize * nrows as usize)
                .map(|i| {
                    if i % nrows as usize == i / nrows as usize {
                        Rational::one()
                    } else {
                        Rational::zero()
                    }
                })
                .collect(),
            nrows,
            ncols: nrows,
        }
    }

    /// Create a column vector from a list of rationals.
    pub fn from_column(data: Vec<Rational>) -> Matrix {
        debug_assert!(!data.is_empty(), "empty matrix");
        Matrix {
            nrows: data.len() as u32,
            ncols: 1,
            data,
        }
    }

    /// Partition a flat row-major sequence of raw entries into rows of
    /// `ncols` entries each, coercing every entry to a rational. Fails when
    /// the entry count is not a positive multiple of the column count.
    pub fn from_entries(ncols: u32, entries: Vec<Entry>) -> Result<Matrix, MatrixError> {
        if ncols == 0 {
            return Err(MatrixError::InvalidArgument(
                "The column count must be at least 1".to_string(),
            ));
        }
        if entries.is_empty() || entries.len() % ncols as usize != 0 {
            return Err(MatrixError::InvalidArgument(format!(
                "The entry count {} does not fill rows of {} columns",
                entries.len(),
                ncols
            )));
        }

        let mut data = Vec::with_capacity(entries.len());
        for e in entries {
            data.push(
                e.into_rational()
                    .map_err(|e| MatrixError::InvalidArgument(e.to_string()))?,
            );
        }

        Ok(Matrix {
            nrows: (data.len() / ncols as usize) as u32,
            ncols,
            data,
        })
    }

    /// Convert a linear representation of a matrix to a `Matrix`.
    pub fn from_linear(
        data: Vec<Rational>,
        nrows: u32,
        ncols: u32,
    ) -> Result<Matrix, MatrixError> {
        if nrows > 0 && ncols > 0 && data.len() == nrows as usize * ncols as usize {
            Ok(Matrix { data, nrows, ncols })
        } else {
            Err(MatrixError::InvalidArgument(format!(
                "Data length does not match matrix dimensions: {} vs ({},{})",
                data.len(),
                nrows,
                ncols
            )))
        }
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows as usize
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols as usize
    }

    /// Return true iff the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Return the entry at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<&Rational> {
        if row < self.nrows && col < self.ncols {
            Some(&self.data[(row * self.ncols + col) as usize])
        } else {
            None
        }
    }

    /// Replace the entry at `(row, col)`.
    pub fn set(&mut self, row: u32, col: u32, value: Rational) -> Result<(), MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::InvalidArgument(format!(
                "Index ({},{}) is out of bounds for a ({},{}) matrix",
                row, col, self.nrows, self.ncols
            )));
        }

        self.data[(row * self.ncols + col) as usize] = value;
        Ok(())
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, Rational> {
        self.data.chunks(self.ncols as usize)
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix {
        let mut m = Matrix::new(self.ncols, self.nrows);
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                m[(j, i)] = self[(i, j)].clone();
            }
        }
        m
    }

    /// Swap rows `a` and `b` in place.
    pub fn swap_rows(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        for l in 0..self.ncols {
            self.data
                .swap((self.ncols * a + l) as usize, (self.ncols * b + l) as usize);
        }
    }

    /// Multiply every entry of `row` by `scale` in place.
    pub fn scale_row(&mut self, row: u32, scale: &Rational) {
        for l in 0..self.ncols {
            self.data[(self.ncols * row + l) as usize] *= scale;
        }
    }

    /// Add `scale` times row `source` to row `dest` in place.
    pub fn add_row(&mut self, source: u32, dest: u32, scale: &Rational) {
        let scaled: Vec<Rational> = (0..self.ncols)
            .map(|l| &self[(source, l)] * scale)
            .collect();
        for (l, s) in scaled.into_iter().enumerate() {
            self.data[dest as usize * self.ncols as usize + l] += s;
        }
    }

    /// Multiply every entry of the matrix by `scale` in place.
    pub fn scale(&mut self, scale: &Rational) {
        for row in 0..self.nrows {
            self.scale_row(row, scale);
        }
    }

    /// Add two matrices of identical shape, returning a new matrix.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MatrixError::ShapeMismatch);
        }

        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a + b)
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Take the entrywise product of two matrices of identical shape.
    pub fn hadamard_product(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MatrixError::ShapeMismatch);
        }

        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a * b)
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Multiply two matrices, returning a new `self.nrows` x `rhs.ncols`
    /// matrix. Requires `self.ncols == rhs.nrows`.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::ShapeMismatch);
        }

        let mut m = Matrix::new(self.nrows, rhs.ncols);
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let mut sum = Rational::zero();
                for k in 0..self.ncols {
                    sum += &self[(i, k)] * &rhs[(k, j)];
                }
                m[(i, j)] = sum;
            }
        }

        Ok(m)
    }

    /// Take the scalar product of two column vectors of equal dimension.
    pub fn dot(&self, rhs: &Matrix) -> Result<Rational, MatrixError> {
        if self.ncols != 1 || rhs.ncols != 1 {
            return Err(MatrixError::NonColumnVector);
        }
        if self.nrows != rhs.nrows {
            return Err(MatrixError::ShapeMismatch);
        }

        let mut sum = Rational::zero();
        for (a, b) in self.data.iter().zip(&rhs.data) {
            sum += a * b;
        }

        Ok(sum)
    }

    /// Take the outer product of two column vectors: the result is the
    /// `self.nrows` x `rhs.nrows` table of pairwise entry products.
    pub fn outer_product(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols != 1 || rhs.ncols != 1 {
            return Err(MatrixError::NonColumnVector);
        }

        let mut data = Vec::with_capacity(self.nrows as usize * rhs.nrows as usize);
        for a in &self.data {
            for b in &rhs.data {
                data.push(a * b);
            }
        }

        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: rhs.nrows,
        })
    }

    /// Take the Kronecker product: every entry of `self` is replaced by a
    /// copy of `rhs` scaled by that entry, laid out row-major over the
    /// nested index pairs.
    pub fn kronecker_product(&self, rhs: &Matrix) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len() * rhs.data.len());
        for ai in 0..self.nrows {
            for bi in 0..rhs.nrows {
                for aj in 0..self.ncols {
                    for bj in 0..rhs.ncols {
                        data.push(&self[(ai, aj)] * &rhs[(bi, bj)]);
                    }
                }
            }
        }

        Matrix {
            data,
            nrows: self.nrows * rhs.nrows,
            ncols: self.ncols * rhs.ncols,
        }
    }

    /// Concatenate two matrices with equal row counts column-wise.
    pub fn augment(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.nrows != rhs.nrows {
            return Err(MatrixError::ShapeMismatch);
        }

        let mut data =
            Vec::with_capacity(self.nrows as usize * (self.ncols + rhs.ncols) as usize);
        for (ra, rb) in self.row_iter().zip(rhs.row_iter()) {
            data.extend_from_slice(ra);
            data.extend_from_slice(rb);
        }

        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols + rhs.ncols,
        })
    }

    /// Copy the column block `[start, end)` into a new matrix.
    pub fn slice_columns(&self, start: u32, end: u32) -> Result<Matrix, MatrixError> {
        if start >= end || end > self.ncols {
            return Err(MatrixError::InvalidArgument(format!(
                "Column range [{},{}) is invalid for a matrix with {} columns",
                start, end, self.ncols
            )));
        }

        let mut data = Vec::with_capacity(self.nrows as usize * (end - start) as usize);
        for r in 0..self.nrows {
            for c in start..end {
                data.push(self[(r, c)].clone());
            }
        }

        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: end - start,
        })
    }

    /// Reduce the matrix to row-echelon form with partial pivoting.
    /// Returns the pivot row count (the rank) and the swap-parity flag
    /// needed to sign the determinant.
    fn reduce_in_place(&mut self) -> (u32, bool) {
        let mut h = 0;
        let mut k = 0;
        let mut neg = false;

        while h < self.nrows && k < self.ncols {
            // partial pivoting: take the largest entry by absolute value in
            // the remaining sub-column, first row winning ties
            let mut i_max = h;
            let mut max = Rational::zero();
            for i in h..self.nrows {
                let c = self[(i, k)].abs();
                if c > max {
                    max = c;
                    i_max = i;
                }
            }

            if max.is_zero() {
                // no usable pivot at or below h; skip the column
                k += 1;
                continue;
            }

            if h != i_max {
                self.swap_rows(h, i_max);
                neg = !neg;
            }

            for i in h + 1..self.nrows {
                if self[(i, k)].is_zero() {
                    continue;
                }
                let f = self[(i, k)].div_unchecked(&self[(h, k)]);
                self[(i, k)] = Rational::zero();
                for j in k + 1..self.ncols {
                    let s = &self[(h, j)] * &f;
                    self[(i, j)] -= s;
                }
            }

            h += 1;
            k += 1;
        }

        (h, neg)
    }

    /// Row-reduce the matrix in place to row-echelon form and return its
    /// rank. This is the destructive variant; see [Matrix::row_echelon_form]
    /// for the one that leaves the receiver untouched.
    pub fn row_reduce(&mut self) -> usize {
        self.reduce_in_place().0 as usize
    }

    /// Return the row-echelon form of the matrix.
    pub fn row_echelon_form(&self) -> Matrix {
        let mut m = self.clone();
        m.reduce_in_place();
        m
    }

    /// Return the rank of the matrix.
    pub fn rank(&self) -> usize {
        self.clone().reduce_in_place().0 as usize
    }

    /// Compute the determinant of a square matrix: the signed product of
    /// the diagonal of its row-echelon form. Exact, and zero iff the matrix
    /// is singular.
    pub fn det(&self) -> Result<Rational, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }

        let mut m = self.clone();
        let (_, neg) = m.reduce_in_place();

        let mut det = if neg {
            -Rational::one()
        } else {
            Rational::one()
        };
        for i in 0..m.nrows {
            det *= &m[(i, i)];
        }

        Ok(det)
    }

    /// Compute the inverse of a square non-singular matrix with
    /// Gauss-Jordan elimination on the matrix augmented with the identity.
    pub fn inv(&self) -> Result<Matrix, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }

        let n = self.nrows;
        let mut m = Matrix::new(n, 2 * n);
        for r in 0..n {
            for c in 0..n {
                m[(r, c)] = self[(r, c)].clone();
            }
            m[(r, n + r)] = Rational::one();
        }

        // the pivot column is bounded by the left block; eliminating in
        // every other row yields reduced row-echelon form directly
        let mut h = 0;
        let mut k = 0;
        while h < n && k < n {
            let mut i_max = h;
            let mut max = Rational::zero();
            for i in h..n {
                let c = m[(i, k)].abs();
                if c > max {
                    max = c;
                    i_max = i;
                }
            }

            if max.is_zero() {
                k += 1;
                continue;
            }

            m.swap_rows(h, i_max);

            for i in 0..n {
                if i == h || m[(i, k)].is_zero() {
                    continue;
                }
                let f = m[(i, k)].div_unchecked(&m[(h, k)]);
                m[(i, k)] = Rational::zero();
                for j in k + 1..m.ncols {
                    let s = &m[(h, j)] * &f;
                    m[(i, j)] -= s;
                }
            }

            h += 1;
            k += 1;
        }

        // a skipped column means fewer than n pivots, i.e. det = 0
        if h < n {
            return Err(MatrixError::Singular);
        }

        for i in 0..n {
            let p = m[(i, i)].clone();
            m.scale_row(i, &Rational::one().div_unchecked(&p));
        }

        m.slice_columns(n, 2 * n)
    }
}

impl Index<u32> for Matrix {
    type Output = [Rational];

    /// Get the `index`th row of the matrix.
    #[inline]
    fn index(&self, index: u32) -> &Self::Output {
        &self.data[index as usize * self.ncols as usize..(index as usize + 1) * self.ncols as usize]
    }
}

impl Index<(u32, u32)> for Matrix {
    type Output = Rational;

    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index(&self, index: (u32, u32)) -> &Self::Output {
        &self.data[(index.0 * self.ncols + index.1) as usize]
    }
}

impl IndexMut<(u32, u32)> for Matrix {
    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index_mut(&mut self, index: (u32, u32)) -> &mut Rational {
        &mut self.data[(index.0 * self.ncols + index.1) as usize]
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        MatrixPrinter::new(self, PrintMode::Plain).fmt(f)
    }
}
