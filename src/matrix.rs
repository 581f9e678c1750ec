//! Square two-dimensional container composed of row vectors.
//!
//! [`DynMatrix`] owns `size` rows, each a [`DynVector`] of exactly
//! `size` elements. Every validated constructor enforces the square
//! shape; the operations then rely on it instead of re-checking each
//! row.

use std::fmt;
use std::io::BufRead;
use std::mem;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};
use std::slice::{Iter, IterMut};
use std::str::FromStr;

use num_traits::Zero;

use crate::error::{Error, Result};
use crate::vector::DynVector;

/// Upper bound on the row count (and so the column count) of any
/// validated matrix.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Square, row-major matrix with a side length fixed at construction.
///
/// The validated constructors enforce `1..=MAX_MATRIX_SIZE` rows of
/// matching length. The [`Default`] value is the valid-but-empty matrix
/// that [`take`] leaves behind.
///
/// [`take`]: DynMatrix::take
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynMatrix<T> {
    rows: Vec<DynVector<T>>,
}

// Not derived: the derive would bound `T: Default`, and the empty state
// exists for every element type.
impl<T> Default for DynMatrix<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 || size > MAX_MATRIX_SIZE {
        return Err(Error::InvalidSize {
            size,
            max: MAX_MATRIX_SIZE,
        });
    }
    Ok(())
}

impl<T> DynMatrix<T> {
    /// Validated construction from pre-built rows.
    ///
    /// The row count must be within `1..=MAX_MATRIX_SIZE` and every row
    /// must already have exactly that length; a jagged row fails with
    /// [`Error::DimensionMismatch`] carrying the expected and actual
    /// lengths.
    pub fn from_rows(rows: Vec<DynVector<T>>) -> Result<Self> {
        let size = rows.len();
        check_size(size)?;
        for row in &rows {
            if row.len() != size {
                return Err(Error::DimensionMismatch {
                    left: size,
                    right: row.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Side length: the matrix has `size()` rows and `size()` columns.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Checked row access.
    pub fn row(&self, index: usize) -> Result<&DynVector<T>> {
        self.rows.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    /// Checked mutable row access. The row must keep its length;
    /// replacing it with one of a different length breaks the square
    /// shape the operations rely on.
    pub fn row_mut(&mut self, index: usize) -> Result<&mut DynVector<T>> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Checked element access with both indices validated against the
    /// side length.
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        let size = self.size();
        if row >= size {
            return Err(Error::IndexOutOfRange {
                index: row,
                len: size,
            });
        }
        if col >= size {
            return Err(Error::IndexOutOfRange {
                index: col,
                len: size,
            });
        }
        self.rows[row].at(col)
    }

    /// Checked mutable element access.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let size = self.size();
        if row >= size {
            return Err(Error::IndexOutOfRange {
                index: row,
                len: size,
            });
        }
        if col >= size {
            return Err(Error::IndexOutOfRange {
                index: col,
                len: size,
            });
        }
        self.rows[row].at_mut(col)
    }

    pub fn rows(&self) -> Iter<'_, DynVector<T>> {
        self.rows.iter()
    }

    /// Mutable row iteration, with the same length caveat as
    /// [`DynMatrix::row_mut`].
    pub fn rows_mut(&mut self) -> IterMut<'_, DynVector<T>> {
        self.rows.iter_mut()
    }

    /// Take ownership of the contents, leaving `self` at size zero.
    ///
    /// Constant time: the rows move as a block, no element is copied.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T: Clone> DynMatrix<T> {
    /// Matrix of `size` rows, each filled with copies of `value`.
    pub fn from_elem(size: usize, value: T) -> Result<Self> {
        check_size(size)?;
        let rows = (0..size)
            .map(|_| DynVector::from_elem(size, value.clone()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }
}

impl<T: Clone + Zero> DynMatrix<T> {
    /// Zero-filled square matrix of the given side length.
    ///
    /// Fails with [`Error::InvalidSize`] when `size` is zero or exceeds
    /// [`MAX_MATRIX_SIZE`]; nothing is allocated on failure.
    pub fn new(size: usize) -> Result<Self> {
        Self::from_elem(size, T::zero())
    }
}

impl<T> TryFrom<Vec<DynVector<T>>> for DynMatrix<T> {
    type Error = Error;

    fn try_from(rows: Vec<DynVector<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<T> Index<usize> for DynMatrix<T> {
    type Output = DynVector<T>;

    /// Panicking counterpart of [`DynMatrix::row`].
    fn index(&self, index: usize) -> &DynVector<T> {
        match self.row(index) {
            Ok(row) => row,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for DynMatrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut DynVector<T> {
        match self.row_mut(index) {
            Ok(row) => row,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> DynMatrix<T>
where
    T: Clone + Add<Output = T>,
{
    /// Elementwise sum; both operands must have the same side length.
    pub fn add_checked(&self, other: &Self) -> Result<Self> {
        if self.size() != other.size() {
            return Err(Error::DimensionMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        let rows: Vec<DynVector<T>> = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a + b)
            .collect();
        Self::from_rows(rows)
    }
}

impl<T> DynMatrix<T>
where
    T: Clone + Sub<Output = T> + Neg<Output = T>,
{
    /// Elementwise difference; both operands must have the same side
    /// length.
    pub fn sub_checked(&self, other: &Self) -> Result<Self> {
        if self.size() != other.size() {
            return Err(Error::DimensionMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        let rows: Vec<DynVector<T>> = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a - b)
            .collect();
        Self::from_rows(rows)
    }
}

impl<T> DynMatrix<T>
where
    T: Clone + Zero + Mul<Output = T>,
{
    /// Matrix-vector product; the vector length must equal the side
    /// length. Element `i` of the result is the dot product of row `i`
    /// with `v`.
    pub fn mul_vector(&self, v: &DynVector<T>) -> Result<DynVector<T>> {
        if self.size() != v.len() {
            return Err(Error::DimensionMismatch {
                left: self.size(),
                right: v.len(),
            });
        }
        let data: Vec<T> = self.rows.iter().map(|row| row.dot(v)).collect();
        DynVector::from_vec(data)
    }

    /// Matrix product accumulated as
    /// `out[j][i] += self[k][i] * other[j][k]`
    /// over every `j`, `i`, `k`, which computes the transpose-flavored
    /// product rather than the textbook row-times-column one.
    pub fn mul_checked(&self, other: &Self) -> Result<Self> {
        let size = self.size();
        if size != other.size() {
            return Err(Error::DimensionMismatch {
                left: size,
                right: other.size(),
            });
        }
        let mut out = vec![vec![T::zero(); size]; size];
        for j in 0..size {
            for i in 0..size {
                for k in 0..size {
                    out[j][i] = out[j][i].clone()
                        + self.rows[k][i].clone() * other.rows[j][k].clone();
                }
            }
        }
        let rows = out
            .into_iter()
            .map(DynVector::from_vec)
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }
}

impl<T> Mul<T> for &DynMatrix<T>
where
    T: Clone + Mul<Output = T>,
{
    type Output = DynMatrix<T>;

    /// Scalar product applied to every element; always succeeds.
    fn mul(self, rhs: T) -> DynMatrix<T> {
        let rows = self.rows.iter().map(|row| row * rhs.clone()).collect();
        DynMatrix { rows }
    }
}

impl<T> Mul<T> for DynMatrix<T>
where
    T: Clone + Mul<Output = T>,
{
    type Output = DynMatrix<T>;

    fn mul(self, rhs: T) -> DynMatrix<T> {
        (&self).mul(rhs)
    }
}

impl<T> Add for &DynMatrix<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = DynMatrix<T>;

    /// Panicking counterpart of [`DynMatrix::add_checked`].
    fn add(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        match self.add_checked(rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Add for DynMatrix<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = DynMatrix<T>;

    fn add(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
        &self + &rhs
    }
}

impl<T> Sub for &DynMatrix<T>
where
    T: Clone + Sub<Output = T> + Neg<Output = T>,
{
    type Output = DynMatrix<T>;

    /// Panicking counterpart of [`DynMatrix::sub_checked`].
    fn sub(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        match self.sub_checked(rhs) {
            Ok(diff) => diff,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Sub for DynMatrix<T>
where
    T: Clone + Sub<Output = T> + Neg<Output = T>,
{
    type Output = DynMatrix<T>;

    fn sub(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
        &self - &rhs
    }
}

impl<T> Mul for &DynMatrix<T>
where
    T: Clone + Zero + Mul<Output = T>,
{
    type Output = DynMatrix<T>;

    /// Panicking counterpart of [`DynMatrix::mul_checked`].
    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        match self.mul_checked(rhs) {
            Ok(product) => product,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Mul for DynMatrix<T>
where
    T: Clone + Zero + Mul<Output = T>,
{
    type Output = DynMatrix<T>;

    fn mul(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
        &self * &rhs
    }
}

impl<T> Mul<&DynVector<T>> for &DynMatrix<T>
where
    T: Clone + Zero + Mul<Output = T>,
{
    type Output = DynVector<T>;

    /// Panicking counterpart of [`DynMatrix::mul_vector`].
    fn mul(self, rhs: &DynVector<T>) -> DynVector<T> {
        match self.mul_vector(rhs) {
            Ok(product) => product,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Mul<DynVector<T>> for DynMatrix<T>
where
    T: Clone + Zero + Mul<Output = T>,
{
    type Output = DynVector<T>;

    fn mul(self, rhs: DynVector<T>) -> DynVector<T> {
        &self * &rhs
    }
}

impl<T: FromStr> DynMatrix<T> {
    /// Fill every element in row-major order from whitespace-delimited
    /// tokens. Line breaks carry no meaning: one input line can feed
    /// several rows, and one row can span several lines.
    pub fn read_from<R: BufRead>(&mut self, reader: &mut R) -> Result<()> {
        for row in self.rows.iter_mut() {
            row.read_from(reader)?;
        }
        log::debug!("read {} rows", self.rows.len());
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for DynMatrix<T> {
    /// One line per row: space-separated elements, each row terminated
    /// by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
