//! One-dimensional generic container sized at construction.
//!
//! [`DynVector`] owns contiguous storage whose length is chosen when the
//! vector is built and validated against [`MAX_VECTOR_SIZE`]. Arithmetic
//! never mutates in place: scalar and vector operators produce fresh
//! vectors, and the binary operators accept operands of different
//! lengths, with the missing elements of the shorter side read as zero.

use std::fmt;
use std::io::BufRead;
use std::mem;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};
use std::slice::{Iter, IterMut};
use std::str::FromStr;

use num_traits::Zero;

use crate::error::{Error, Result};
use crate::read::next_token;

/// Upper bound on the element count of any validated vector.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Owned, contiguous sequence with a length fixed at construction.
///
/// The validated constructors enforce `1..=MAX_VECTOR_SIZE`. The
/// [`Default`] value is the valid-but-empty vector that [`take`]
/// leaves behind; it compares equal only to other empty vectors and
/// supports every operation that does not require elements.
///
/// [`take`]: DynVector::take
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynVector<T> {
    data: Vec<T>,
}

// Not derived: the derive would bound `T: Default`, and the empty state
// exists for every element type.
impl<T> Default for DynVector<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 || size > MAX_VECTOR_SIZE {
        return Err(Error::InvalidSize {
            size,
            max: MAX_VECTOR_SIZE,
        });
    }
    Ok(())
}

impl<T> DynVector<T> {
    /// Validated construction from an owned buffer.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        check_size(data.len())?;
        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked element access.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.data.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.data.len(),
        })
    }

    /// Checked mutable element access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Take ownership of the contents, leaving `self` empty.
    ///
    /// Constant time: the storage moves, no element is copied.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchange contents with `other` in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T: Clone> DynVector<T> {
    /// Vector of `len` copies of `value`.
    pub fn from_elem(len: usize, value: T) -> Result<Self> {
        check_size(len)?;
        Ok(Self {
            data: vec![value; len],
        })
    }

    /// Validated construction copying from a borrowed buffer.
    ///
    /// The length check runs before the copy, so an over-limit input
    /// fails without touching the allocator.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        check_size(values.len())?;
        Ok(Self {
            data: values.to_vec(),
        })
    }
}

impl<T: Clone + Zero> DynVector<T> {
    /// Zero-filled vector of `len` elements.
    ///
    /// Fails with [`Error::InvalidSize`] when `len` is zero or exceeds
    /// [`MAX_VECTOR_SIZE`]; nothing is allocated on failure.
    pub fn new(len: usize) -> Result<Self> {
        Self::from_elem(len, T::zero())
    }
}

impl<T> TryFrom<Vec<T>> for DynVector<T> {
    type Error = Error;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Self::from_vec(data)
    }
}

impl<T> Index<usize> for DynVector<T> {
    type Output = T;

    /// Panicking counterpart of [`DynVector::at`].
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for DynVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

macro_rules! impl_scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T> $trait<T> for &DynVector<T>
        where
            T: Clone + $trait<Output = T>,
        {
            type Output = DynVector<T>;

            /// Applies the operation with the scalar to every element.
            fn $method(self, rhs: T) -> DynVector<T> {
                let data = self
                    .data
                    .iter()
                    .map(|value| value.clone() $op rhs.clone())
                    .collect();
                DynVector { data }
            }
        }

        impl<T> $trait<T> for DynVector<T>
        where
            T: Clone + $trait<Output = T>,
        {
            type Output = DynVector<T>;

            fn $method(self, rhs: T) -> DynVector<T> {
                (&self).$method(rhs)
            }
        }
    };
}

impl_scalar_op!(Add, add, +);
impl_scalar_op!(Sub, sub, -);
impl_scalar_op!(Mul, mul, *);

impl<T> Add for &DynVector<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = DynVector<T>;

    /// Elementwise sum over the common prefix; the longer operand's
    /// tail carries into the result unchanged.
    fn add(self, rhs: &DynVector<T>) -> DynVector<T> {
        let common = self.len().min(rhs.len());
        let mut data: Vec<T> = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        let tail = if self.len() >= rhs.len() {
            &self.data[common..]
        } else {
            &rhs.data[common..]
        };
        data.extend(tail.iter().cloned());
        DynVector { data }
    }
}

impl<T> Add for DynVector<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = DynVector<T>;

    fn add(self, rhs: DynVector<T>) -> DynVector<T> {
        &self + &rhs
    }
}

impl<T> Sub for &DynVector<T>
where
    T: Clone + Sub<Output = T> + Neg<Output = T>,
{
    type Output = DynVector<T>;

    /// Elementwise difference over the common prefix. A longer left
    /// operand carries its tail unchanged; a longer right operand's
    /// tail is negated, since the missing left elements read as zero.
    fn sub(self, rhs: &DynVector<T>) -> DynVector<T> {
        let common = self.len().min(rhs.len());
        let mut data: Vec<T> = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| a.clone() - b.clone())
            .collect();
        if self.len() >= rhs.len() {
            data.extend(self.data[common..].iter().cloned());
        } else {
            data.extend(rhs.data[common..].iter().map(|value| -value.clone()));
        }
        DynVector { data }
    }
}

impl<T> Sub for DynVector<T>
where
    T: Clone + Sub<Output = T> + Neg<Output = T>,
{
    type Output = DynVector<T>;

    fn sub(self, rhs: DynVector<T>) -> DynVector<T> {
        &self - &rhs
    }
}

impl<T> DynVector<T>
where
    T: Clone + Zero + Mul<Output = T>,
{
    /// Sum of elementwise products over the shorter of the two lengths.
    ///
    /// Elements past the shorter length are ignored, not zero-padded,
    /// so `a.dot(&b) == b.dot(&a)` for any pair of lengths.
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
    }
}

impl<T: FromStr> DynVector<T> {
    /// Fill every element from whitespace-delimited tokens.
    ///
    /// Reads exactly `len()` tokens and consumes no more of the stream
    /// than that, so a later read can pick up where this one stopped.
    /// On error the already-parsed prefix keeps its new values.
    pub fn read_from<R: BufRead>(&mut self, reader: &mut R) -> Result<()> {
        let expected = self.data.len();
        for (index, slot) in self.data.iter_mut().enumerate() {
            let token = next_token(reader)?.ok_or(Error::UnexpectedEof {
                read: index,
                expected,
            })?;
            match token.parse() {
                Ok(value) => *slot = value,
                Err(_) => return Err(Error::ParseElement { index, token }),
            }
        }
        log::trace!("read {expected} elements");
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for DynVector<T> {
    /// Elements separated by single spaces, no trailing delimiter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
