//! Generic dynamic vector and square matrix containers.
//!
//! The crate provides two owned container types with value semantics:
//! [`DynVector`], a one-dimensional sequence sized at construction, and
//! [`DynMatrix`], a square row-major matrix built from row vectors.
//! Construction validates sizes against [`MAX_VECTOR_SIZE`] and
//! [`MAX_MATRIX_SIZE`] up front, element access comes in checked
//! ([`DynVector::at`]) and panicking (`Index`) forms, and the
//! arithmetic operators mirror checked methods for callers that have
//! already validated their operands.
//!
//! Formatted text I/O reads whitespace-delimited tokens through any
//! [`std::io::BufRead`] and writes through [`std::fmt::Display`], so
//! containers compose with files, stdin, or in-memory buffers alike.
//!
//! ```
//! use dynamat::{DynMatrix, DynVector};
//!
//! let m = DynMatrix::from_elem(2, 2.0)?;
//! let v = DynVector::from_slice(&[1.0, 1.0])?;
//! assert_eq!(m.mul_vector(&v)?.as_slice(), &[4.0, 4.0]);
//! # Ok::<(), dynamat::Error>(())
//! ```

pub mod error;
pub mod matrix;
pub mod vector;

mod read;

pub use error::{Error, Result};
pub use matrix::{DynMatrix, MAX_MATRIX_SIZE};
pub use vector::{DynVector, MAX_VECTOR_SIZE};
