//! Failure taxonomy shared by the vector and matrix containers.
//!
//! Every fallible operation in the crate reports through [`Error`]; the
//! panicking operator forms reuse the same messages so diagnostics look
//! identical whichever surface raised them.

use std::io;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by container construction, access, and formatted I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested size is zero or beyond the container's fixed limit.
    #[error("invalid size {size}: must be between 1 and {max}")]
    InvalidSize { size: usize, max: usize },

    /// A checked access landed outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Binary operation between operands of incompatible sizes.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A token in a formatted read did not parse as the element type.
    #[error("could not parse element {index} from token {token:?}")]
    ParseElement { index: usize, token: String },

    /// The input ended before the container was filled.
    #[error("input ended after {read} of {expected} elements")]
    UnexpectedEof { read: usize, expected: usize },

    /// Transport failure while reading formatted input.
    #[error(transparent)]
    Io(#[from] io::Error),
}
