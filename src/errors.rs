//! The [`spritz`](crate) package has a single error type, [`SpritzError`].
//!
//! Spritz has almost no run-time failure surface: absorbing and squeezing never fail.
//! Errors only signal a misuse at the boundary of the library:
//!
//! - Invalid state size ([`SpritzError::InvalidStateSize`]):
//!   the permutation size must be a power of two, at least 16,
//!   and small enough for its indices to fit in the chosen [`Unit`](crate::Unit).
//!
//! - Short buffer ([`SpritzError::BufferTooShort`]):
//!   an output buffer cannot hold the bytes the operation would produce.
//!   The check happens before any state is advanced.
//!
//! A [`core::result::Result`] wrapper called [`SpritzResult`] (having error fixed to [`SpritzError`]) is also provided.

use std::{error::Error, fmt::Display, io};

/// An error happened when building or driving a Spritz instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpritzError {
    /// The requested permutation size cannot be used.
    InvalidStateSize(usize),
    /// The destination buffer is shorter than the data to be written.
    BufferTooShort { needed: usize, got: usize },
}

/// The result type of fallible Spritz operations.
pub type SpritzResult<T> = Result<T, SpritzError>;

impl Display for SpritzError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStateSize(n) => write!(
                f,
                "Invalid state size {}: must be a power of two, at least 16, and fit the lane type",
                n
            ),
            Self::BufferTooShort { needed, got } => {
                write!(f, "Buffer too short: needed {} bytes, got {}", needed, got)
            }
        }
    }
}

impl Error for SpritzError {}

impl From<SpritzError> for io::Error {
    fn from(value: SpritzError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_buffer_too_short() {
        let err = SpritzError::BufferTooShort { needed: 4, got: 2 };
        assert_eq!(err.to_string(), "Buffer too short: needed 4 bytes, got 2");
    }

    #[test]
    fn test_into_io_error() {
        let err: io::Error = SpritzError::InvalidStateSize(3).into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
