//! Error types for field codec operations.

use std::fmt;

/// Result type for field codec operations.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors that can occur while reading or writing fixed-width fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// Attempted to write past the end of the output buffer.
    BufferOverflow {
        /// Number of bytes attempted to write.
        attempted: usize,
        /// Number of bytes left in the buffer.
        capacity: usize,
    },

    /// Field width outside `0..=8` bytes.
    InvalidWidth {
        /// The invalid width provided.
        width: usize,
    },

    /// Value exceeds the range representable in the field width.
    ValueOutOfRange {
        /// The value that was out of range.
        value: u64,
        /// Field width in bytes.
        width: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::BufferOverflow {
                attempted,
                capacity,
            } => {
                write!(
                    f,
                    "attempted to write {attempted} bytes but only {capacity} bytes of space left"
                )
            }
            Self::InvalidWidth { width } => {
                write!(f, "invalid field width {width}, maximum allowed is 8 bytes")
            }
            Self::ValueOutOfRange { value, width } => {
                write!(f, "value {value} cannot be represented in {width} bytes")
            }
        }
    }
}

impl std::error::Error for FieldError {}
