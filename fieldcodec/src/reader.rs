//! Bounded reader for fixed-width fields.

use crate::error::{FieldError, FieldResult};
use crate::order::{decode_uint, ByteOrder, MAX_WIDTH};

/// A byte cursor for decoding fixed-width integer fields.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    /// Creates a new `FieldReader` over a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the number of bytes consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> FieldResult<u8> {
        let bytes = self.take(1)?;
        Ok(bytes[0])
    }

    /// Reads an unsigned integer stored in `width` bytes.
    ///
    /// A width of 0 returns 0 and consumes nothing.
    pub fn read_uint(&mut self, width: usize, order: ByteOrder) -> FieldResult<u64> {
        if width > MAX_WIDTH {
            return Err(FieldError::InvalidWidth { width });
        }
        let bytes = self.take(width)?;
        Ok(decode_uint(bytes, order))
    }

    /// Reads a 2-byte unsigned integer.
    pub fn read_u16(&mut self, order: ByteOrder) -> FieldResult<u16> {
        let bytes = self.take(2)?;
        let pair = [bytes[0], bytes[1]];
        Ok(match order {
            ByteOrder::Little => u16::from_le_bytes(pair),
            ByteOrder::Big => u16::from_be_bytes(pair),
        })
    }

    fn take(&mut self, len: usize) -> FieldResult<&'a [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(FieldError::UnexpectedEof {
                requested: len,
                available,
            });
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.data[start..start + len])
    }
}
