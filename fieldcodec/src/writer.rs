//! Bounded writer for fixed-width fields.

use crate::error::{FieldError, FieldResult};
use crate::order::{encode_uint, fits_width, ByteOrder, MAX_WIDTH};

/// A byte cursor for encoding fixed-width integer fields into a caller buffer.
///
/// The writer never grows the buffer. Writes that do not fit return
/// [`FieldError::BufferOverflow`] and leave the cursor where it was.
#[derive(Debug)]
pub struct FieldWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> FieldWriter<'a> {
    /// Creates a new `FieldWriter` over an output buffer.
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes of space left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, value: u8) -> FieldResult<()> {
        self.reserve(1)?[0] = value;
        Ok(())
    }

    /// Writes `value` into a `width`-byte field.
    ///
    /// A width of 0 writes nothing and requires `value == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidWidth`] if `width > 8`.
    /// Returns [`FieldError::ValueOutOfRange`] if `value` doesn't fit in `width` bytes.
    pub fn write_uint(&mut self, value: u64, width: usize, order: ByteOrder) -> FieldResult<()> {
        if width > MAX_WIDTH {
            return Err(FieldError::InvalidWidth { width });
        }
        if !fits_width(value, width) {
            return Err(FieldError::ValueOutOfRange { value, width });
        }
        let out = self.reserve(width)?;
        encode_uint(value, order, out);
        Ok(())
    }

    /// Writes a 2-byte unsigned integer.
    pub fn write_u16(&mut self, value: u16, order: ByteOrder) -> FieldResult<()> {
        let bytes = match order {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        };
        self.write_bytes(&bytes)
    }

    /// Copies raw bytes into the buffer.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> FieldResult<()> {
        self.reserve(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    /// Finishes writing and returns the number of bytes used.
    #[must_use]
    pub const fn finish(self) -> usize {
        self.pos
    }

    fn reserve(&mut self, len: usize) -> FieldResult<&mut [u8]> {
        let capacity = self.remaining();
        if len > capacity {
            return Err(FieldError::BufferOverflow {
                attempted: len,
                capacity,
            });
        }
        let start = self.pos;
        self.pos += len;
        Ok(&mut self.buf[start..start + len])
    }
}
