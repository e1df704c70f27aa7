//! The layout trait shared by all STREAM frame encodings.

use std::fmt;

use fieldcodec::{fits_width, ByteOrder, FieldReader, FieldWriter};

use crate::error::{DecodeError, EncodeError, WireResult};
use crate::frame::{StreamChunk, StreamFrame};
use crate::length::{check_header, resolve_data_len};

/// Size of the explicit data length field in every layout.
pub const DATA_LEN_SIZE: usize = 2;

/// The closed set of STREAM frame encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutKind {
    /// `1fdoooss`, little-endian fields.
    LegacyLe,
    /// `1fdoooss`, big-endian fields.
    LegacyBe,
    /// `11fssood`, big-endian fields.
    Modern,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LegacyLe => "legacy-le",
            Self::LegacyBe => "legacy-be",
            Self::Modern => "modern",
        };
        write!(f, "{name}")
    }
}

/// Raw values carried by a STREAM frame type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeBits {
    pub fin: bool,
    pub explicit_len: bool,
    pub stream_id_selector: u8,
    pub offset_selector: u8,
}

/// A type byte resolved to field widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameHeader {
    pub fin: bool,
    pub explicit_len: bool,
    /// Stream id field width in bytes.
    pub stream_id_width: usize,
    /// Offset field width in bytes.
    pub offset_width: usize,
}

impl FrameHeader {
    /// Header size in bytes, type byte included.
    #[must_use]
    pub const fn size(&self) -> usize {
        let data_len = if self.explicit_len { DATA_LEN_SIZE } else { 0 };
        1 + self.stream_id_width + self.offset_width + data_len
    }
}

mod private {
    pub trait Sealed {}
}

pub(crate) use private::Sealed;

/// One STREAM frame wire encoding.
///
/// Implementors describe their type byte and width tables; decoding,
/// header sizing and encoding are shared. The trait is sealed: the set of
/// layouts is fixed by [`LayoutKind`].
pub trait FrameLayout: Sealed + fmt::Debug + Sync {
    /// Which layout this is.
    fn kind(&self) -> LayoutKind;

    /// Byte order of the stream id, offset and length fields.
    fn byte_order(&self) -> ByteOrder;

    /// Stream id widths in bytes, indexed by selector, ascending.
    fn stream_id_widths(&self) -> &'static [usize];

    /// Offset widths in bytes, indexed by selector, ascending.
    fn offset_widths(&self) -> &'static [usize];

    /// Splits a type byte into its flags and selectors.
    ///
    /// Returns `None` if the byte does not carry the STREAM frame prefix.
    fn split_type_byte(&self, type_byte: u8) -> Option<TypeBits>;

    /// Packs flags and selectors into a type byte.
    fn join_type_byte(&self, bits: TypeBits) -> u8;

    /// Resolves a type byte to field widths.
    fn parse_header(&self, type_byte: u8) -> WireResult<FrameHeader> {
        let bits = self
            .split_type_byte(type_byte)
            .ok_or(DecodeError::NotStreamFrame { type_byte })?;
        let stream_id_width = self
            .stream_id_widths()
            .get(usize::from(bits.stream_id_selector))
            .copied();
        let offset_width = self
            .offset_widths()
            .get(usize::from(bits.offset_selector))
            .copied();
        match (stream_id_width, offset_width) {
            (Some(stream_id_width), Some(offset_width)) => Ok(FrameHeader {
                fin: bits.fin,
                explicit_len: bits.explicit_len,
                stream_id_width,
                offset_width,
            }),
            _ => Err(DecodeError::NotStreamFrame { type_byte }),
        }
    }

    /// Decodes a STREAM frame from the start of `buf`.
    ///
    /// `remaining` counts the bytes from `buf[0]` to the end of the packet.
    /// Returns the frame and the number of header plus payload bytes it
    /// occupies.
    fn decode(&self, buf: &[u8], remaining: usize) -> WireResult<(StreamFrame, usize)> {
        let window = &buf[..buf.len().min(remaining)];
        let Some(&type_byte) = window.first() else {
            return Err(DecodeError::TruncatedHeader {
                needed: 1,
                available: 0,
            });
        };
        let header = self.parse_header(type_byte)?;
        let header_len = header.size();
        check_header(header_len, window.len())?;

        let order = self.byte_order();
        let mut reader = FieldReader::new(&window[1..header_len]);
        let stream_id = reader.read_uint(header.stream_id_width, order)?;
        let data_offset = reader.read_uint(header.offset_width, order)?;
        let explicit = if header.explicit_len {
            Some(reader.read_u16(order)?)
        } else {
            None
        };

        let data_len = resolve_data_len(header.fin, explicit, header_len, remaining)?;
        let frame = StreamFrame::new(stream_id, data_offset, data_len, header.fin);
        Ok((frame, header_len + data_len))
    }

    /// Picks the smallest widths that hold `stream_id` and `offset`.
    fn plan(
        &self,
        stream_id: u64,
        offset: u64,
        fin: bool,
        explicit_len: bool,
    ) -> Result<TypeBits, EncodeError> {
        let stream_id_selector = smallest_selector(self.stream_id_widths(), stream_id)
            .ok_or(EncodeError::StreamIdOverflow { stream_id })?;
        // The widest offset field is 8 bytes, so every offset has a selector.
        let offset_selector = smallest_selector(self.offset_widths(), offset).unwrap_or(0);
        Ok(TypeBits {
            fin,
            explicit_len,
            stream_id_selector,
            offset_selector,
        })
    }

    /// Size of the minimal header for these values.
    fn header_len(
        &self,
        stream_id: u64,
        offset: u64,
        explicit_len: bool,
    ) -> Result<usize, EncodeError> {
        let bits = self.plan(stream_id, offset, false, explicit_len)?;
        let type_byte = self.join_type_byte(bits);
        self.parse_header(type_byte)
            .map(|header| header.size())
            .map_err(|_| EncodeError::StreamIdOverflow { stream_id })
    }

    /// Writes a STREAM frame (header and payload) into `out`.
    ///
    /// Returns the number of bytes written.
    fn encode(&self, chunk: &StreamChunk<'_>, out: &mut [u8]) -> Result<usize, EncodeError> {
        if !chunk.explicit_len && !chunk.fin {
            return Err(EncodeError::AmbiguousLength);
        }
        if !chunk.fin && chunk.data.is_empty() {
            return Err(EncodeError::EmptyFrame);
        }
        let explicit = if chunk.explicit_len {
            Some(
                u16::try_from(chunk.data.len()).map_err(|_| EncodeError::LengthOverflow {
                    length: chunk.data.len(),
                })?,
            )
        } else {
            None
        };

        let bits = self.plan(chunk.stream_id, chunk.offset, chunk.fin, chunk.explicit_len)?;
        let type_byte = self.join_type_byte(bits);
        let header = self
            .parse_header(type_byte)
            .map_err(|_| EncodeError::StreamIdOverflow {
                stream_id: chunk.stream_id,
            })?;

        let needed = header.size() + chunk.data.len();
        if out.len() < needed {
            return Err(EncodeError::BufferTooSmall {
                needed,
                available: out.len(),
            });
        }

        let order = self.byte_order();
        let mut writer = FieldWriter::new(out);
        writer.write_u8(type_byte)?;
        writer.write_uint(chunk.stream_id, header.stream_id_width, order)?;
        writer.write_uint(chunk.offset, header.offset_width, order)?;
        if let Some(len) = explicit {
            writer.write_u16(len, order)?;
        }
        writer.write_bytes(chunk.data)?;
        Ok(writer.finish())
    }
}

/// Index of the first width in an ascending table that holds `value`.
fn smallest_selector(widths: &[usize], value: u64) -> Option<u8> {
    widths
        .iter()
        .position(|&width| fits_width(value, width))
        .and_then(|idx| u8::try_from(idx).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_len_counts_every_field() {
        let header = FrameHeader {
            fin: true,
            explicit_len: true,
            stream_id_width: 4,
            offset_width: 8,
        };
        assert_eq!(header.size(), 15);

        let header = FrameHeader {
            explicit_len: false,
            ..header
        };
        assert_eq!(header.size(), 13);
    }

    #[test]
    fn smallest_selector_picks_first_fit() {
        let widths = [0, 2, 4, 8];
        assert_eq!(smallest_selector(&widths, 0), Some(0));
        assert_eq!(smallest_selector(&widths, 1), Some(1));
        assert_eq!(smallest_selector(&widths, 0xFFFF), Some(1));
        assert_eq!(smallest_selector(&widths, 0x1_0000), Some(2));
        assert_eq!(smallest_selector(&widths, u64::MAX), Some(3));
        assert_eq!(smallest_selector(&[1, 2, 3, 4], 1 << 32), None);
    }

    #[test]
    fn layout_kind_display() {
        assert_eq!(LayoutKind::LegacyLe.to_string(), "legacy-le");
        assert_eq!(LayoutKind::LegacyBe.to_string(), "legacy-be");
        assert_eq!(LayoutKind::Modern.to_string(), "modern");
    }
}
