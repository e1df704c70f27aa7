//! Fixed-field STREAM frame layout of the early protocol versions.
//!
//! ```text
//!   7   6   5   4   3   2   1   0
//! +---+---+---+---+---+---+---+---+
//! | 1 | f | d |    ooo    |  ss   |
//! +---+---+---+---+---+---+---+---+
//! ```
//!
//! Followed by the stream id (`ss + 1` bytes), the offset (0 or `ooo + 1`
//! bytes) and, when `d` is set, a 2-byte data length. Q035 to Q038 store the
//! fields little-endian; Q039 switched to big-endian without touching the
//! bit layout.

use fieldcodec::ByteOrder;

use crate::layout::{FrameLayout, LayoutKind, Sealed, TypeBits};

/// Stream id widths in bytes, indexed by `ss`.
pub const STREAM_ID_WIDTHS: [usize; 4] = [1, 2, 3, 4];

/// Offset widths in bytes, indexed by `ooo`.
pub const OFFSET_WIDTHS: [usize; 8] = [0, 2, 3, 4, 5, 6, 7, 8];

/// Legacy STREAM frame type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LegacyTypeByte(u8);

impl LegacyTypeByte {
    /// STREAM frame marker.
    pub const STREAM: u8 = 0x80;

    /// FIN flag.
    pub const FIN: u8 = 0x40;

    /// Explicit data length present.
    pub const DATA_LEN: u8 = 0x20;

    /// Offset width selector bits.
    pub const OFFSET_MASK: u8 = 0x1C;
    const OFFSET_SHIFT: u8 = 2;

    /// Stream id width selector bits.
    pub const STREAM_ID_MASK: u8 = 0x03;

    /// Creates a type byte from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns `true` if the byte marks a STREAM frame.
    #[must_use]
    pub const fn is_stream(self) -> bool {
        self.0 & Self::STREAM != 0
    }

    /// Returns `true` if FIN is set.
    #[must_use]
    pub const fn fin(self) -> bool {
        self.0 & Self::FIN != 0
    }

    /// Returns `true` if a data length field follows.
    #[must_use]
    pub const fn has_data_len(self) -> bool {
        self.0 & Self::DATA_LEN != 0
    }

    /// Returns the 3-bit offset width selector.
    #[must_use]
    pub const fn offset_selector(self) -> u8 {
        (self.0 & Self::OFFSET_MASK) >> Self::OFFSET_SHIFT
    }

    /// Returns the 2-bit stream id width selector.
    #[must_use]
    pub const fn stream_id_selector(self) -> u8 {
        self.0 & Self::STREAM_ID_MASK
    }

    /// Packs flags and selectors. Selector bits beyond their field are dropped.
    #[must_use]
    pub const fn new(bits: TypeBits) -> Self {
        let mut raw = Self::STREAM;
        if bits.fin {
            raw |= Self::FIN;
        }
        if bits.explicit_len {
            raw |= Self::DATA_LEN;
        }
        raw |= (bits.offset_selector << Self::OFFSET_SHIFT) & Self::OFFSET_MASK;
        raw |= bits.stream_id_selector & Self::STREAM_ID_MASK;
        Self(raw)
    }
}

/// The `1fdoooss` layout in one byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyLayout {
    order: ByteOrder,
}

impl LegacyLayout {
    /// Q035 to Q038.
    #[must_use]
    pub const fn little_endian() -> Self {
        Self {
            order: ByteOrder::Little,
        }
    }

    /// Q039.
    #[must_use]
    pub const fn big_endian() -> Self {
        Self {
            order: ByteOrder::Big,
        }
    }
}

impl Sealed for LegacyLayout {}

impl FrameLayout for LegacyLayout {
    fn kind(&self) -> LayoutKind {
        match self.order {
            ByteOrder::Little => LayoutKind::LegacyLe,
            ByteOrder::Big => LayoutKind::LegacyBe,
        }
    }

    fn byte_order(&self) -> ByteOrder {
        self.order
    }

    fn stream_id_widths(&self) -> &'static [usize] {
        &STREAM_ID_WIDTHS
    }

    fn offset_widths(&self) -> &'static [usize] {
        &OFFSET_WIDTHS
    }

    fn split_type_byte(&self, type_byte: u8) -> Option<TypeBits> {
        let byte = LegacyTypeByte::from_raw(type_byte);
        if !byte.is_stream() {
            return None;
        }
        Some(TypeBits {
            fin: byte.fin(),
            explicit_len: byte.has_data_len(),
            stream_id_selector: byte.stream_id_selector(),
            offset_selector: byte.offset_selector(),
        })
    }

    fn join_type_byte(&self, bits: TypeBits) -> u8 {
        LegacyTypeByte::new(bits).raw()
    }
}
