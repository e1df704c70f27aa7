//! Bit-packed STREAM frame layout introduced with Q041.
//!
//! ```text
//!   7   6   5   4   3   2   1   0
//! +---+---+---+---+---+---+---+---+
//! | 1 | 1 | f |  ss   |  oo   | d |
//! +---+---+---+---+---+---+---+---+
//! ```
//!
//! Fields are big-endian. Compared with the legacy byte, the length flag
//! moved to the low bit and the offset selector shrank to two bits over a
//! power-of-two table.

use fieldcodec::ByteOrder;

use crate::layout::{FrameLayout, LayoutKind, Sealed, TypeBits};

/// Stream id widths in bytes, indexed by `ss`.
pub const STREAM_ID_WIDTHS: [usize; 4] = [1, 2, 3, 4];

/// Offset widths in bytes, indexed by `oo`.
pub const OFFSET_WIDTHS: [usize; 4] = [0, 2, 4, 8];

/// Modern STREAM frame type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModernTypeByte(u8);

impl ModernTypeByte {
    /// Two-bit STREAM frame prefix.
    pub const STREAM: u8 = 0xC0;
    const PREFIX_MASK: u8 = 0xC0;

    /// FIN flag.
    pub const FIN: u8 = 0x20;

    /// Stream id width selector bits.
    pub const STREAM_ID_MASK: u8 = 0x18;
    const STREAM_ID_SHIFT: u8 = 3;

    /// Offset width selector bits.
    pub const OFFSET_MASK: u8 = 0x06;
    const OFFSET_SHIFT: u8 = 1;

    /// Explicit data length present.
    pub const DATA_LEN: u8 = 0x01;

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

    /// Returns `true` if both prefix bits are set.
    #[must_use]
    pub const fn is_stream(self) -> bool {
        self.0 & Self::PREFIX_MASK == Self::STREAM
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

    /// Returns the 2-bit stream id width selector.
    #[must_use]
    pub const fn stream_id_selector(self) -> u8 {
        (self.0 & Self::STREAM_ID_MASK) >> Self::STREAM_ID_SHIFT
    }

    /// Returns the 2-bit offset width selector.
    #[must_use]
    pub const fn offset_selector(self) -> u8 {
        (self.0 & Self::OFFSET_MASK) >> Self::OFFSET_SHIFT
    }

    /// Packs flags and selectors. Selector bits beyond their field are dropped.
    #[must_use]
    pub const fn new(bits: TypeBits) -> Self {
        let mut raw = Self::STREAM;
        if bits.fin {
            raw |= Self::FIN;
        }
        raw |= (bits.stream_id_selector << Self::STREAM_ID_SHIFT) & Self::STREAM_ID_MASK;
        raw |= (bits.offset_selector << Self::OFFSET_SHIFT) & Self::OFFSET_MASK;
        if bits.explicit_len {
            raw |= Self::DATA_LEN;
        }
        Self(raw)
    }
}

/// The `11fssood` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModernLayout;

impl Sealed for ModernLayout {}

impl FrameLayout for ModernLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Modern
    }

    fn byte_order(&self) -> ByteOrder {
        ByteOrder::Big
    }

    fn stream_id_widths(&self) -> &'static [usize] {
        &STREAM_ID_WIDTHS
    }

    fn offset_widths(&self) -> &'static [usize] {
        &OFFSET_WIDTHS
    }

    fn split_type_byte(&self, type_byte: u8) -> Option<TypeBits> {
        let byte = ModernTypeByte::from_raw(type_byte);
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
        ModernTypeByte::new(bits).raw()
    }
}
