//! Byte order and raw width helpers.

/// Widest field the codec handles, in bytes.
pub const MAX_WIDTH: usize = 8;

/// Byte order of a multi-byte field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

/// Interprets `bytes` as an unsigned integer in the given byte order.
///
/// Narrow fields are left-zero-padded: `[0x10, 0x02]` little-endian is
/// `0x0210`. An empty slice decodes as 0. Callers keep `bytes.len()` at or
/// below [`MAX_WIDTH`]; wider input keeps only the low 8 bytes of the
/// accumulated value.
#[must_use]
pub fn decode_uint(bytes: &[u8], order: ByteOrder) -> u64 {
    let fold = |acc: u64, byte: &u8| (acc << 8) | u64::from(*byte);
    match order {
        ByteOrder::Big => bytes.iter().fold(0, fold),
        ByteOrder::Little => bytes.iter().rev().fold(0, fold),
    }
}

/// Writes the low `out.len()` bytes of `value` into `out` in the given order.
///
/// High bytes that do not fit are dropped; range checks belong to the caller.
pub fn encode_uint(value: u64, order: ByteOrder, out: &mut [u8]) {
    let width = out.len().min(MAX_WIDTH);
    let le = value.to_le_bytes();
    for (i, byte) in le.iter().take(width).enumerate() {
        let idx = match order {
            ByteOrder::Little => i,
            ByteOrder::Big => width - 1 - i,
        };
        out[idx] = *byte;
    }
}

/// Returns the minimal number of bytes needed to hold `value` (0 for 0).
#[must_use]
pub const fn min_width(value: u64) -> usize {
    let bits = u64::BITS - value.leading_zeros();
    bits.div_ceil(8) as usize
}

/// Returns `true` if `value` fits in `width` bytes.
#[must_use]
pub const fn fits_width(value: u64, width: usize) -> bool {
    if width >= MAX_WIDTH {
        return true;
    }
    value >> (width * 8) == 0
}
