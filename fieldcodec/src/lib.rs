//! Fixed-width integer field codec for strframe wire layouts.
//!
//! This crate provides [`FieldReader`] and [`FieldWriter`] for decoding and
//! encoding unsigned integers stored in 0 to 8 bytes, little- or big-endian.
//! Frame layouts pick the width from header bits; this crate only moves bytes.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads/writes are bounds-checked.
//! - **No frame knowledge** - This crate knows nothing about type bytes or selectors.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use fieldcodec::{ByteOrder, FieldReader, FieldWriter};
//!
//! let mut buf = [0u8; 6];
//! let mut writer = FieldWriter::new(&mut buf);
//! writer.write_uint(0x0210, 4, ByteOrder::Little).unwrap();
//! writer.write_u16(0x01C4, ByteOrder::Big).unwrap();
//! let len = writer.finish();
//!
//! let mut reader = FieldReader::new(&buf[..len]);
//! assert_eq!(reader.read_uint(4, ByteOrder::Little).unwrap(), 0x0210);
//! assert_eq!(reader.read_u16(ByteOrder::Big).unwrap(), 0x01C4);
//! ```

mod error;
mod order;
mod reader;
mod writer;

pub use error::{FieldError, FieldResult};
pub use order::{decode_uint, encode_uint, fits_width, min_width, ByteOrder, MAX_WIDTH};
pub use reader::FieldReader;
pub use writer::FieldWriter;
