//! Versioned STREAM frame wire decoding for strframe.
//!
//! This crate turns the bytes of a single STREAM frame into a validated
//! [`StreamFrame`]. Three encodings exist across protocol generations and
//! all of them sit behind [`select`]:
//!
//! | versions | layout | type byte | byte order |
//! |---|---|---|---|
//! | Q035, Q037, Q038 | [`LayoutKind::LegacyLe`] | `1fdoooss` | little |
//! | Q039 | [`LayoutKind::LegacyBe`] | `1fdoooss` | big |
//! | Q041 | [`LayoutKind::Modern`] | `11fssood` | big |
//!
//! # Design Principles
//!
//! - **Stateless** - Decoding is a pure function of version, buffer and packet budget.
//! - **Bounded decoding** - Every field is checked against the buffer and the packet before it is read.
//! - **No guessing** - A frame without FIN and without a length is rejected, not inferred.
//!
//! # Example
//!
//! ```
//! use wire::{decode_stream_frame, Version};
//!
//! let buf = [0xC0 | 0x20, 0x07]; // FIN, implicit length, stream 7
//! let (frame, consumed) = decode_stream_frame(Version::Q041, &buf, 200).unwrap();
//! assert_eq!(frame.stream_id, 7);
//! assert_eq!(frame.data_len, 198);
//! assert_eq!(consumed, 200);
//! ```

mod dispatch;
mod error;
mod frame;
mod layout;
mod legacy;
mod length;
mod modern;
mod version;

pub use dispatch::{
    decode_stream_frame, dispatch_table, encode_stream_frame, select, stream_frame_header_len,
};
pub use error::{DecodeError, EncodeError, VersionError, WireResult};
pub use frame::{PacketRef, StreamChunk, StreamFrame};
pub use layout::{FrameHeader, FrameLayout, LayoutKind, TypeBits, DATA_LEN_SIZE};
pub use legacy::{LegacyLayout, LegacyTypeByte};
pub use modern::{ModernLayout, ModernTypeByte};
pub use version::Version;
