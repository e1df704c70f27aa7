//! Version to layout dispatch.

use crate::error::{EncodeError, WireResult};
use crate::frame::{StreamChunk, StreamFrame};
use crate::layout::FrameLayout;
use crate::legacy::LegacyLayout;
use crate::modern::ModernLayout;
use crate::version::Version;

static LEGACY_LE: LegacyLayout = LegacyLayout::little_endian();
static LEGACY_BE: LegacyLayout = LegacyLayout::big_endian();
static MODERN: ModernLayout = ModernLayout;

/// Layout for each version, indexed by [`Version::index`].
static DISPATCH: [&dyn FrameLayout; Version::COUNT] =
    [&LEGACY_LE, &LEGACY_LE, &LEGACY_LE, &LEGACY_BE, &MODERN];

/// Returns the STREAM frame layout spoken by `version`.
#[must_use]
pub fn select(version: Version) -> &'static dyn FrameLayout {
    DISPATCH[version.index()]
}

/// Iterates over every supported version with its layout.
pub fn dispatch_table() -> impl Iterator<Item = (Version, &'static dyn FrameLayout)> {
    Version::ALL.into_iter().map(|version| (version, select(version)))
}

/// Decodes a STREAM frame using the layout of `version`.
///
/// `remaining` is the number of bytes from `buf[0]` to the end of the packet.
pub fn decode_stream_frame(
    version: Version,
    buf: &[u8],
    remaining: usize,
) -> WireResult<(StreamFrame, usize)> {
    select(version).decode(buf, remaining)
}

/// Encodes a STREAM frame using the layout of `version`.
pub fn encode_stream_frame(
    version: Version,
    chunk: &StreamChunk<'_>,
    out: &mut [u8],
) -> Result<usize, EncodeError> {
    select(version).encode(chunk, out)
}

/// Size of the minimal STREAM frame header for these values under `version`.
pub fn stream_frame_header_len(
    version: Version,
    stream_id: u64,
    offset: u64,
    explicit_len: bool,
) -> Result<usize, EncodeError> {
    select(version).header_len(stream_id, offset, explicit_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutKind;

    #[test]
    fn every_version_maps_to_expected_layout() {
        let expected = [
            (Version::Q035, LayoutKind::LegacyLe),
            (Version::Q037, LayoutKind::LegacyLe),
            (Version::Q038, LayoutKind::LegacyLe),
            (Version::Q039, LayoutKind::LegacyBe),
            (Version::Q041, LayoutKind::Modern),
        ];
        for (version, kind) in expected {
            assert_eq!(select(version).kind(), kind, "{version}");
        }
    }

    #[test]
    fn table_lists_all_versions() {
        let versions: Vec<_> = dispatch_table().map(|(version, _)| version).collect();
        assert_eq!(versions, Version::ALL);
    }

    #[test]
    fn header_len_per_version() {
        // id 0x210 needs 2 bytes; offset 0 needs none.
        assert_eq!(stream_frame_header_len(Version::Q037, 0x210, 0, true), Ok(5));
        assert_eq!(stream_frame_header_len(Version::Q041, 0x210, 0, false), Ok(3));
        // Offset 0x1_0000: 3 bytes legacy, 4 bytes modern.
        assert_eq!(stream_frame_header_len(Version::Q039, 1, 0x1_0000, true), Ok(7));
        assert_eq!(stream_frame_header_len(Version::Q041, 1, 0x1_0000, true), Ok(8));
    }

    #[test]
    fn table_is_shareable_across_threads() {
        let handles: Vec<_> = Version::ALL
            .into_iter()
            .map(|version| {
                std::thread::spawn(move || {
                    let mut out = [0u8; 16];
                    let chunk = StreamChunk::new(3, 7, b"abc");
                    let len = encode_stream_frame(version, &chunk, &mut out).unwrap();
                    decode_stream_frame(version, &out[..len], len).unwrap()
                })
            })
            .collect();
        for handle in handles {
            let (frame, _) = handle.join().unwrap();
            assert_eq!(frame.stream_id, 3);
            assert_eq!(frame.data_offset, 7);
            assert_eq!(frame.data_len, 3);
        }
    }
}
