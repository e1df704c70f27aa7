use fieldcodec::{ByteOrder, FieldWriter};
use proptest::prelude::*;
use wire::{
    decode_stream_frame, encode_stream_frame, select, DecodeError, StreamChunk, TypeBits, Version,
};

fn version_strategy() -> impl Strategy<Value = Version> {
    prop::sample::select(Version::ALL.to_vec())
}

/// A value whose minimal encoding is exactly `width` bytes.
fn value_of_width(width: usize, seed: u64) -> u64 {
    if width == 0 {
        return 0;
    }
    let bits = width * 8;
    let mask = if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 };
    (seed & mask) | (1u64 << (bits - 1))
}

/// Writes a header by hand: type byte, then fields of the selected widths.
fn write_header(version: Version, bits: TypeBits, stream_id: u64, offset: u64, len: u16) -> Vec<u8> {
    let layout = select(version);
    let header = layout.parse_header(layout.join_type_byte(bits)).unwrap();
    let order = layout.byte_order();
    let mut buf = vec![0u8; header.size()];
    let mut writer = FieldWriter::new(&mut buf);
    writer.write_u8(layout.join_type_byte(bits)).unwrap();
    writer
        .write_uint(stream_id, header.stream_id_width, order)
        .unwrap();
    writer.write_uint(offset, header.offset_width, order).unwrap();
    if bits.explicit_len {
        writer.write_u16(len, order).unwrap();
    }
    assert_eq!(writer.finish(), header.size());
    buf
}

proptest! {
    #[test]
    fn prop_encode_decode_roundtrip(
        version in version_strategy(),
        stream_id in any::<u32>(),
        offset in any::<u64>(),
        data in prop::collection::vec(any::<u8>(), 0..64),
        fin in any::<bool>(),
        explicit_len in any::<bool>(),
    ) {
        // Combinations the decoder rejects are covered elsewhere.
        let fin = fin || !explicit_len || data.is_empty();
        let chunk = StreamChunk {
            stream_id: u64::from(stream_id),
            offset,
            fin,
            data: &data,
            explicit_len,
        };
        let mut out = vec![0u8; 15 + data.len()];
        let len = encode_stream_frame(version, &chunk, &mut out).unwrap();

        let (frame, consumed) = decode_stream_frame(version, &out[..len], len).unwrap();
        prop_assert_eq!(consumed, len);
        prop_assert_eq!(frame.stream_id, u64::from(stream_id));
        prop_assert_eq!(frame.data_offset, offset);
        prop_assert_eq!(frame.data_len, data.len());
        prop_assert_eq!(frame.fin, fin);
        prop_assert_eq!(&out[len - data.len()..len], &data[..]);
    }

    #[test]
    fn prop_every_width_pair_roundtrips(
        version in version_strategy(),
        id_seed in any::<u64>(),
        offset_seed in any::<u64>(),
    ) {
        let layout = select(version);
        for &id_width in layout.stream_id_widths() {
            for &offset_width in layout.offset_widths() {
                let stream_id = value_of_width(id_width, id_seed);
                let offset = value_of_width(offset_width, offset_seed);
                let chunk = StreamChunk::new(stream_id, offset, b"payload");
                let mut out = [0u8; 32];
                let len = encode_stream_frame(version, &chunk, &mut out).unwrap();
                prop_assert_eq!(len, 1 + id_width + offset_width + 2 + 7);

                let (frame, _) = decode_stream_frame(version, &out[..len], len).unwrap();
                prop_assert_eq!(frame.stream_id, stream_id);
                prop_assert_eq!(frame.data_offset, offset);
            }
        }
    }

    #[test]
    fn prop_legacy_byte_orders_agree(
        stream_id in any::<u32>(),
        offset in any::<u64>(),
        data_len in 1usize..300,
        fin in any::<bool>(),
    ) {
        let data = vec![0xAB; data_len];
        let chunk = StreamChunk {
            fin,
            ..StreamChunk::new(u64::from(stream_id), offset, &data)
        };
        let mut le = vec![0u8; 15 + data_len];
        let mut be = vec![0u8; 15 + data_len];
        let le_len = encode_stream_frame(Version::Q037, &chunk, &mut le).unwrap();
        let be_len = encode_stream_frame(Version::Q039, &chunk, &mut be).unwrap();
        prop_assert_eq!(le_len, be_len);
        prop_assert_eq!(le[0], be[0]);

        let le_frame = decode_stream_frame(Version::Q037, &le, le_len).unwrap();
        let be_frame = decode_stream_frame(Version::Q039, &be, be_len).unwrap();
        prop_assert_eq!(le_frame, be_frame);

        // Multi-byte fields are mirrored.
        let header = select(Version::Q037).parse_header(le[0]).unwrap();
        let id = 1..1 + header.stream_id_width;
        let mut le_id = le[id.clone()].to_vec();
        le_id.reverse();
        prop_assert_eq!(&le_id[..], &be[id]);
    }

    #[test]
    fn prop_implicit_length_fills_packet(
        version in version_strategy(),
        stream_id_selector in 0u8..4,
        offset_selector in 0u8..4,
        seed in any::<u64>(),
        extra in 0usize..2000,
    ) {
        let bits = TypeBits {
            fin: true,
            explicit_len: false,
            stream_id_selector,
            offset_selector,
        };
        let buf = write_header(version, bits, seed & 0xFF, 0, 0);
        let remaining = buf.len() + extra;
        let (frame, consumed) = decode_stream_frame(version, &buf, remaining).unwrap();
        prop_assert_eq!(frame.data_len, remaining - buf.len());
        prop_assert_eq!(consumed, remaining);
        prop_assert!(frame.fin);
    }

    #[test]
    fn prop_ambiguous_length_always_rejected(
        version in version_strategy(),
        type_seed in any::<u8>(),
        rest in prop::collection::vec(any::<u8>(), 0..32),
        extra in 0usize..2000,
    ) {
        let layout = select(version);
        let bits = TypeBits {
            fin: false,
            explicit_len: false,
            stream_id_selector: type_seed & 0x03,
            offset_selector: (type_seed >> 2) & 0x03,
        };
        let mut buf = vec![layout.join_type_byte(bits)];
        buf.extend_from_slice(&rest);
        let header = layout.parse_header(buf[0]).unwrap();
        let result = decode_stream_frame(version, &buf, buf.len() + extra);
        if buf.len() >= header.size() {
            prop_assert_eq!(result, Err(DecodeError::AmbiguousLength));
        } else {
            let is_truncated = matches!(result, Err(DecodeError::TruncatedHeader { .. }));
            prop_assert!(is_truncated);
        }
    }

    #[test]
    fn prop_bounds_boundary_is_exact(
        version in version_strategy(),
        claimed in 1u16..=u16::MAX,
        overage in 1usize..64,
        fin in any::<bool>(),
    ) {
        let bits = TypeBits {
            fin,
            explicit_len: true,
            stream_id_selector: 0,
            offset_selector: 1,
        };
        let header_len = write_header(version, bits, 1, 1, 0).len();
        let remaining = (header_len + usize::from(claimed)).saturating_sub(overage).max(header_len);
        let over = header_len + usize::from(claimed) - remaining;
        prop_assume!(over > 0);

        let buf = write_header(version, bits, 1, 1, claimed);
        let result = decode_stream_frame(version, &buf, remaining);
        let is_truncated = matches!(result, Err(DecodeError::TruncatedPayload { .. }));
        prop_assert!(is_truncated);

        let shortened = claimed - u16::try_from(over).unwrap();
        prop_assume!(fin || shortened > 0);
        let buf = write_header(version, bits, 1, 1, shortened);
        let (frame, consumed) = decode_stream_frame(version, &buf, remaining).unwrap();
        prop_assert_eq!(frame.data_len, usize::from(shortened));
        prop_assert_eq!(consumed, remaining);
    }

    #[test]
    fn prop_zero_offset_width_decodes_zero(
        version in version_strategy(),
        stream_id in any::<u8>(),
    ) {
        let bits = TypeBits {
            fin: true,
            explicit_len: true,
            stream_id_selector: 0,
            offset_selector: 0,
        };
        let buf = write_header(version, bits, u64::from(stream_id), 0, 0);
        let (frame, _) = decode_stream_frame(version, &buf, buf.len()).unwrap();
        prop_assert_eq!(frame.data_offset, 0);
        prop_assert_eq!(frame.stream_id, u64::from(stream_id));
    }

    #[test]
    fn prop_decode_never_overruns(
        version in version_strategy(),
        data in prop::collection::vec(any::<u8>(), 0..40),
        remaining in 0usize..4096,
    ) {
        if let Ok((frame, consumed)) = decode_stream_frame(version, &data, remaining) {
            prop_assert!(consumed <= remaining);
            prop_assert!(frame.data_len <= consumed);
            prop_assert!(frame.fin || frame.data_len > 0);
            prop_assert_eq!(frame.read_offset, 0);
        }
    }
}

#[test]
fn byte_order_matters_for_multi_byte_fields() {
    let mut buf = [0u8; 8];
    let mut writer = FieldWriter::new(&mut buf);
    writer.write_u8(0x80 | 0x40 | 0x20 | 0x01).unwrap();
    writer.write_uint(0x0210, 2, ByteOrder::Little).unwrap();
    writer.write_u16(0, ByteOrder::Little).unwrap();
    let len = writer.finish();

    let (le, _) = decode_stream_frame(Version::Q037, &buf[..len], len).unwrap();
    let (be, _) = decode_stream_frame(Version::Q039, &buf[..len], len).unwrap();
    assert_eq!(le.stream_id, 0x0210);
    assert_eq!(be.stream_id, 0x1002);
}
