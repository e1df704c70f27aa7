#![no_main]

use libfuzzer_sys::fuzz_target;
use wire::{decode_stream_frame, Version};

fuzz_target!(|data: &[u8]| {
    // First three bytes pick the version and the packet budget.
    if data.len() < 3 {
        return;
    }
    let version = Version::ALL[usize::from(data[0]) % Version::COUNT];
    let remaining = usize::from(u16::from_le_bytes([data[1], data[2]]));
    let buf = &data[3..];

    if let Ok((frame, consumed)) = decode_stream_frame(version, buf, remaining) {
        assert!(consumed <= remaining);
        assert!(frame.data_len <= consumed);
        assert!(frame.fin || frame.data_len > 0);
        assert_eq!(frame.read_offset, 0);
        assert!(frame.packet.is_none());
    }
});
