#![no_main]

use fieldcodec::{ByteOrder, FieldReader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = FieldReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx];
        idx += 1;

        let order = if op & 0x80 == 0 {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        };
        match op % 3 {
            0 => {
                let _ = reader.read_u8();
            }
            1 => {
                let _ = reader.read_u16(order);
            }
            _ => {
                // Widths past 8 must fail cleanly.
                let width = usize::from((op >> 2) % 10);
                let _ = reader.read_uint(width, order);
            }
        }
        assert!(reader.position() <= data.len());
    }
});
