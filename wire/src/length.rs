//! Data length inference and packet bounds checks shared by all layouts.

use crate::error::{DecodeError, WireResult};

/// Checks that a header of `header_len` bytes fits the readable window.
///
/// The window is the smaller of the buffer and the packet budget: a header
/// may not borrow bytes from past the end of either.
pub(crate) const fn check_header(header_len: usize, window: usize) -> WireResult<()> {
    if header_len > window {
        return Err(DecodeError::TruncatedHeader {
            needed: header_len,
            available: window,
        });
    }
    Ok(())
}

/// Resolves the payload length of a frame whose header is `header_len` bytes.
///
/// With an explicit length, the value is taken literally and must fit in the
/// rest of the packet. Without one the frame runs to the end of the packet,
/// which is only allowed when FIN is set. A frame without FIN must carry at
/// least one byte.
pub(crate) fn resolve_data_len(
    fin: bool,
    explicit: Option<u16>,
    header_len: usize,
    remaining: usize,
) -> WireResult<usize> {
    let available = remaining.saturating_sub(header_len);
    let data_len = match explicit {
        Some(len) => {
            let len = usize::from(len);
            if len > available {
                return Err(DecodeError::TruncatedPayload {
                    data_len: len,
                    available,
                });
            }
            len
        }
        None if fin => available,
        None => return Err(DecodeError::AmbiguousLength),
    };
    if !fin && data_len == 0 {
        return Err(DecodeError::EmptyFrame);
    }
    Ok(data_len)
}
