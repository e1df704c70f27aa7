//! Error types for STREAM frame decoding and encoding.

use std::fmt;

use fieldcodec::FieldError;

/// Result type for frame decoding.
pub type WireResult<T> = Result<T, DecodeError>;

/// Reasons a STREAM frame fails to decode.
///
/// Any of these invalidates the enclosing packet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Not enough bytes to read a declared-width header field.
    TruncatedHeader { needed: usize, available: usize },

    /// Explicit data length runs past the end of the packet.
    TruncatedPayload { data_len: usize, available: usize },

    /// Neither an explicit length nor FIN: the frame end is undecidable.
    AmbiguousLength,

    /// FIN unset and zero data bytes: the frame carries nothing.
    EmptyFrame,

    /// Type byte does not carry the STREAM frame prefix for this layout.
    NotStreamFrame { type_byte: u8 },

    /// Field codec error.
    Field(FieldError),
}

/// Errors that can occur while generating a STREAM frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// Output buffer cannot hold header plus payload.
    BufferTooSmall { needed: usize, available: usize },

    /// Stream id is wider than the layout's largest stream-id field.
    StreamIdOverflow { stream_id: u64 },

    /// Payload does not fit the 2-byte explicit length field.
    LengthOverflow { length: usize },

    /// Implicit length requested without FIN.
    AmbiguousLength,

    /// No payload and no FIN.
    EmptyFrame,

    /// Field codec error.
    Field(FieldError),
}

/// A version token that maps to no supported layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Well-formed tag that is not in the dispatch table.
    Unsupported { tag: u32 },

    /// Token that is not a 4-character version tag.
    Malformed { token: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedHeader { needed, available } => {
                write!(
                    f,
                    "truncated stream frame header: need {needed} bytes, have {available}"
                )
            }
            Self::TruncatedPayload {
                data_len,
                available,
            } => {
                write!(
                    f,
                    "truncated stream frame payload: length {data_len} but {available} bytes left in packet"
                )
            }
            Self::AmbiguousLength => {
                write!(f, "stream frame has neither FIN nor an explicit data length")
            }
            Self::EmptyFrame => write!(f, "stream frame has no data and no FIN"),
            Self::NotStreamFrame { type_byte } => {
                write!(f, "not a stream frame type byte: 0x{type_byte:02X}")
            }
            Self::Field(err) => write!(f, "field error: {err}"),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall { needed, available } => {
                write!(f, "buffer too small: need {needed}, have {available}")
            }
            Self::StreamIdOverflow { stream_id } => {
                write!(f, "stream id {stream_id} does not fit the stream id field")
            }
            Self::LengthOverflow { length } => {
                write!(f, "length overflow: {length}")
            }
            Self::AmbiguousLength => {
                write!(f, "implicit data length requires FIN")
            }
            Self::EmptyFrame => write!(f, "stream frame needs data or FIN"),
            Self::Field(err) => write!(f, "field error: {err}"),
        }
    }
}

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { tag } => {
                write!(f, "unsupported protocol version: 0x{tag:08X}")
            }
            Self::Malformed { token } => {
                write!(f, "malformed protocol version token: {token:?}")
            }
        }
    }
}

impl From<FieldError> for DecodeError {
    fn from(err: FieldError) -> Self {
        Self::Field(err)
    }
}

impl From<FieldError> for EncodeError {
    fn from(err: FieldError) -> Self {
        Self::Field(err)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for VersionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display_truncated_header() {
        let err = DecodeError::TruncatedHeader {
            needed: 15,
            available: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("header"));
        assert!(msg.contains("15"));
        assert!(msg.contains('4'));
    }

    #[test]
    fn decode_error_display_truncated_payload() {
        let err = DecodeError::TruncatedPayload {
            data_len: 0x1FB,
            available: 0x1FA,
        };
        let msg = err.to_string();
        assert!(msg.contains("507"));
        assert!(msg.contains("506"));
    }

    #[test]
    fn decode_error_display_not_stream_frame() {
        let err = DecodeError::NotStreamFrame { type_byte: 0x1C };
        assert!(err.to_string().contains("0x1C"));
    }

    #[test]
    fn decode_error_wraps_field_error() {
        let err = DecodeError::from(FieldError::InvalidWidth { width: 9 });
        assert!(matches!(err, DecodeError::Field(_)));
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&DecodeError::AmbiguousLength).is_none());
    }

    #[test]
    fn encode_error_display() {
        let err = EncodeError::BufferTooSmall {
            needed: 10,
            available: 4,
        };
        assert!(err.to_string().contains("buffer too small"));
        let err = EncodeError::StreamIdOverflow {
            stream_id: 1 << 40,
        };
        assert!(err.to_string().contains("stream id"));
    }

    #[test]
    fn version_error_display() {
        let err = VersionError::Unsupported { tag: 0x5130_3939 };
        assert!(err.to_string().contains("51303939"));
        let err = VersionError::Malformed {
            token: "Q3".to_string(),
        };
        assert!(err.to_string().contains("Q3"));
    }
}
