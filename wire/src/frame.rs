//! STREAM frame record types.

/// Non-owning handle to the packet a frame was decoded from.
///
/// The handle is an index into whatever packet table the receiving side
/// keeps. It does not borrow or own packet memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacketRef(u32);

impl PacketRef {
    /// Creates a handle from a packet table index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the packet table index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// A decoded STREAM frame.
///
/// Built fresh by every successful decode. `read_offset` and `packet` are
/// always zero/`None` coming out of the decoder; they belong to the stream
/// assembly side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamFrame {
    /// Stream the payload belongs to.
    pub stream_id: u64,
    /// Offset in the stream of the first payload byte.
    pub data_offset: u64,
    /// Number of payload bytes following the header.
    pub data_len: usize,
    /// No more data on this stream past `data_offset + data_len`.
    pub fin: bool,
    /// Bytes of this frame already handed to the application.
    pub read_offset: u64,
    /// Source packet, if the receiver attached one.
    pub packet: Option<PacketRef>,
}

impl StreamFrame {
    /// Creates a frame with `read_offset = 0` and no packet reference.
    #[must_use]
    pub const fn new(stream_id: u64, data_offset: u64, data_len: usize, fin: bool) -> Self {
        Self {
            stream_id,
            data_offset,
            data_len,
            fin,
            read_offset: 0,
            packet: None,
        }
    }

    /// Stream offset one past the last payload byte.
    #[must_use]
    pub const fn end_offset(&self) -> u64 {
        self.data_offset.saturating_add(self.data_len as u64)
    }

    /// Attaches a packet reference.
    #[must_use]
    pub const fn with_packet(mut self, packet: PacketRef) -> Self {
        self.packet = Some(packet);
        self
    }
}

/// Outgoing STREAM frame contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamChunk<'a> {
    pub stream_id: u64,
    pub offset: u64,
    pub fin: bool,
    pub data: &'a [u8],
    /// Write the 2-byte length field. Without it the frame runs to the end
    /// of the packet, which requires `fin`.
    pub explicit_len: bool,
}

impl<'a> StreamChunk<'a> {
    /// Creates a chunk with an explicit length and FIN unset.
    #[must_use]
    pub const fn new(stream_id: u64, offset: u64, data: &'a [u8]) -> Self {
        Self {
            stream_id,
            offset,
            fin: false,
            data,
            explicit_len: true,
        }
    }

    /// Sets FIN.
    #[must_use]
    pub const fn with_fin(mut self) -> Self {
        self.fin = true;
        self
    }

    /// Omits the length field so the frame fills the rest of the packet.
    #[must_use]
    pub const fn implicit_len(mut self) -> Self {
        self.explicit_len = false;
        self
    }
}
