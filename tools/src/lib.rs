//! Introspection and debugging tools for strframe STREAM frames.
//!
//! This crate provides utilities for looking inside captured frames:
//!
//! - Decode one frame and break down its type byte
//! - Walk back-to-back frames in a packet payload
//! - List the version to layout dispatch table
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see which bits chose which widths.

use std::fmt::Write as _;

use serde::Serialize;
use wire::{
    dispatch_table, select, DecodeError, FrameHeader, LayoutKind, StreamFrame, TypeBits, Version,
};

/// Everything known about one decoded frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub version: Version,
    pub layout: LayoutKind,
    pub type_byte: u8,
    pub bits: TypeBits,
    pub header: FrameHeader,
    pub frame: StreamFrame,
    /// Header plus payload bytes.
    pub consumed: usize,
    /// Offset of the frame within the inspected bytes.
    pub position: usize,
}

/// Frames found in one packet payload.
#[derive(Debug, Clone, Serialize)]
pub struct WalkReport {
    pub version: Version,
    pub frames: Vec<FrameReport>,
    /// Bytes not covered by any decoded frame.
    pub trailing: usize,
    /// Why the walk stopped early, if it did.
    pub error: Option<String>,
}

/// One row of the dispatch table.
#[derive(Debug, Clone, Serialize)]
pub struct VersionRow {
    pub version: Version,
    pub tag: String,
    pub layout: LayoutKind,
}

/// Decodes the frame at the start of `buf`.
///
/// `remaining` defaults to `buf.len()`.
pub fn inspect_frame(
    version: Version,
    buf: &[u8],
    remaining: Option<usize>,
) -> Result<FrameReport, DecodeError> {
    let remaining = remaining.unwrap_or(buf.len());
    let layout = select(version);
    let (frame, consumed) = layout.decode(buf, remaining)?;

    let type_byte = buf.first().copied().ok_or(DecodeError::TruncatedHeader {
        needed: 1,
        available: 0,
    })?;
    let bits = layout
        .split_type_byte(type_byte)
        .ok_or(DecodeError::NotStreamFrame { type_byte })?;
    let header = layout.parse_header(type_byte)?;

    Ok(FrameReport {
        version,
        layout: layout.kind(),
        type_byte,
        bits,
        header,
        frame,
        consumed,
        position: 0,
    })
}

/// Decodes consecutive frames until `packet` is used up.
///
/// Each frame's packet budget is whatever follows the previous frame. A
/// frame without a length field runs to the end of the packet, so the walk
/// ends there.
pub fn walk_frames(version: Version, packet: &[u8]) -> WalkReport {
    let mut frames = Vec::new();
    let mut position = 0;
    let mut error = None;

    while let Some(rest) = packet.get(position..).filter(|rest| !rest.is_empty()) {
        match inspect_frame(version, rest, None) {
            Ok(mut report) => {
                report.position = position;
                position += report.consumed;
                let explicit_len = report.header.explicit_len;
                frames.push(report);
                if !explicit_len {
                    break;
                }
            }
            Err(err) => {
                error = Some(err.to_string());
                break;
            }
        }
    }

    WalkReport {
        version,
        frames,
        trailing: packet.len().saturating_sub(position),
        error,
    }
}

/// The dispatch table, oldest version first.
pub fn version_rows() -> Vec<VersionRow> {
    dispatch_table()
        .map(|(version, layout)| VersionRow {
            version,
            tag: format!("0x{:08x}", version.tag()),
            layout: layout.kind(),
        })
        .collect()
}

/// Human-readable rendering of a [`FrameReport`].
pub fn format_frame_pretty(report: &FrameReport) -> String {
    let mut out = String::new();
    let bits = report.bits;
    let header = report.header;
    let frame = report.frame;
    let _ = writeln!(
        out,
        "version: {} layout: {} type: 0x{:02x} ({:08b})",
        report.version, report.layout, report.type_byte, report.type_byte
    );
    let _ = writeln!(
        out,
        "  fin: {} explicit_len: {} stream_id_selector: {} offset_selector: {}",
        bits.fin, bits.explicit_len, bits.stream_id_selector, bits.offset_selector
    );
    let _ = writeln!(
        out,
        "  widths: stream_id {} offset {} header {} bytes",
        header.stream_id_width,
        header.offset_width,
        header.size()
    );
    let _ = writeln!(
        out,
        "  stream {} offset {} len {} fin {}",
        frame.stream_id, frame.data_offset, frame.data_len, frame.fin
    );
    let _ = write!(
        out,
        "  consumed: {} bytes at position {}",
        report.consumed, report.position
    );
    out
}

/// Human-readable rendering of a [`WalkReport`].
pub fn format_walk_pretty(report: &WalkReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} frame(s) under {}",
        report.frames.len(),
        report.version
    );
    for (idx, frame) in report.frames.iter().enumerate() {
        let _ = writeln!(out, "#{idx}");
        let _ = writeln!(out, "{}", format_frame_pretty(frame));
    }
    if report.trailing > 0 {
        let _ = writeln!(out, "trailing: {} bytes", report.trailing);
    }
    if let Some(error) = &report.error {
        let _ = writeln!(out, "stopped: {error}");
    }
    out
}
