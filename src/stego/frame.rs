// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Payload frame construction and parsing.
//!
//! The frame is the binary container whose bits land in the carrier's LSB
//! slots. It is self-describing: the tag tells extraction how the payload
//! was prepared, the length bounds every read, and the CRC turns any bit
//! damage into a deterministic error.
//!
//! ```text
//! [1 byte ] framing tag (0x01 = text, 0x02 = binary)
//! [4 bytes] framed payload length N (big-endian u32)
//! [N bytes] framed payload (raw bytes for text, base64 for binary)
//! [4 bytes] CRC-32 of everything above
//! ```
//!
//! Total frame size = 9 + N bytes.
//!
//! A payload counts as binary when any of its first 1024 bytes has the high
//! bit set; binary payloads are base64-encoded (standard alphabet, padded)
//! before framing so the embedded stream stays 7-bit clean. Text payloads
//! travel verbatim. Extraction trusts the tag — it never re-guesses the
//! payload kind from its shape.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::stego::bitio::BitSource;
use crate::stego::error::{Result, StegoError};

/// Tag byte + 4-byte length field.
pub const HEADER_LEN: usize = 5;
/// CRC-32 trailer.
pub const CRC_LEN: usize = 4;
/// Fixed overhead: header(5) + crc(4) = 9 bytes.
pub const FRAME_OVERHEAD: usize = HEADER_LEN + CRC_LEN;

/// How many leading payload bytes the text/binary classifier inspects.
pub const CLASSIFY_WINDOW: usize = 1024;

/// How a payload was prepared for embedding. Carried in the frame's tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Payload bytes embedded verbatim.
    Text = 0x01,
    /// Payload base64-encoded before embedding.
    Binary = 0x02,
}

impl Framing {
    /// The wire tag byte.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Parse a wire tag byte.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x01 => Some(Self::Text),
            0x02 => Some(Self::Binary),
            _ => None,
        }
    }
}

/// Classify a payload as text or binary.
///
/// Binary iff any of the first [`CLASSIFY_WINDOW`] bytes has a value above
/// 127. The empty payload is text.
pub fn classify(payload: &[u8]) -> Framing {
    let window = &payload[..payload.len().min(CLASSIFY_WINDOW)];
    if window.iter().any(|&b| b > 127) {
        Framing::Binary
    } else {
        Framing::Text
    }
}

/// Parsed payload frame.
#[derive(Debug)]
pub struct ParsedFrame {
    /// How the payload was framed on the embed side.
    pub framing: Framing,
    /// The recovered payload bytes (base64 already undone for binary frames).
    pub payload: Vec<u8>,
}

/// Build a frame around a payload.
///
/// Classifies the payload, applies base64 when binary, and wraps the result
/// in tag + length + CRC. Returns the frame bytes and the chosen framing.
pub fn build_frame(payload: &[u8]) -> (Vec<u8>, Framing) {
    let framing = classify(payload);
    let framed = match framing {
        Framing::Text => payload.to_vec(),
        Framing::Binary => BASE64.encode(payload).into_bytes(),
    };
    debug_assert!(framed.len() <= u32::MAX as usize, "framed payload exceeds u32 length field");

    let mut frame = Vec::with_capacity(FRAME_OVERHEAD + framed.len());
    frame.push(framing.tag());
    frame.extend_from_slice(&(framed.len() as u32).to_be_bytes());
    frame.extend_from_slice(&framed);

    let crc = crc32fast::hash(&frame);
    frame.extend_from_slice(&crc.to_be_bytes());

    (frame, framing)
}

/// Read and validate a frame from a bit-stream source.
///
/// `max_frame_bytes` is the number of whole bytes the carrier's slot budget
/// can hold. A length field implying a larger frame is rejected immediately —
/// such a value can only come from LSB noise, and failing fast avoids
/// draining the whole traversal before discovering the CRC mismatch.
///
/// # Errors
/// - [`StegoError::Decode`] on an unknown tag, an implausible length, a
///   truncated stream, or a CRC mismatch.
/// - [`StegoError::Encoding`] if a CRC-valid binary frame fails base64
///   decoding.
pub fn read_frame<I>(src: &mut BitSource<I>, max_frame_bytes: u64) -> Result<ParsedFrame>
where
    I: Iterator<Item = u8>,
{
    let tag = src.read_byte()?;
    let framing = Framing::from_tag(tag).ok_or(StegoError::Decode("unknown framing tag"))?;

    let len_bytes = src.read_bytes(4)?;
    let framed_len =
        u32::from_be_bytes([len_bytes[0], len_bytes[1], len_bytes[2], len_bytes[3]]) as u64;

    if FRAME_OVERHEAD as u64 + framed_len > max_frame_bytes {
        return Err(StegoError::Decode("frame length exceeds carrier capacity"));
    }

    let framed = src.read_bytes(framed_len as usize)?;
    let crc_bytes = src.read_bytes(CRC_LEN)?;
    let stored_crc =
        u32::from_be_bytes([crc_bytes[0], crc_bytes[1], crc_bytes[2], crc_bytes[3]]);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&[tag]);
    hasher.update(&len_bytes);
    hasher.update(&framed);
    if hasher.finalize() != stored_crc {
        return Err(StegoError::Decode("frame CRC mismatch"));
    }

    let payload = match framing {
        Framing::Text => framed,
        Framing::Binary => BASE64
            .decode(&framed)
            .map_err(|_| StegoError::Encoding("base64 payload damaged"))?,
    };

    Ok(ParsedFrame { framing, payload })
}
