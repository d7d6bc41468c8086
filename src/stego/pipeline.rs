// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Embed/extract pipeline.
//!
//! Embedding walks the prime-indexed slot sequence and writes the payload
//! frame's bits into channel LSBs:
//! 1. Frame the payload (classify text/binary, base64 when binary, wrap in
//!    tag + length + CRC-32).
//! 2. Check capacity against the carrier's slot budget — before any pixel
//!    is touched.
//! 3. Serialize the frame to bits, zero-padded to whole pixels.
//! 4. For each bit, clear the slot channel's LSB and OR the bit in.
//!
//! Extraction rebuilds the identical slot sequence from the stego image's
//! dimensions, streams the LSBs through the frame parser, and suggests a
//! file extension for the recovered payload.
//!
//! Everything here is pure: no global state, no filesystem access, no
//! threads. Diagnostics go through the `log` facade, so they surface only
//! in whatever sink the embedding application installs.

use log::debug;

use crate::carrier::{self, PixelGrid};
use crate::stego::bitio::{self, BitSource};
use crate::stego::capacity::padded_frame_bits;
use crate::stego::error::{Result, StegoError};
use crate::stego::frame::{self, Framing};
use crate::stego::sniff::{extension_for, MimeSniffer, SignatureSniffer};
use crate::stego::traverse::Traversal;

/// Result of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// The recovered payload bytes.
    pub data: Vec<u8>,
    /// How the payload was framed on the embed side.
    pub framing: Framing,
    /// Detected MIME type (`text/plain` for text frames).
    pub mime: &'static str,
    /// Suggested filename extension, without the dot (`txt` for text frames).
    pub extension: &'static str,
}

/// Embed a payload into carrier image bytes, producing a stego PNG.
///
/// The carrier may be any format the `image` crate decodes; it is normalized
/// to 8-bit RGB first. Output is always PNG — the only format in the stack
/// that preserves LSBs exactly.
///
/// # Errors
/// - [`StegoError::Format`] if the carrier cannot be decoded, has a
///   non-8-bit color mode, or the PNG encoder fails.
/// - [`StegoError::Capacity`] if the framed payload exceeds the slot budget.
pub fn embed(carrier_bytes: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    let grid = carrier::decode_carrier(carrier_bytes)?;
    let stego = embed_into_grid(&grid, payload)?;
    let png = carrier::encode_png(&stego)?;
    debug!(
        "embedded {} payload bytes into {}x{} carrier, {} bytes of PNG out",
        payload.len(),
        grid.width(),
        grid.height(),
        png.len()
    );
    Ok(png)
}

/// Embed a payload into an already-decoded pixel grid.
///
/// The input grid is left untouched; the stego copy is returned. Only the
/// LSBs of traversal slots differ between the two.
pub fn embed_into_grid(grid: &PixelGrid, payload: &[u8]) -> Result<PixelGrid> {
    // 1. Build the payload frame.
    let (frame_bytes, framing) = frame::build_frame(payload);

    // 2. Capacity check before touching any pixels.
    let traversal = Traversal::new(grid.width(), grid.height());
    let needed_bits = padded_frame_bits(frame_bytes.len());
    let available_bits = traversal.slot_count();
    if needed_bits > available_bits {
        return Err(StegoError::Capacity {
            needed_bits,
            available_bits,
        });
    }

    debug!(
        "framing {:?}: {} frame bytes, {needed_bits} of {available_bits} slot bits",
        framing,
        frame_bytes.len()
    );

    // 3. Serialize to bits, zero-padded so whole pixels are consumed.
    let mut bits = bitio::bytes_to_bits(&frame_bytes);
    while bits.len() % 3 != 0 {
        bits.push(0);
    }

    // 4. Write each bit into its slot's LSB.
    let mut stego = grid.clone();
    for (slot, bit) in traversal.slots().zip(bits) {
        let value = stego.channel(slot.x, slot.y, slot.channel);
        stego.set_channel(slot.x, slot.y, slot.channel, (value & 0xFE) | bit);
    }

    Ok(stego)
}

/// Extract a payload from stego image bytes using the default
/// [`SignatureSniffer`].
///
/// # Errors
/// - [`StegoError::Format`] if the image cannot be decoded.
/// - [`StegoError::Decode`] if the LSB stream holds no valid frame
///   (truncated, unknown tag, implausible length, CRC mismatch) — including
///   the case of an image nothing was ever embedded in.
/// - [`StegoError::Encoding`] if a CRC-valid binary frame fails base64.
pub fn extract(stego_bytes: &[u8]) -> Result<Extracted> {
    extract_with_sniffer(stego_bytes, &SignatureSniffer)
}

/// Extract a payload, detecting its type with a caller-supplied sniffer.
pub fn extract_with_sniffer(stego_bytes: &[u8], sniffer: &dyn MimeSniffer) -> Result<Extracted> {
    let grid = carrier::decode_carrier(stego_bytes)?;
    extract_from_grid(&grid, sniffer)
}

/// Extract a payload from an already-decoded pixel grid.
pub fn extract_from_grid(grid: &PixelGrid, sniffer: &dyn MimeSniffer) -> Result<Extracted> {
    // 1. Rebuild the slot sequence for these dimensions.
    let traversal = Traversal::new(grid.width(), grid.height());
    let max_frame_bytes = traversal.slot_count() / 8;

    // 2. Stream slot LSBs through the frame parser.
    let lsb_bits = traversal
        .slots()
        .map(|s| grid.channel(s.x, s.y, s.channel) & 1);
    let mut src = BitSource::new(lsb_bits);
    let parsed = frame::read_frame(&mut src, max_frame_bytes).map_err(|e| {
        debug!("no frame in {}x{} image: {e}", grid.width(), grid.height());
        e
    })?;

    // 3. Suggest a type for the recovered bytes. Text frames are always
    //    plain text; only binary payloads are worth sniffing.
    let (mime, extension) = match parsed.framing {
        Framing::Text => ("text/plain", "txt"),
        Framing::Binary => {
            let mime = sniffer.sniff(&parsed.payload);
            (mime, extension_for(mime))
        }
    };

    debug!(
        "extracted {} bytes ({:?}, {mime})",
        parsed.payload.len(),
        parsed.framing
    );

    Ok(Extracted {
        data: parsed.payload,
        framing: parsed.framing,
        mime,
        extension,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::Channel;

    /// Deterministic non-uniform test grid.
    fn test_grid(width: u32, height: u32) -> PixelGrid {
        let mut grid = PixelGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let base = (x * 31 + y * 17) as u8;
                grid.set_pixel(x, y, [base, base.wrapping_add(85), base.wrapping_add(170)]);
            }
        }
        grid
    }

    #[test]
    fn grid_roundtrip_text() {
        let grid = test_grid(64, 64);
        let stego = embed_into_grid(&grid, b"hello world").unwrap();
        let out = extract_from_grid(&stego, &SignatureSniffer).unwrap();

        assert_eq!(out.data, b"hello world");
        assert_eq!(out.framing, Framing::Text);
        assert_eq!(out.extension, "txt");
        assert_eq!(out.mime, "text/plain");
    }

    #[test]
    fn grid_roundtrip_binary() {
        let grid = test_grid(64, 64);
        let payload = b"PK\x03\x04\x00\xFF\x80zip-ish";
        let stego = embed_into_grid(&grid, payload).unwrap();
        let out = extract_from_grid(&stego, &SignatureSniffer).unwrap();

        assert_eq!(out.data, payload);
        assert_eq!(out.framing, Framing::Binary);
        assert_eq!(out.mime, "application/zip");
        assert_eq!(out.extension, "zip");
    }

    #[test]
    fn input_grid_not_mutated() {
        let grid = test_grid(32, 32);
        let before = grid.clone();
        let _ = embed_into_grid(&grid, b"payload").unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn only_slot_lsbs_change() {
        let grid = test_grid(64, 64);
        let stego = embed_into_grid(&grid, b"hello world").unwrap();

        let a = grid.as_bytes();
        let b = stego.as_bytes();
        assert_eq!(a.len(), b.len());
        for (i, (&x, &y)) in a.iter().zip(b.iter()).enumerate() {
            assert_eq!(x & 0xFE, y & 0xFE, "non-LSB bit changed at byte {i}");
        }
    }

    #[test]
    fn capacity_error_reports_bit_counts() {
        let grid = test_grid(16, 16); // 256 pixels → 54 primes → 162 slots
        let payload = vec![b'x'; 10_000];
        match embed_into_grid(&grid, &payload) {
            Err(StegoError::Capacity {
                needed_bits,
                available_bits,
            }) => {
                assert!(needed_bits > available_bits);
                assert_eq!(available_bits, Traversal::new(16, 16).slot_count());
            }
            other => panic!("expected Capacity error, got {other:?}"),
        }
    }

    #[test]
    fn extract_from_clean_grid_fails() {
        // All-zero LSBs produce tag byte 0x00 — not a valid frame.
        let grid = PixelGrid::new(64, 64);
        let result = extract_from_grid(&grid, &SignatureSniffer);
        assert!(matches!(result, Err(StegoError::Decode(_))));
    }

    #[test]
    fn extract_is_deterministic_on_clean_grid() {
        let grid = test_grid(48, 48);
        let a = extract_from_grid(&grid, &SignatureSniffer);
        let b = extract_from_grid(&grid, &SignatureSniffer);
        // Same image, same failure, every time.
        assert!(matches!(a, Err(StegoError::Decode(_))));
        assert!(matches!(b, Err(StegoError::Decode(_))));
    }

    #[test]
    fn first_embedded_pixel_is_flat_index_two() {
        let grid = test_grid(64, 64);
        let stego = embed_into_grid(&grid, b"x").unwrap();

        // Pixels 0 and 1 (flat indices 0, 1) are never slots.
        assert_eq!(stego.pixel(0, 0), grid.pixel(0, 0));
        assert_eq!(stego.pixel(1, 0), grid.pixel(1, 0));

        // Flat index 2 is the first prime: its R LSB carries the frame's
        // first bit (tag 0x01 → MSB 0).
        assert_eq!(stego.channel(2, 0, Channel::R) & 1, 0);
    }
}
