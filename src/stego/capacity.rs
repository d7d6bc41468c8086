// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Embedding capacity math.
//!
//! A carrier of `w × h` pixels offers `3 × π(w·h)` LSB slots (three channels
//! for every prime-indexed pixel). A frame of `F` bytes needs `8·F` bits,
//! padded up to a multiple of 3 so whole pixels are consumed; because the
//! slot budget is itself a multiple of 3, the fit condition reduces to
//! `8·F <= slots`. Capacity figures here are exact, not estimates — the
//! traversal is fully determined by the dimensions.

use crate::stego::frame::FRAME_OVERHEAD;
use crate::stego::traverse::Traversal;

/// Bits a frame of `frame_len` bytes occupies in the carrier, including the
/// zero-padding that aligns the stream to whole pixels.
pub fn padded_frame_bits(frame_len: usize) -> u64 {
    let bits = frame_len as u64 * 8;
    bits + (3 - bits % 3) % 3
}

/// Maximum framed-payload size (in bytes) for a carrier of the given size.
///
/// "Framed" means after the text/binary transformation: a text payload of
/// exactly this many bytes embeds, and one byte more is rejected. Binary
/// payloads expand under base64 first — see [`binary_capacity`].
///
/// Returns 0 when not even the 9-byte frame overhead fits.
pub fn capacity(width: u32, height: u32) -> u64 {
    let max_frame_bytes = Traversal::new(width, height).slot_count() / 8;
    if max_frame_bytes <= FRAME_OVERHEAD as u64 {
        return 0;
    }
    max_frame_bytes - FRAME_OVERHEAD as u64
}

/// Maximum raw binary payload size (in bytes) for a carrier of the given
/// size, accounting for base64 expansion (every 3 raw bytes become 4 framed
/// bytes, with padding).
pub fn binary_capacity(width: u32, height: u32) -> u64 {
    3 * (capacity(width, height) / 4)
}
