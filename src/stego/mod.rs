// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Steganographic embedding and extraction.
//!
//! The codec hides a byte payload in the least significant bits of RGB
//! channels, at pixels selected by the prime sequence (pixel `n` is used iff
//! its flat index is prime). The payload travels in a self-describing frame:
//! a text/binary tag, a length prefix, the framed bytes (base64 for binary),
//! and a CRC-32 trailer. Extraction needs nothing but the stego image — the
//! slot sequence is fully determined by the image dimensions.
//!
//! Layering, bottom to top:
//! - [`sieve`] / [`traverse`]: the prime-driven slot sequence
//! - [`bitio`]: MSB-first bit packing and the exhaustion-safe bit reader
//! - [`frame`]: payload classification and frame build/parse
//! - [`sniff`]: MIME detection for extracted payloads
//! - [`capacity`]: exact slot-budget arithmetic
//! - `pipeline`: the [`embed`] / [`extract`] facade

pub mod bitio;
pub mod capacity;
pub mod error;
pub mod frame;
mod pipeline;
pub mod sieve;
pub mod sniff;
pub mod traverse;

pub use capacity::{binary_capacity, capacity};
pub use error::StegoError;
pub use frame::Framing;
pub use pipeline::{
    embed, embed_into_grid, extract, extract_from_grid, extract_with_sniffer, Extracted,
};
pub use sniff::{extension_for, MimeSniffer, SignatureSniffer};
pub use traverse::{Slot, Traversal};
