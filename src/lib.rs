// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! # pixstash-core
//!
//! Pure-Rust LSB steganography codec for hiding arbitrary byte payloads in
//! images. Pixels are selected by the prime sequence — the n-th embedding
//! pixel is the one whose flat index is the n-th prime — and each selected
//! pixel carries three bits, one per RGB channel LSB. The payload travels in
//! a self-describing frame (text/binary tag, length prefix, CRC-32), so
//! extraction needs only the stego image itself.
//!
//! Carriers of any color mode the `image` crate decodes are normalized to
//! 8-bit RGB; stego output is always lossless PNG. The codec is synchronous
//! and side-effect-free: no global state, no filesystem access, no threads.
//! Diagnostics go through the `log` facade and surface only in whatever sink
//! the embedding application installs.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use pixstash_core::{embed, extract};
//!
//! let carrier = std::fs::read("photo.png").unwrap();
//! let stego_png = embed(&carrier, b"secret payload").unwrap();
//! let out = extract(&stego_png).unwrap();
//! assert_eq!(out.data, b"secret payload");
//! assert_eq!(out.extension, "txt");
//! ```

pub mod carrier;
pub mod stego;

pub use carrier::{decode_carrier, encode_png, CarrierError, Channel, PixelGrid};
pub use stego::{embed, embed_into_grid, extract, extract_from_grid, extract_with_sniffer};
pub use stego::{binary_capacity, capacity, extension_for};
pub use stego::{Extracted, Framing, MimeSniffer, SignatureSniffer, Slot, StegoError, Traversal};
