// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Carrier image handling: decode, RGB normalization, pixel storage, and
//! lossless PNG output.
//!
//! The stego layer never touches encoded image bytes directly — everything
//! goes through [`PixelGrid`], which this module produces from any supported
//! input format and serializes back to PNG.

pub mod error;
pub mod grid;
pub mod io;

pub use error::CarrierError;
pub use grid::{Channel, PixelGrid};
pub use io::{decode_carrier, encode_png};
