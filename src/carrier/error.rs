// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Error types for carrier image decoding and encoding.

use std::fmt;

/// Errors that can occur while decoding, normalizing, or re-encoding a
/// carrier image.
#[derive(Debug)]
pub enum CarrierError {
    /// The input bytes could not be decoded as any supported image format.
    Decode(image::ImageError),
    /// The decoded image has a color mode without 8-bit channels
    /// (16-bit or floating-point samples). LSB semantics are defined on
    /// 8-bit channels only.
    UnsupportedColorMode(&'static str),
    /// PNG re-encoding of the stego pixel grid failed.
    Encode(image::ImageError),
}

impl fmt::Display for CarrierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "carrier decode failed: {e}"),
            Self::UnsupportedColorMode(mode) => {
                write!(f, "unsupported carrier color mode: {mode} (8-bit channels required)")
            }
            Self::Encode(e) => write!(f, "PNG encode failed: {e}"),
        }
    }
}

impl std::error::Error for CarrierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) | Self::Encode(e) => Some(e),
            Self::UnsupportedColorMode(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CarrierError>;
