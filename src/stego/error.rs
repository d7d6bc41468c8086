// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from carrier decoding through
//! frame extraction.

use core::fmt;

use crate::carrier::CarrierError;

/// Errors that can occur during steganographic embedding or extraction.
#[derive(Debug)]
pub enum StegoError {
    /// The carrier image could not be decoded or re-encoded.
    Format(CarrierError),
    /// The payload frame does not fit into the carrier's embedding slots.
    Capacity {
        /// Bits the frame needs (including pixel padding).
        needed_bits: u64,
        /// Bits the carrier provides.
        available_bits: u64,
    },
    /// The extracted bit stream is not a valid payload frame (truncated,
    /// unknown framing tag, implausible length, or CRC mismatch).
    Decode(&'static str),
    /// A CRC-valid BINARY frame failed base64 decoding.
    Encoding(&'static str),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(e) => write!(f, "invalid carrier image: {e}"),
            Self::Capacity {
                needed_bits,
                available_bits,
            } => write!(
                f,
                "payload needs {needed_bits} bits but the carrier has {available_bits}"
            ),
            Self::Decode(msg) => write!(f, "no valid payload frame: {msg}"),
            Self::Encoding(msg) => write!(f, "payload transfer encoding invalid: {msg}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CarrierError> for StegoError {
    fn from(e: CarrierError) -> Self {
        Self::Format(e)
    }
}

pub type Result<T> = std::result::Result<T, StegoError>;
