// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Bit-level plumbing between frame bytes and channel LSBs.
//!
//! Bytes are serialized MSB-first: byte `0xA5` becomes the bit sequence
//! `1 0 1 0 0 1 0 1`. [`BitSource`] is the reading side — it reassembles
//! bytes from a stream of extracted LSBs and turns stream exhaustion into a
//! hard decode error, so a truncated or never-embedded carrier can never
//! make extraction loop forever.

use crate::stego::error::{Result, StegoError};

/// Convert bytes to a bit vector (MSB first within each byte).
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
/// Pads the last byte with zero bits if `bits.len()` is not a multiple of 8.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity((bits.len() + 7) / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    bytes
}

/// Byte assembler over a stream of bits (values 0/1), MSB first.
///
/// Running out of bits mid-byte is a [`StegoError::Decode`], never a hang.
pub struct BitSource<I> {
    bits: I,
}

impl<I: Iterator<Item = u8>> BitSource<I> {
    pub fn new(bits: I) -> Self {
        Self { bits }
    }

    /// Assemble the next byte from eight bits.
    pub fn read_byte(&mut self) -> Result<u8> {
        let mut byte = 0u8;
        for _ in 0..8 {
            let bit = self
                .bits
                .next()
                .ok_or(StegoError::Decode("bit stream exhausted"))?;
            byte = (byte << 1) | (bit & 1);
        }
        Ok(byte)
    }

    /// Assemble the next `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.read_byte()?);
        }
        Ok(out)
    }
}
