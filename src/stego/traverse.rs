// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Embedding slot selection.
//!
//! Both embed and extract must walk the carrier's pixels in exactly the same
//! order. The walk is driven by the prime sequence: the n-th touched pixel is
//! the one whose flat index (`y * width + x`) equals the n-th prime, and each
//! touched pixel contributes three slots, one per channel in R, G, B order.
//!
//! The sequence depends only on the carrier dimensions — no key, no state.
//! [`Traversal::slots`] returns a fresh lazy iterator each call; it ends at
//! the first prime that falls outside the pixel grid, so a consumer that
//! needs more slots than the carrier has sees the iterator run dry instead
//! of spinning forever.

use crate::carrier::Channel;
use crate::stego::sieve::{count_primes_below, Primes};

/// One embeddable LSB position: a pixel and one of its color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub x: u32,
    pub y: u32,
    pub channel: Channel,
}

/// Slot-sequence factory for one carrier size.
#[derive(Debug, Clone, Copy)]
pub struct Traversal {
    width: u32,
    height: u32,
}

impl Traversal {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels (`width * height`).
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// The slot sequence for this carrier size.
    ///
    /// Yields three slots (R, G, B) for every prime `p < width * height`, in
    /// ascending prime order, with the pixel at `(p % width, p / width)`.
    /// Each call returns an independent iterator producing the identical
    /// sequence.
    pub fn slots(&self) -> impl Iterator<Item = Slot> {
        let width = self.width as u64;
        let pixel_count = self.pixel_count();
        Primes::new()
            .take_while(move |&p| p < pixel_count)
            .flat_map(move |p| {
                let x = (p % width) as u32;
                let y = (p / width) as u32;
                Channel::ALL
                    .into_iter()
                    .map(move |channel| Slot { x, y, channel })
            })
    }

    /// Exact length of the sequence [`slots`](Self::slots) produces, without
    /// consuming one: `3 × π(width × height)`.
    pub fn slot_count(&self) -> u64 {
        3 * count_primes_below(self.pixel_count())
    }
}
