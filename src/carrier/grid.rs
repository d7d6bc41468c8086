// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Pixel storage for normalized carrier images.
//!
//! Provides [`PixelGrid`] for storing an 8-bit RGB raster in row-major order,
//! and [`Channel`] for addressing one of the three color channels of a pixel.
//! Every carrier image is normalized into this representation before any
//! embedding or extraction happens, so the LSB code never has to care about
//! the source format's color mode.

/// One of the three color channels of an RGB pixel.
///
/// The discriminant doubles as the byte offset within a pixel's 3-byte slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    R = 0,
    G = 1,
    B = 2,
}

impl Channel {
    /// All channels in embedding order.
    pub const ALL: [Channel; 3] = [Channel::R, Channel::G, Channel::B];

    /// Byte offset of this channel within a pixel (0, 1, or 2).
    pub fn offset(self) -> usize {
        self as usize
    }
}

/// Normalized carrier raster: 8-bit RGB, row-major, 3 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Flat storage: `height * width * 3` bytes, R G B per pixel.
    data: Vec<u8>,
}

impl PixelGrid {
    /// Create a new grid initialized to black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 3],
        }
    }

    /// Wrap an existing RGB byte buffer.
    ///
    /// Returns `None` if `data.len() != width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 3 {
            return None;
        }
        Some(Self { width, height, data })
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

    /// Get the RGB values of the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Set the RGB values of the pixel at (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = self.index(x, y);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Get a single channel value of the pixel at (x, y).
    pub fn channel(&self, x: u32, y: u32, ch: Channel) -> u8 {
        self.data[self.index(x, y) + ch.offset()]
    }

    /// Set a single channel value of the pixel at (x, y).
    pub fn set_channel(&mut self, x: u32, y: u32, ch: Channel, val: u8) {
        let i = self.index(x, y) + ch.offset();
        self.data[i] = val;
    }

    /// Raw read-only access to the RGB bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the grid and return the RGB bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width, "x {x} >= width {}", self.width);
        debug_assert!(y < self.height, "y {y} >= height {}", self.height);
        (y as usize * self.width as usize + x as usize) * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_get_set() {
        let mut grid = PixelGrid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.pixel_count(), 12);

        // All initialized to black
        assert_eq!(grid.pixel(0, 0), [0, 0, 0]);
        assert_eq!(grid.pixel(3, 2), [0, 0, 0]);

        grid.set_pixel(2, 1, [10, 20, 30]);
        assert_eq!(grid.pixel(2, 1), [10, 20, 30]);

        // Other pixels unchanged
        assert_eq!(grid.pixel(1, 1), [0, 0, 0]);
        assert_eq!(grid.pixel(2, 2), [0, 0, 0]);
    }

    #[test]
    fn channel_access() {
        let mut grid = PixelGrid::new(2, 2);
        grid.set_channel(1, 0, Channel::G, 200);
        assert_eq!(grid.channel(1, 0, Channel::G), 200);
        assert_eq!(grid.channel(1, 0, Channel::R), 0);
        assert_eq!(grid.channel(1, 0, Channel::B), 0);
        assert_eq!(grid.pixel(1, 0), [0, 200, 0]);
    }

    #[test]
    fn channel_offsets() {
        assert_eq!(Channel::R.offset(), 0);
        assert_eq!(Channel::G.offset(), 1);
        assert_eq!(Channel::B.offset(), 2);
        assert_eq!(Channel::ALL, [Channel::R, Channel::G, Channel::B]);
    }

    #[test]
    fn from_raw_length_checked() {
        assert!(PixelGrid::from_raw(2, 2, vec![0u8; 12]).is_some());
        assert!(PixelGrid::from_raw(2, 2, vec![0u8; 11]).is_none());
        assert!(PixelGrid::from_raw(2, 2, vec![0u8; 13]).is_none());
    }

    #[test]
    fn row_major_layout() {
        let mut grid = PixelGrid::new(3, 2);
        grid.set_pixel(0, 0, [1, 2, 3]);
        grid.set_pixel(1, 0, [4, 5, 6]);
        grid.set_pixel(0, 1, [7, 8, 9]);
        let bytes = grid.as_bytes();
        assert_eq!(&bytes[0..6], &[1, 2, 3, 4, 5, 6]);
        assert_eq!(&bytes[9..12], &[7, 8, 9]);
    }
}
