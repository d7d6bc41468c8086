// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Carrier decode, normalization, and PNG re-encode.
//!
//! Decoding accepts every format the `image` crate recognizes (PNG, JPEG,
//! GIF, BMP, TIFF, WebP, ...) and normalizes the result to an 8-bit RGB
//! [`PixelGrid`]: grayscale is replicated across channels, alpha is dropped.
//! 16-bit and floating-point color modes are rejected instead of silently
//! quantized — LSB semantics are defined on 8-bit channels only.
//!
//! Stego output is always PNG. Any lossy output format would destroy the
//! embedded LSBs on the first save.

use std::io::Cursor;

use image::DynamicImage;

use crate::carrier::error::{CarrierError, Result};
use crate::carrier::grid::PixelGrid;

/// Decode carrier bytes and normalize to an 8-bit RGB grid.
///
/// # Errors
/// - [`CarrierError::Decode`] if the bytes are not a supported image format.
/// - [`CarrierError::UnsupportedColorMode`] for 16-bit or floating-point
///   color modes.
pub fn decode_carrier(bytes: &[u8]) -> Result<PixelGrid> {
    let img = image::load_from_memory(bytes).map_err(CarrierError::Decode)?;

    let rgb = match img {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => img.to_rgb8(),
        DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgba16(_) => {
            return Err(CarrierError::UnsupportedColorMode("16-bit"));
        }
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            return Err(CarrierError::UnsupportedColorMode("floating-point"));
        }
        _ => return Err(CarrierError::UnsupportedColorMode("unrecognized")),
    };

    let (width, height) = rgb.dimensions();
    let grid = PixelGrid::from_raw(width, height, rgb.into_raw())
        .expect("RgbImage buffer length matches its dimensions");
    Ok(grid)
}

/// Encode a pixel grid as a lossless PNG.
///
/// # Errors
/// Returns [`CarrierError::Encode`] if the PNG encoder fails.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>> {
    let img = image::RgbImage::from_raw(grid.width(), grid.height(), grid.as_bytes().to_vec())
        .expect("PixelGrid buffer length matches its dimensions");

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageOutputFormat::Png)
        .map_err(CarrierError::Encode)?;
    Ok(out.into_inner())
}
