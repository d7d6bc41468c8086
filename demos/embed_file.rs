// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Embed a payload file into a carrier image.
//!
//! Usage: `embed_file <carrier-image> <payload-file> [output.png]`
//!
//! RUST_LOG=debug surfaces the pipeline's diagnostics.

use std::fs;

use pixstash_core::{binary_capacity, capacity, decode_carrier, embed_into_grid, encode_png};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <carrier-image> <payload-file> [output.png]", args[0]);
        eprintln!("  carrier-image: any PNG/JPEG/BMP/GIF image to hide the payload in");
        eprintln!("  payload-file:  the file to hide");
        std::process::exit(1);
    }

    let carrier_bytes = fs::read(&args[1]).expect("Could not read carrier image");
    let payload = fs::read(&args[2]).expect("Could not read payload file");
    let out_path = args.get(3).cloned().unwrap_or_else(|| "stego.png".to_string());

    let grid = decode_carrier(&carrier_bytes).expect("Could not decode carrier image");
    println!(
        "carrier: {}x{} px, holds up to {} text bytes or {} binary bytes",
        grid.width(),
        grid.height(),
        capacity(grid.width(), grid.height()),
        binary_capacity(grid.width(), grid.height()),
    );
    println!("payload: {} bytes", payload.len());

    let stego = embed_into_grid(&grid, &payload).expect("Embedding failed");
    let png = encode_png(&stego).expect("PNG encoding failed");
    fs::write(&out_path, &png).expect("Could not write stego image");

    println!("wrote {} ({} bytes)", out_path, png.len());
}
