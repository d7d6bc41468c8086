// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Extract a hidden payload from a stego image.
//!
//! Usage: `extract_file <stego.png> [output-basename]`
//!
//! The output file gets the extension suggested by payload sniffing, e.g.
//! `payload.pdf` or `payload.txt`.

use std::fs;

use pixstash_core::extract;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <stego.png> [output-basename]", args[0]);
        eprintln!("  stego.png: an image produced by embed_file");
        std::process::exit(1);
    }

    let stego_bytes = fs::read(&args[1]).expect("Could not read stego image");
    let out = extract(&stego_bytes).expect("Extraction failed");

    let base = args.get(2).map(String::as_str).unwrap_or("payload");
    let out_path = format!("{}.{}", base, out.extension);
    fs::write(&out_path, &out.data).expect("Could not write payload file");

    println!(
        "extracted {} bytes ({:?} framing, {})",
        out.data.len(),
        out.framing,
        out.mime
    );
    println!("wrote {}", out_path);
}
