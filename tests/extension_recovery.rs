// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! Payload type detection across the full embed/extract cycle: framing
//! classification, MIME sniffing, and extension suggestion.

use pixstash_core::{
    embed, embed_into_grid, encode_png, extract, extract_from_grid, extract_with_sniffer, Framing,
    MimeSniffer, PixelGrid, SignatureSniffer,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn noise_grid(width: u32, height: u32, seed: u8) -> PixelGrid {
    let mut rng = ChaCha20Rng::from_seed([seed; 32]);
    let mut grid = PixelGrid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            grid.set_pixel(x, y, [rng.gen(), rng.gen(), rng.gen()]);
        }
    }
    grid
}

fn noise_png(width: u32, height: u32, seed: u8) -> Vec<u8> {
    encode_png(&noise_grid(width, height, seed)).unwrap()
}

/// Embed, extract, and return the recovered type info.
fn roundtrip_type(payload: &[u8], seed: u8) -> (Framing, &'static str, &'static str) {
    let carrier = noise_png(64, 64, seed);
    let stego = embed(&carrier, payload).unwrap();
    let out = extract(&stego).unwrap();
    assert_eq!(out.data, payload);
    (out.framing, out.mime, out.extension)
}

#[test]
fn zip_payload_recovers_zip_extension() {
    // Local file header magic plus a high byte so the frame goes binary.
    let mut payload = b"PK\x03\x04\x14\x00\x00\x00".to_vec();
    payload.extend([0x80, 0xDE, 0xAD, 0xBE, 0xEF]);

    let (framing, mime, ext) = roundtrip_type(&payload, 20);
    assert_eq!(framing, Framing::Binary);
    assert_eq!(mime, "application/zip");
    assert_eq!(ext, "zip");
}

#[test]
fn pdf_payload_recovers_pdf_extension() {
    // Real PDFs carry a binary comment line right after the header for the
    // same reason this test needs one: to force binary transfer handling.
    let mut payload = b"%PDF-1.4\n%".to_vec();
    payload.extend([0xE2, 0xE3, 0xCF, 0xD3, b'\n']);
    payload.extend_from_slice(b"1 0 obj\n<< >>\nendobj\n");

    let (framing, mime, ext) = roundtrip_type(&payload, 21);
    assert_eq!(framing, Framing::Binary);
    assert_eq!(mime, "application/pdf");
    assert_eq!(ext, "pdf");
}

#[test]
fn png_payload_recovers_png_extension() {
    // A PNG inside a PNG. The signature's leading 0x89 classifies it binary
    // on its own.
    let payload = noise_png(4, 4, 22);

    let carrier = noise_png(64, 64, 23);
    let stego = embed(&carrier, &payload).unwrap();
    let out = extract(&stego).unwrap();

    assert_eq!(out.data, payload);
    assert_eq!(out.framing, Framing::Binary);
    assert_eq!(out.mime, "image/png");
    assert_eq!(out.extension, "png");
}

#[test]
fn jpeg_payload_recovers_jpg_extension() {
    let payload = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
    let (framing, mime, ext) = roundtrip_type(&payload, 24);
    assert_eq!(framing, Framing::Binary);
    assert_eq!(mime, "image/jpeg");
    assert_eq!(ext, "jpg");
}

#[test]
fn unknown_binary_defaults_to_bin() {
    let payload = [0x00, 0x80, 0x99, 0x42, 0x13, 0x37];
    let (framing, mime, ext) = roundtrip_type(&payload, 25);
    assert_eq!(framing, Framing::Binary);
    assert_eq!(mime, "application/octet-stream");
    assert_eq!(ext, "bin");
}

#[test]
fn text_payload_suggests_txt() {
    let (framing, mime, ext) = roundtrip_type(b"plain old notes\nline two\n", 26);
    assert_eq!(framing, Framing::Text);
    assert_eq!(mime, "text/plain");
    assert_eq!(ext, "txt");
}

#[test]
fn classification_window_is_first_1024_bytes() {
    let grid = noise_grid(256, 256, 27);

    // High byte at index 1023: the last byte the classifier looks at.
    let mut inside = vec![b'a'; 1023];
    inside.push(0xFF);
    let stego = embed_into_grid(&grid, &inside).unwrap();
    let out = extract_from_grid(&stego, &SignatureSniffer).unwrap();
    assert_eq!(out.framing, Framing::Binary);
    assert_eq!(out.data, inside);

    // High byte at index 1024: one past the window, invisible to the
    // classifier. The raw text frame still carries it back intact.
    let mut outside = vec![b'a'; 1024];
    outside.push(0xFF);
    let stego = embed_into_grid(&grid, &outside).unwrap();
    let out = extract_from_grid(&stego, &SignatureSniffer).unwrap();
    assert_eq!(out.framing, Framing::Text);
    assert_eq!(out.data, outside);
}

/// Sniffer that ignores the bytes entirely.
struct AlwaysJson;

impl MimeSniffer for AlwaysJson {
    fn sniff(&self, _data: &[u8]) -> &'static str {
        "application/json"
    }
}

#[test]
fn custom_sniffer_is_used_for_binary_frames() {
    let carrier = noise_png(64, 64, 28);
    let payload = [0x80, 0x01, 0x02, 0x03];
    let stego = embed(&carrier, &payload).unwrap();

    let out = extract_with_sniffer(&stego, &AlwaysJson).unwrap();
    assert_eq!(out.mime, "application/json");
    assert_eq!(out.extension, "json");

    // The default sniffer finds no signature in the same bytes.
    let out = extract(&stego).unwrap();
    assert_eq!(out.extension, "bin");
}

#[test]
fn text_frames_never_consult_the_sniffer() {
    let carrier = noise_png(64, 64, 29);
    let stego = embed(&carrier, b"just text").unwrap();

    let out = extract_with_sniffer(&stego, &AlwaysJson).unwrap();
    assert_eq!(out.framing, Framing::Text);
    assert_eq!(out.mime, "text/plain");
    assert_eq!(out.extension, "txt");
}
