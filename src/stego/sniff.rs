// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixstash

//! MIME sniffing for extracted payloads.
//!
//! An extracted payload is just bytes; the only hint about what kind of file
//! it was comes from the bytes themselves. [`MimeSniffer`] is the detection
//! seam: extraction accepts any implementation, and [`SignatureSniffer`] — a
//! plain magic-number matcher — ships as the default. [`extension_for`] then
//! maps the detected MIME type to a filename extension, falling back to
//! `bin` for anything unrecognized.
//!
//! Only binary payloads get sniffed; text payloads always suggest `txt`.

/// MIME type reported when no signature matches.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Detects the MIME type of a payload from its bytes.
pub trait MimeSniffer {
    /// Return the MIME type of `data`, or [`OCTET_STREAM`] if unknown.
    fn sniff(&self, data: &[u8]) -> &'static str;
}

/// Default sniffer: matches well-known magic-number prefixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureSniffer;

/// Magic-number prefixes, checked in order (first match wins). The generic
/// `MZ` executable prefix comes last so longer signatures take priority.
const SIGNATURES: &[(&[u8], &str)] = &[
    (b"%PDF", "application/pdf"),
    (b"\xFF\xD8\xFF", "image/jpeg"),
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"PK\x03\x04", "application/zip"),
    (b"Rar!\x1a\x07", "application/x-rar-compressed"),
    (b"7z\xBC\xAF\x27\x1C", "application/x-7z-compressed"),
    (b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1", "application/msword"),
    (b"<!DOCTYPE html", "text/html"),
    (b"<html", "text/html"),
    (b"MZ", "application/x-dosexec"),
];

impl MimeSniffer for SignatureSniffer {
    fn sniff(&self, data: &[u8]) -> &'static str {
        for (signature, mime) in SIGNATURES {
            if data.starts_with(signature) {
                return mime;
            }
        }
        OCTET_STREAM
    }
}

/// MIME type → filename extension (no leading dot).
const MIME_EXTENSIONS: &[(&str, &str)] = &[
    ("application/pdf", "pdf"),
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("application/msword", "doc"),
    ("application/vnd.openxmlformats-officedocument.wordprocessingml.document", "docx"),
    ("application/vnd.ms-excel", "xls"),
    ("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", "xlsx"),
    ("application/zip", "zip"),
    ("application/x-rar-compressed", "rar"),
    ("application/x-7z-compressed", "7z"),
    ("text/plain", "txt"),
    ("text/html", "html"),
    ("application/json", "json"),
    ("application/xml", "xml"),
    ("application/x-msdownload", "exe"),
    ("application/x-dosexec", "exe"),
    ("application/octet-stream", "bin"),
];

/// Map a MIME type to a filename extension. Unknown types map to `bin`.
pub fn extension_for(mime: &str) -> &'static str {
    MIME_EXTENSIONS
        .iter()
        .find(|(m, _)| *m == mime)
        .map(|(_, ext)| *ext)
        .unwrap_or("bin")
}
