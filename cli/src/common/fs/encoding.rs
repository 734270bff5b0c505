//! # Filekit Text Encodings
//!
//! File: cli/src/common/fs/encoding.rs
//!
//! ## Overview
//!
//! Encoding and decoding of whole-file text for the encodings filekit
//! recognizes by name: ASCII, UTF-7, UTF-8, UTF-32 (little endian), UTF-16
//! little endian (named `UNICODE`), and the default encoding (UTF-8 without a
//! byte-order mark).
//!
//! ## Byte-order marks
//!
//! - Writing with an explicit `UTF8`, `UNICODE` or `UTF32` emits the matching
//!   BOM at the start of a file ([`TextEncoding::preamble`]).
//! - Reading looks for a BOM first ([`decode_detecting_bom`]); when one is
//!   present it wins over the requested encoding.
//!
//! Malformed input never fails a read: invalid sequences decode to U+FFFD
//! (or `?` for ASCII).
//!
//! UTF-8 and UTF-16 decoding, and BOM sniffing for them, go through
//! `encoding_rs`. It has no UTF-7 or UTF-32 decoder, so those two codecs live
//! here.
//!
use encoding_rs::{Encoding, UTF_16LE, UTF_8};
use std::fmt;
use tracing::debug;

/// Encodings selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    Ascii,
    Utf7,
    Utf8,
    Utf32,
    /// UTF-16, little endian.
    Unicode,
    /// UTF-8 without a byte-order mark.
    #[default]
    Default,
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF32LE_BOM: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];

impl TextEncoding {
    /// Resolves an encoding name, case-insensitively.
    ///
    /// Hyphens and underscores are ignored (`utf-8` == `UTF8`). Unrecognized
    /// names, including the empty string, fall back to [`TextEncoding::Default`].
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "ASCII" | "USASCII" => TextEncoding::Ascii,
            "UTF7" => TextEncoding::Utf7,
            "UTF8" => TextEncoding::Utf8,
            "UTF32" | "UTF32LE" => TextEncoding::Utf32,
            "UNICODE" | "UTF16" | "UTF16LE" => TextEncoding::Unicode,
            _ => TextEncoding::Default,
        }
    }

    /// Canonical upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Ascii => "ASCII",
            TextEncoding::Utf7 => "UTF7",
            TextEncoding::Utf8 => "UTF8",
            TextEncoding::Utf32 => "UTF32",
            TextEncoding::Unicode => "UNICODE",
            TextEncoding::Default => "DEFAULT",
        }
    }

    /// Byte-order mark written at the start of a file.
    pub fn preamble(&self) -> &'static [u8] {
        match self {
            TextEncoding::Utf8 => UTF8_BOM,
            TextEncoding::Unicode => UTF16LE_BOM,
            TextEncoding::Utf32 => UTF32LE_BOM,
            TextEncoding::Ascii | TextEncoding::Utf7 | TextEncoding::Default => &[],
        }
    }

    /// Encodes `text` without a preamble.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            TextEncoding::Utf7 => utf7::encode(text),
            TextEncoding::Utf8 | TextEncoding::Default => text.as_bytes().to_vec(),
            TextEncoding::Utf32 => text
                .chars()
                .flat_map(|c| (c as u32).to_le_bytes())
                .collect(),
            TextEncoding::Unicode => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }

    /// Decodes `bytes` in this encoding, ignoring any byte-order mark.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { b as char } else { '?' })
                .collect(),
            TextEncoding::Utf7 => utf7::decode(bytes),
            TextEncoding::Utf8 | TextEncoding::Default => decode_with(UTF_8, bytes),
            TextEncoding::Utf32 => decode_utf32le(bytes),
            TextEncoding::Unicode => decode_with(UTF_16LE, bytes),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes `bytes`, letting a leading byte-order mark override `requested`.
///
/// UTF-32LE is checked first: its mark starts with the UTF-16LE one.
pub fn decode_detecting_bom(bytes: &[u8], requested: TextEncoding) -> String {
    if let Some(rest) = bytes.strip_prefix(UTF32LE_BOM) {
        return decode_utf32le(rest);
    }
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_with(encoding, &bytes[bom_len..]);
    }
    requested.decode(bytes)
}

/// Lossy decode with no BOM sniffing of its own.
fn decode_with(encoding: &'static Encoding, bytes: &[u8]) -> String {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        debug!("Replaced malformed {} sequences with U+FFFD", encoding.name());
    }
    text.into_owned()
}

fn decode_utf32le(bytes: &[u8]) -> String {
    let chunks = bytes.chunks_exact(4);
    let dangling = !chunks.remainder().is_empty();
    let mut out: String = chunks
        .map(|quad| {
            let scalar = u32::from_le_bytes([quad[0], quad[1], quad[2], quad[3]]);
            char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect();
    if dangling {
        out.push(char::REPLACEMENT_CHARACTER);
    }
    out
}

/// UTF-7 (RFC 2152). Optional direct characters are always base64-encoded.
mod utf7 {
    const ALPHABET: &[u8; 64] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    fn is_direct(c: char) -> bool {
        c.is_ascii_alphanumeric() || "'(),-./:? \t\r\n".contains(c)
    }

    fn base64_value(b: u8) -> Option<u32> {
        ALPHABET.iter().position(|&a| a == b).map(|p| p as u32)
    }

    pub(super) fn encode(text: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len());
        let mut pending: Vec<u16> = Vec::new();
        for c in text.chars() {
            if is_direct(c) || c == '+' {
                flush(&mut pending, &mut out);
                if c == '+' {
                    out.extend_from_slice(b"+-");
                } else {
                    out.push(c as u8);
                }
            } else {
                let mut buf = [0u16; 2];
                pending.extend_from_slice(c.encode_utf16(&mut buf));
            }
        }
        flush(&mut pending, &mut out);
        out
    }

    /// Writes `+<base64 of UTF-16BE units>-` and clears `pending`.
    fn flush(pending: &mut Vec<u16>, out: &mut Vec<u8>) {
        if pending.is_empty() {
            return;
        }
        out.push(b'+');
        let mut bits: u32 = 0;
        let mut nbits = 0;
        for unit in pending.drain(..) {
            bits = (bits << 16) | unit as u32;
            nbits += 16;
            while nbits >= 6 {
                nbits -= 6;
                out.push(ALPHABET[((bits >> nbits) & 0x3F) as usize]);
            }
            bits &= (1 << nbits) - 1;
        }
        if nbits > 0 {
            out.push(ALPHABET[((bits << (6 - nbits)) & 0x3F) as usize]);
        }
        out.push(b'-');
    }

    pub(super) fn decode(bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b != b'+' {
                out.push(if b.is_ascii() {
                    b as char
                } else {
                    char::REPLACEMENT_CHARACTER
                });
                i += 1;
                continue;
            }
            i += 1;
            if bytes.get(i) == Some(&b'-') {
                out.push('+');
                i += 1;
                continue;
            }
            let mut units: Vec<u16> = Vec::new();
            let mut bits: u32 = 0;
            let mut nbits = 0;
            while let Some(value) = bytes.get(i).and_then(|&b| base64_value(b)) {
                bits = (bits << 6) | value;
                nbits += 6;
                if nbits >= 16 {
                    nbits -= 16;
                    units.push(((bits >> nbits) & 0xFFFF) as u16);
                }
                bits &= (1 << nbits) - 1;
                i += 1;
            }
            out.extend(
                char::decode_utf16(units).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
            );
            // A '-' terminating a base64 run is absorbed.
            if bytes.get(i) == Some(&b'-') {
                i += 1;
            }
        }
        out
    }
}
