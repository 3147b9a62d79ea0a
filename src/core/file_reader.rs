//! File reading with encoding fallback
//!
//! Files are read whole. Valid UTF-8 is kept as is; anything else is decoded
//! as Latin-1, which assigns a character to every byte value and so never
//! fails. Only I/O errors are reported to the caller.

use std::fs;
use std::io;
use std::path::Path;

use crate::core::model::TextEncoding;

/// Text decoded from a file together with the encoding that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: TextEncoding,
}

/// Read a file as text, trying UTF-8 first and Latin-1 second
pub fn read_file_text(path: &Path) -> io::Result<DecodedText> {
    let bytes = fs::read(path)?;
    Ok(decode_bytes(bytes))
}

/// Decode raw bytes, falling back to Latin-1 on invalid UTF-8
pub fn decode_bytes(bytes: Vec<u8>) -> DecodedText {
    match String::from_utf8(bytes) {
        Ok(text) => DecodedText {
            text,
            encoding: TextEncoding::Utf8,
        },
        Err(e) => DecodedText {
            text: decode_latin1(e.as_bytes()),
            encoding: TextEncoding::Latin1,
        },
    }
}

/// ISO-8859-1 decoding: byte N becomes U+00NN
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
