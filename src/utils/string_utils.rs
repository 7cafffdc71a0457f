//! String utility functions
//!
//! Utilities for converting between text and the single-byte encoding
//! used for rewritten records.

/// Whether an encoding label names ISO-8859-1
pub fn is_latin1_label(label: &str) -> bool {
    matches!(
        label.trim().to_ascii_lowercase().as_str(),
        "iso-8859-1" | "iso8859-1" | "iso_8859-1" | "latin1" | "latin-1" | "l1"
    )
}

/// Decode every byte as the code point of the same value
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Decode file content using the encoding its declaration names
///
/// ISO-8859-1 declarations are honoured even when the bytes are valid
/// UTF-8. Anything else is read as UTF-8, falling back to ISO-8859-1.
pub fn decode_text(bytes: &[u8], declared_encoding: Option<&str>) -> String {
    if declared_encoding.map_or(false, is_latin1_label) {
        return decode_latin1(bytes);
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => decode_latin1(bytes),
    }
}

/// Encode text as ISO-8859-1
///
/// Characters above U+00FF are written as `&#N;` references.
pub fn encode_latin1(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let code = ch as u32;
        if code <= 0xFF {
            out.push(code as u8);
        } else {
            out.extend_from_slice(format!("&#{};", code).as_bytes());
        }
    }
    out
}
