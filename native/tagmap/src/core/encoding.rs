//! Text Encoding Detection and Decoding
//!
//! Documents arrive from the BEAM as raw binaries. UTF-8 input is borrowed
//! as-is (minus a BOM); UTF-16 input is detected by BOM or by the `<`/NUL
//! pattern of its first code unit and transcoded to an owned UTF-8 string.

use std::borrow::Cow;

use crate::error::{ErrorKind, Result, StructuralError};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Encoding of a raw document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    /// Detect encoding from byte order mark or initial bytes
    pub fn detect(input: &[u8]) -> Self {
        match input {
            [0xFF, 0xFE, ..] => TextEncoding::Utf16Le,
            [0xFE, 0xFF, ..] => TextEncoding::Utf16Be,
            [0x00, b'<', ..] => TextEncoding::Utf16Be,
            [b'<', 0x00, ..] => TextEncoding::Utf16Le,
            _ => TextEncoding::Utf8,
        }
    }
}

/// Decode raw document bytes into text
pub fn decode_text(input: &[u8]) -> Result<Cow<'_, str>> {
    match TextEncoding::detect(input) {
        TextEncoding::Utf8 => {
            let bytes = input.strip_prefix(&UTF8_BOM[..]).unwrap_or(input);
            std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|e| StructuralError::new(ErrorKind::InvalidEncoding, e.valid_up_to()))
        }
        TextEncoding::Utf16Le => {
            let bytes = input.strip_prefix(&UTF16_LE_BOM[..]).unwrap_or(input);
            decode_utf16(bytes, u16::from_le_bytes).map(Cow::Owned)
        }
        TextEncoding::Utf16Be => {
            let bytes = input.strip_prefix(&UTF16_BE_BOM[..]).unwrap_or(input);
            decode_utf16(bytes, u16::from_be_bytes).map(Cow::Owned)
        }
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(StructuralError::new(ErrorKind::InvalidEncoding, bytes.len() - 1));
    }

    let code_units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|chunk| unit([chunk[0], chunk[1]]))
        .collect();

    String::from_utf16(&code_units).map_err(|_| StructuralError::new(ErrorKind::InvalidEncoding, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16_le(text: &str) -> Vec<u8> {
        let mut out = UTF16_LE_BOM.to_vec();
        for unit in text.encode_utf16() {
            out.extend_from_slice(&unit.to_le_bytes());
        }
        out
    }

    #[test]
    fn test_detect() {
        assert_eq!(TextEncoding::detect(b"<a>1</a>"), TextEncoding::Utf8);
        assert_eq!(TextEncoding::detect(&[0xFF, 0xFE, b'<', 0x00]), TextEncoding::Utf16Le);
        assert_eq!(TextEncoding::detect(&[0x00, b'<', 0x00, b'a']), TextEncoding::Utf16Be);
    }

    #[test]
    fn test_utf8_is_borrowed() {
        let decoded = decode_text(b"<key>value</key>").unwrap();
        assert!(matches!(decoded, Cow::Borrowed("<key>value</key>")));
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let mut input = UTF8_BOM.to_vec();
        input.extend_from_slice(b"<k>v</k>");
        assert_eq!(decode_text(&input).unwrap(), "<k>v</k>");
    }

    #[test]
    fn test_utf16_le_decoded() {
        let input = utf16_le("<k>h\u{e9}llo</k>");
        assert_eq!(decode_text(&input).unwrap(), "<k>h\u{e9}llo</k>");
    }

    #[test]
    fn test_utf16_be_without_bom() {
        let input: Vec<u8> = "<k>v</k>".encode_utf16().flat_map(u16::to_be_bytes).collect();
        assert_eq!(decode_text(&input).unwrap(), "<k>v</k>");
    }

    #[test]
    fn test_invalid_bytes_rejected() {
        let err = decode_text(b"<k>\xff</k>").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidEncoding);
        assert_eq!(err.position, 3);

        let odd = [0xFF, 0xFE, b'<'];
        assert_eq!(decode_text(&odd).unwrap_err().kind, ErrorKind::InvalidEncoding);
    }
}
