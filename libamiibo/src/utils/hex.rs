//! Hex helpers used for UID text and record dumps.

use crate::{Error, Result};
use std::fmt::Write;

/// Lowercase hex without separators: `&[0x04, 0xa1]` -> `"04a1"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // write! into a String cannot fail
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Lowercase hex, one space between bytes: `&[0x04, 0xa1]` -> `"04 a1"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02x}", b);
    }
    s
}

/// Offset-prefixed dump, 16 bytes per line.
///
/// ```text
/// 0000: 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f
/// 0010: 10 11
/// ```
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .chunks(16)
        .enumerate()
        .map(|(i, line)| format!("{:04x}: {}", i * 16, bytes_to_hex_spaced(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse hex text into bytes, ignoring ASCII whitespace.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(Error::HexFormat("odd number of hex digits".into()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let hi = nibble(pair[0])?;
            let lo = nibble(pair[1])?;
            Ok((hi << 4) | lo)
        })
        .collect()
}

fn nibble(c: u8) -> Result<u8> {
    (c as char)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| Error::HexFormat(format!("invalid hex digit '{}'", c as char)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_to_hex_basic() {
        assert_eq!(bytes_to_hex(&[0x04, 0xa1, 0xb2, 0x80]), "04a1b280");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn bytes_to_hex_spaced_basic() {
        assert_eq!(bytes_to_hex_spaced(&[0xde, 0xab]), "de ab");
    }

    #[test]
    fn hex_dump_lines() {
        let bytes: Vec<u8> = (0u8..18).collect();
        let dump = hex_dump(&bytes);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0000: 00 01"));
        assert_eq!(lines[1], "0010: 10 11");
    }

    #[test]
    fn parse_hex_basic() {
        assert_eq!(parse_hex("04a1B2").unwrap(), vec![0x04, 0xa1, 0xb2]);
        assert_eq!(parse_hex("04 a1\nb2").unwrap(), vec![0x04, 0xa1, 0xb2]);
        assert!(parse_hex("").unwrap().is_empty());
    }

    #[test]
    fn parse_hex_err_cases() {
        assert!(matches!(parse_hex("abc"), Err(Error::HexFormat(_))));
        assert!(matches!(parse_hex("zz"), Err(Error::HexFormat(_))));
    }
}
