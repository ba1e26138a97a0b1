//! Primitive field codecs shared by both container formats.
//!
//! The Strike firmware stores multi-byte length fields with the byte order
//! reversed and each byte rendered as its *minimal* hex representation
//! before concatenation. That is not little-endian: `[0x02, 0x00, 0x00,
//! 0x01]` decodes to `0x1002` (4098), whereas a little-endian read would
//! give `0x01000002`. Single-byte signed values wrap at 128 (255 = -1).

use thiserror::Error;

/// Errors raised by the strict codec entry points.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedField {
    #[error("field too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("reversed field of {width} bytes does not fit in 64 bits")]
    Overflow { width: usize },
}

/// Decode a reversed-byte unsigned field, lenient contract.
///
/// Malformed input (fewer than `width` bytes, or a value that overflows
/// 64 bits) decodes to 0 instead of failing. Historical call sites rely
/// on this; new code should prefer [`reversed_unsigned_strict`].
pub fn reversed_unsigned(bytes: &[u8], width: usize) -> u64 {
    reversed_unsigned_strict(bytes, width).unwrap_or(0)
}

/// Decode a reversed-byte unsigned field, strict contract.
///
/// Takes the first `width` bytes, reverses their order, concatenates each
/// byte's unpadded hex digits and parses the result base-16. Widths of 2
/// and 3 occur in captured files alongside the common 4-byte form.
pub fn reversed_unsigned_strict(bytes: &[u8], width: usize) -> Result<u64, MalformedField> {
    if bytes.len() < width {
        return Err(MalformedField::TooShort {
            needed: width,
            actual: bytes.len(),
        });
    }

    let mut value: u64 = 0;
    for &byte in bytes[..width].iter().rev() {
        // One hex digit for 0x00..=0x0f, two otherwise.
        let shift = if byte < 0x10 { 4 } else { 8 };
        if value >> (64 - shift) != 0 {
            return Err(MalformedField::Overflow { width });
        }
        value = (value << shift) | u64::from(byte);
    }
    Ok(value)
}

/// Decode a single raw byte as a signed value in [-128, 127].
///
/// Values up to 127 map to themselves; 128..=255 map to `value - 256`.
/// The mapping is its own inverse through the `i8`/`u8` bit cast, so
/// re-encoding a decoded value reproduces the original byte.
pub fn signed_byte(raw: u8) -> i8 {
    raw as i8
}

#[cfg(test)]
mod tests {
    use super::{MalformedField, reversed_unsigned, reversed_unsigned_strict, signed_byte};

    #[test]
    fn reversed_unsigned_dword() {
        // 4096 + 2
        assert_eq!(reversed_unsigned(&[0x02, 0x00, 0x00, 0x01], 4), 4098);
    }

    #[test]
    fn reversed_unsigned_word() {
        assert_eq!(reversed_unsigned(&[0xA4, 0x01], 2), 420);
    }

    #[test]
    fn reversed_unsigned_three_bytes() {
        assert_eq!(reversed_unsigned(&[0xC8, 0x02, 0x00], 3), 712);
    }

    #[test]
    fn reversed_unsigned_name_table_length() {
        assert_eq!(reversed_unsigned(&[0xC8, 0x02, 0x00, 0x00], 4), 712);
    }

    #[test]
    fn reversed_unsigned_is_not_little_endian() {
        let bytes = [0x02, 0x00, 0x00, 0x01];
        assert_ne!(
            u64::from(u32::from_le_bytes(bytes)),
            reversed_unsigned(&bytes, 4)
        );
    }

    #[test]
    fn reversed_unsigned_short_input_is_zero() {
        assert_eq!(reversed_unsigned(&[0x01, 0x02], 4), 0);
    }

    #[test]
    fn reversed_unsigned_strict_short_input_fails() {
        let err = reversed_unsigned_strict(&[0x01, 0x02], 4).unwrap_err();
        assert_eq!(err, MalformedField::TooShort { needed: 4, actual: 2 });
    }

    #[test]
    fn reversed_unsigned_strict_overflow_fails() {
        let bytes = [0xFF; 9];
        let err = reversed_unsigned_strict(&bytes, 9).unwrap_err();
        assert_eq!(err, MalformedField::Overflow { width: 9 });
    }

    #[test]
    fn reversed_unsigned_strict_matches_lenient_on_valid_input() {
        let bytes = [0x2C, 0x00, 0x00, 0x00];
        assert_eq!(
            reversed_unsigned_strict(&bytes, 4).unwrap(),
            reversed_unsigned(&bytes, 4)
        );
        assert_eq!(reversed_unsigned(&bytes, 4), 44);
    }

    #[test]
    fn signed_byte_low_half_is_identity() {
        for raw in 0u8..=127 {
            assert_eq!(signed_byte(raw), raw as i8);
            assert_eq!(i16::from(signed_byte(raw)), i16::from(raw));
        }
    }

    #[test]
    fn signed_byte_high_half_wraps() {
        for raw in 128u8..=255 {
            assert_eq!(i16::from(signed_byte(raw)), i16::from(raw) - 256);
        }
        assert_eq!(signed_byte(0xFF), -1);
        assert_eq!(signed_byte(0xFE), -2);
        assert_eq!(signed_byte(0x80), -128);
        assert_eq!(signed_byte(0x7F), 127);
    }

    #[test]
    fn signed_byte_idempotent_on_own_output() {
        for value in i8::MIN..=i8::MAX {
            assert_eq!(signed_byte(value as u8), value);
        }
    }
}
