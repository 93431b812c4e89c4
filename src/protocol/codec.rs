//! Scalar wire codecs.
//!
//! Primitive little-endian unsigned integer decode/encode, UTF-8 string
//! decode and value clamping. All multi-byte values on the wire are
//! little-endian and unsigned; setting scalars are 2 bytes wide.

use crate::error::{Error, Result};

/// Decode a byte sequence as an unsigned little-endian integer.
///
/// Accepts any width up to 8 bytes; wider payloads are a decode failure.
pub fn decode_uint(raw: &[u8]) -> Result<u64> {
    if raw.len() > 8 {
        return Err(Error::decode(format!(
            "integer field too wide: {} bytes (max 8)",
            raw.len()
        )));
    }
    Ok(raw
        .iter()
        .rev()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte)))
}

/// Decode a byte sequence as a UTF-8 string.
pub fn decode_utf8(raw: &[u8]) -> Result<String> {
    String::from_utf8(raw.to_vec())
        .map_err(|_| Error::decode("invalid UTF-8 in string characteristic"))
}

/// Serialize a non-negative integer into 2 bytes little-endian.
///
/// Fails if the value exceeds `u16::MAX`; callers must clamp first.
pub fn encode_uint16(value: u32) -> Result<[u8; 2]> {
    let value = u16::try_from(value)
        .map_err(|_| Error::invalid_operation(format!("value {value} exceeds u16 range")))?;
    Ok(value.to_le_bytes())
}

/// Bound `value` to `[min, max]` inclusive.
///
/// Values already at a bound are returned unchanged. This is the only
/// validation applied to plain numeric settings: out-of-range input is
/// clamped, never rejected.
pub fn clamp<T: Ord>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_uint_little_endian() {
        assert_eq!(decode_uint(&[0x39, 0x30]).unwrap(), 12345);
        assert_eq!(decode_uint(&[0x01, 0x00, 0x00, 0x00]).unwrap(), 1);
        assert_eq!(decode_uint(&[]).unwrap(), 0);
        assert_eq!(
            decode_uint(&[0xFF; 8]).unwrap(),
            u64::MAX,
            "full-width u64 must decode"
        );
    }

    #[test]
    fn test_decode_uint_too_wide() {
        assert!(matches!(
            decode_uint(&[0u8; 9]),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_utf8(b"v2.22").unwrap(), "v2.22");
        assert!(matches!(
            decode_utf8(&[0xFF, 0xFE]),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn test_encode_uint16() {
        assert_eq!(encode_uint16(0).unwrap(), [0x00, 0x00]);
        assert_eq!(encode_uint16(450).unwrap(), [0xC2, 0x01]);
        assert_eq!(encode_uint16(65535).unwrap(), [0xFF, 0xFF]);
        assert!(encode_uint16(65536).is_err());
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 10, 450), 10);
        assert_eq!(clamp(900, 10, 450), 450);
        assert_eq!(clamp(300, 10, 450), 300);
        // Ties at the bounds are returned unchanged.
        assert_eq!(clamp(10, 10, 450), 10);
        assert_eq!(clamp(450, 10, 450), 450);
    }
}
