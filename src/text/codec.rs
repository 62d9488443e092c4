use super::{capacity, charmap::CharMap, is_valid_size, TERMINATOR};
use crate::error::EncodingError;

/// Decode a whole Generation IV string buffer.
///
/// Stops at the first 0xFFFF code unit. A buffer with no terminator decodes
/// in full. Unmapped codes render as `'?'`; only an odd length is an error.
pub fn decode_string(bytes: &[u8]) -> Result<String, EncodingError> {
    if bytes.len() % 2 != 0 {
        return Err(EncodingError::InvalidLength {
            len: bytes.len(),
            available: bytes.len(),
        });
    }

    let map = CharMap::get();
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|&code| code != TERMINATOR)
        .map(|code| map.decode_char(code))
        .collect())
}

/// Decode the `len` bytes starting at `offset` inside a larger buffer.
pub fn decode_at(data: &[u8], offset: usize, len: usize) -> Result<String, EncodingError> {
    decode_string(region(data, offset, len)?)
}

/// Encode `text` into exactly `size` bytes: one little-endian code unit per
/// character, a 0xFFFF terminator, then zero padding.
pub fn encode_string(text: &str, size: usize) -> Result<Vec<u8>, EncodingError> {
    if !is_valid_size(size) {
        return Err(EncodingError::InvalidSize(size));
    }
    check_capacity(text, size)?;

    let map = CharMap::get();
    let mut out = vec![0u8; size];
    let mut pos = 0;
    for ch in text.chars() {
        let code = map.reverse_lookup(ch)?;
        out[pos..pos + 2].copy_from_slice(&code.to_le_bytes());
        pos += 2;
    }
    out[pos..pos + 2].copy_from_slice(&TERMINATOR.to_le_bytes());
    Ok(out)
}

/// Fail with `TextTooLong` when `text` will not fit a field of `size` bytes.
pub(crate) fn check_capacity(text: &str, size: usize) -> Result<(), EncodingError> {
    let len = text.chars().count();
    let capacity = capacity(size);
    if len > capacity {
        return Err(EncodingError::TextTooLong { len, capacity });
    }
    Ok(())
}

/// Borrow `len` bytes at `offset`, checking the region is in range and a
/// whole number of code units.
pub(crate) fn region(data: &[u8], offset: usize, len: usize) -> Result<&[u8], EncodingError> {
    let invalid = EncodingError::InvalidLength {
        len,
        available: data.len().saturating_sub(offset),
    };
    if len % 2 != 0 {
        return Err(invalid);
    }
    match offset.checked_add(len) {
        Some(end) if end <= data.len() => Ok(&data[offset..end]),
        _ => Err(invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 'A', 'B', 'C' in the Generation IV table
    const A: [u8; 2] = [0x2B, 0x01];
    const B: [u8; 2] = [0x2C, 0x01];
    const C: [u8; 2] = [0x2D, 0x01];
    const END: [u8; 2] = [0xFF, 0xFF];

    #[test]
    fn test_decode_stops_at_terminator() {
        let bytes = [A, END, B].concat();
        assert_eq!(decode_string(&bytes).unwrap(), "A");
    }

    #[test]
    fn test_decode_without_terminator_reads_whole_buffer() {
        let bytes = [A, A].concat();
        assert_eq!(decode_string(&bytes).unwrap(), "AA");
    }

    #[test]
    fn test_decode_empty_buffer() {
        assert_eq!(decode_string(&[]).unwrap(), "");
    }

    #[test]
    fn test_decode_immediate_terminator() {
        assert_eq!(decode_string(&[0xFF, 0xFF, 0x2B, 0x01]).unwrap(), "");
    }

    #[test]
    fn test_decode_unmapped_renders_placeholder() {
        let bytes = [A, [0x34, 0x12], C, END].concat();
        assert_eq!(decode_string(&bytes).unwrap(), "A?C");
    }

    #[test]
    fn test_decode_odd_length_fails() {
        assert_eq!(
            decode_string(&[0x2B, 0x01, 0xFF]),
            Err(EncodingError::InvalidLength { len: 3, available: 3 })
        );
    }

    #[test]
    fn test_decode_at_offset() {
        let data = [[0xAA, 0xBB], B, C, END, A].concat();
        assert_eq!(decode_at(&data, 2, 6).unwrap(), "BC");
        assert_eq!(decode_at(&data, 2, 0).unwrap(), "");
    }

    #[test]
    fn test_decode_at_out_of_range() {
        let data = [A, B].concat();
        assert!(matches!(
            decode_at(&data, 2, 4),
            Err(EncodingError::InvalidLength { len: 4, .. })
        ));
        assert!(matches!(
            decode_at(&data, usize::MAX, 2),
            Err(EncodingError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_decode_at_odd_length() {
        let data = [A, B].concat();
        assert!(matches!(
            decode_at(&data, 0, 3),
            Err(EncodingError::InvalidLength { len: 3, .. })
        ));
    }

    #[test]
    fn test_encode_writes_terminator_and_zero_padding() {
        let out = encode_string("AB", 10).unwrap();
        assert_eq!(out, vec![0x2B, 0x01, 0x2C, 0x01, 0xFF, 0xFF, 0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_empty_into_minimum_size() {
        assert_eq!(encode_string("", 2).unwrap(), vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_encode_at_capacity() {
        let out = encode_string("ABC", 8).unwrap();
        assert_eq!(out.len(), 8);
        assert_eq!(&out[6..], &[0xFFu8, 0xFF]);
        assert_eq!(decode_string(&out).unwrap(), "ABC");
    }

    #[test]
    fn test_encode_over_capacity_fails() {
        assert_eq!(
            encode_string("ABCD", 8),
            Err(EncodingError::TextTooLong { len: 4, capacity: 3 })
        );
    }

    #[test]
    fn test_encode_invalid_sizes() {
        assert_eq!(encode_string("", 0), Err(EncodingError::InvalidSize(0)));
        assert_eq!(encode_string("", 1), Err(EncodingError::InvalidSize(1)));
        assert_eq!(encode_string("A", 5), Err(EncodingError::InvalidSize(5)));
    }

    #[test]
    fn test_encode_unsupported_character_fails() {
        assert_eq!(
            encode_string("A€B", 16),
            Err(EncodingError::UnsupportedCharacter('€'))
        );
    }

    #[test]
    fn test_encode_counts_chars_not_bytes() {
        // three multi-byte chars fit a 4-char field
        let out = encode_string("あいう", 10).unwrap();
        assert_eq!(decode_string(&out).unwrap(), "あいう");
    }

    #[test]
    fn test_encode_duplicate_char_uses_first_code() {
        let out = encode_string("ｚ", 4).unwrap();
        assert_eq!(out, vec![0xDF, 0x00, 0xFF, 0xFF]);
    }

    #[test]
    fn test_text_round_trip() {
        for text in ["", "Pikachu", "ナエトル", "Lv. 50 ♂", "Line\nTwo"] {
            let out = encode_string(text, 24).unwrap();
            assert_eq!(decode_string(&out).unwrap(), text);
        }
    }

    #[test]
    fn test_bytes_round_trip() {
        let original = [B, A, C, END, [0, 0], [0, 0]].concat();
        let text = decode_string(&original).unwrap();
        assert_eq!(encode_string(&text, original.len()).unwrap(), original);
    }
}
