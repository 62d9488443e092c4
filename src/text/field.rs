use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    capacity,
    codec::{check_capacity, decode_string, encode_string, region},
    is_valid_size,
};
use crate::error::EncodingError;

/// Which representations a field currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    RawOnly,
    TextOnly,
    Both,
}

#[derive(Debug, Clone)]
enum Repr {
    RawOnly(Vec<u8>),
    TextOnly(String),
    Both { raw: Vec<u8>, text: String },
}

/// One fixed-width Generation IV string slot.
///
/// Holds the raw bytes, the decoded text, or both. The missing side is
/// computed on first access and cached until either side is replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "SerializedField", try_from = "SerializedField")]
pub struct EncodedField {
    size: usize,
    repr: Repr,
}

impl EncodedField {
    /// Copy `len` bytes at `offset` out of `data`.
    pub fn from_slice(data: &[u8], offset: usize, len: usize) -> Result<Self, EncodingError> {
        let bytes = region(data, offset, len)?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EncodingError> {
        check_raw_len(bytes.len())?;
        Ok(EncodedField {
            size: bytes.len(),
            repr: Repr::RawOnly(bytes.to_vec()),
        })
    }

    /// Wrap `text` for a field of `size` bytes. Characters are checked
    /// against the table only when the bytes are first requested.
    pub fn from_text(text: impl Into<String>, size: usize) -> Result<Self, EncodingError> {
        if !is_valid_size(size) {
            return Err(EncodingError::InvalidSize(size));
        }
        let text = text.into();
        check_capacity(&text, size)?;
        Ok(EncodedField {
            size,
            repr: Repr::TextOnly(text),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Characters this field can hold before the terminator.
    pub fn capacity(&self) -> usize {
        capacity(self.size)
    }

    pub fn state(&self) -> FieldState {
        match self.repr {
            Repr::RawOnly(_) => FieldState::RawOnly,
            Repr::TextOnly(_) => FieldState::TextOnly,
            Repr::Both { .. } => FieldState::Both,
        }
    }

    /// The encoded bytes, exactly `size()` long.
    ///
    /// Fails with `UnsupportedCharacter` when the text holds a character the
    /// table cannot encode; the field is left unchanged in that case.
    pub fn raw(&mut self) -> Result<&[u8], EncodingError> {
        if let Repr::TextOnly(text) = &mut self.repr {
            let raw = encode_string(text, self.size)?;
            let text = std::mem::take(text);
            self.repr = Repr::Both { raw, text };
        }
        match &self.repr {
            Repr::RawOnly(raw) | Repr::Both { raw, .. } => Ok(raw.as_slice()),
            Repr::TextOnly(_) => unreachable!("text-only field was just encoded"),
        }
    }

    /// The decoded text. Never fails: unmapped codes render as `'?'`.
    pub fn text(&mut self) -> &str {
        if let Repr::RawOnly(raw) = &mut self.repr {
            let raw = std::mem::take(raw);
            // `size` is always even, so decoding the whole buffer cannot fail
            let text = decode_string(&raw).unwrap_or_default();
            self.repr = Repr::Both { raw, text };
        }
        match &self.repr {
            Repr::TextOnly(text) | Repr::Both { text, .. } => text.as_str(),
            Repr::RawOnly(_) => unreachable!("raw-only field was just decoded"),
        }
    }

    /// Replace the text, keeping the current size.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), EncodingError> {
        let text = text.into();
        check_capacity(&text, self.size)?;
        self.repr = Repr::TextOnly(text);
        Ok(())
    }

    /// Replace the raw bytes. The field takes on the new buffer's length.
    pub fn set_raw(&mut self, bytes: impl Into<Vec<u8>>) -> Result<(), EncodingError> {
        let bytes = bytes.into();
        check_raw_len(bytes.len())?;
        self.size = bytes.len();
        self.repr = Repr::RawOnly(bytes);
        Ok(())
    }

    pub fn into_bytes(mut self) -> Result<Vec<u8>, EncodingError> {
        self.raw()?;
        match self.repr {
            Repr::RawOnly(raw) | Repr::Both { raw, .. } => Ok(raw),
            Repr::TextOnly(_) => unreachable!("text-only field was just encoded"),
        }
    }
}

fn check_raw_len(len: usize) -> Result<(), EncodingError> {
    if !is_valid_size(len) {
        return Err(EncodingError::InvalidLength {
            len,
            available: len,
        });
    }
    Ok(())
}

impl fmt::Display for EncodedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::TextOnly(text) | Repr::Both { text, .. } => f.write_str(text),
            Repr::RawOnly(raw) => f.write_str(&decode_string(raw).unwrap_or_default()),
        }
    }
}

/// Raw-backed fields keep their bytes so padding, codes after the
/// terminator, and duplicate or unmapped codes survive a round trip.
#[derive(Serialize, Deserialize)]
struct SerializedField {
    size: usize,
    #[serde(flatten)]
    contents: SerializedContents,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SerializedContents {
    Raw { raw: Vec<u8> },
    Text { text: String },
}

impl From<EncodedField> for SerializedField {
    fn from(field: EncodedField) -> Self {
        let contents = match field.repr {
            Repr::RawOnly(raw) | Repr::Both { raw, .. } => SerializedContents::Raw { raw },
            Repr::TextOnly(text) => SerializedContents::Text { text },
        };
        SerializedField {
            size: field.size,
            contents,
        }
    }
}

impl TryFrom<SerializedField> for EncodedField {
    type Error = EncodingError;

    fn try_from(value: SerializedField) -> Result<Self, Self::Error> {
        match value.contents {
            SerializedContents::Raw { raw } if raw.len() != value.size => {
                Err(EncodingError::InvalidLength {
                    len: raw.len(),
                    available: value.size,
                })
            }
            SerializedContents::Raw { raw } => EncodedField::from_bytes(&raw),
            SerializedContents::Text { text } => EncodedField::from_text(text, value.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "Piplup" followed by the terminator, in a 16-byte field
    const PIPLUP: [u8; 16] = [
        0x3A, 0x01, 0x4D, 0x01, 0x54, 0x01, 0x50, 0x01, 0x59, 0x01, 0x54, 0x01, 0xFF, 0xFF, 0x00,
        0x00,
    ];

    #[test]
    fn test_from_bytes_decodes_lazily() {
        let mut field = EncodedField::from_bytes(&PIPLUP).unwrap();
        assert_eq!(field.size(), 16);
        assert_eq!(field.state(), FieldState::RawOnly);
        assert_eq!(field.text(), "Piplup");
        assert_eq!(field.state(), FieldState::Both);
        assert_eq!(field.raw().unwrap(), &PIPLUP);
    }

    #[test]
    fn test_from_text_encodes_lazily() {
        let mut field = EncodedField::from_text("Piplup", 16).unwrap();
        assert_eq!(field.state(), FieldState::TextOnly);
        assert_eq!(field.raw().unwrap(), &PIPLUP);
        assert_eq!(field.state(), FieldState::Both);
        assert_eq!(field.text(), "Piplup");
    }

    #[test]
    fn test_from_slice_copies_region() {
        let mut data = vec![0xAA; 4];
        data.extend_from_slice(&PIPLUP);
        let mut field = EncodedField::from_slice(&data, 4, 16).unwrap();
        data[4] = 0x00;
        assert_eq!(field.text(), "Piplup");
        assert_eq!(field.raw().unwrap()[0], 0x3A);
    }

    #[test]
    fn test_from_slice_rejects_bad_regions() {
        let data = [0u8; 8];
        assert!(matches!(
            EncodedField::from_slice(&data, 4, 8),
            Err(EncodingError::InvalidLength { .. })
        ));
        assert!(matches!(
            EncodedField::from_slice(&data, 0, 3),
            Err(EncodingError::InvalidLength { len: 3, .. })
        ));
        assert!(matches!(
            EncodedField::from_slice(&data, 0, 0),
            Err(EncodingError::InvalidLength { len: 0, .. })
        ));
    }

    #[test]
    fn test_size_validation() {
        assert_eq!(
            EncodedField::from_text("", 1).unwrap_err(),
            EncodingError::InvalidSize(1)
        );
        assert_eq!(
            EncodedField::from_text("", 3).unwrap_err(),
            EncodingError::InvalidSize(3)
        );
        assert!(matches!(
            EncodedField::from_bytes(&[0xFF, 0xFF, 0x00]),
            Err(EncodingError::InvalidLength { len: 3, .. })
        ));
        assert!(matches!(
            EncodedField::from_bytes(&[0xFF]),
            Err(EncodingError::InvalidLength { len: 1, .. })
        ));

        let mut empty = EncodedField::from_text("", 2).unwrap();
        assert_eq!(empty.raw().unwrap(), &[0xFFu8, 0xFF]);
        assert_eq!(empty.capacity(), 0);
    }

    #[test]
    fn test_from_text_too_long() {
        assert_eq!(
            EncodedField::from_text("Chimchar", 16).unwrap_err(),
            EncodingError::TextTooLong { len: 8, capacity: 7 }
        );
    }

    #[test]
    fn test_unsupported_character_surfaces_on_raw() {
        let mut field = EncodedField::from_text("Pip€", 16).unwrap();
        assert_eq!(
            field.raw().unwrap_err(),
            EncodingError::UnsupportedCharacter('€')
        );
        assert_eq!(field.state(), FieldState::TextOnly);
        assert_eq!(field.text(), "Pip€");
    }

    #[test]
    fn test_set_text_invalidates_raw() {
        let mut field = EncodedField::from_bytes(&PIPLUP).unwrap();
        field.set_text("Turtwig").unwrap();
        assert_eq!(field.state(), FieldState::TextOnly);
        assert_eq!(field.size(), 16);
        let raw = field.raw().unwrap().to_vec();
        assert_eq!(&raw[0..2], &[0x3E, 0x01]);
        assert_eq!(&raw[14..16], &[0xFF, 0xFF]);
    }

    #[test]
    fn test_set_text_too_long_keeps_old_value() {
        let mut field = EncodedField::from_bytes(&PIPLUP).unwrap();
        assert_eq!(
            field.set_text("Chimchar"),
            Err(EncodingError::TextTooLong { len: 8, capacity: 7 })
        );
        assert_eq!(field.state(), FieldState::RawOnly);
        assert_eq!(field.text(), "Piplup");
    }

    #[test]
    fn test_set_raw_invalidates_text_and_resizes() {
        let mut field = EncodedField::from_text("Piplup", 16).unwrap();
        field.set_raw(vec![0x2Bu8, 0x01, 0xFF, 0xFF]).unwrap();
        assert_eq!(field.state(), FieldState::RawOnly);
        assert_eq!(field.size(), 4);
        assert_eq!(field.text(), "A");
    }

    #[test]
    fn test_set_raw_rejects_bad_lengths() {
        let mut field = EncodedField::from_bytes(&PIPLUP).unwrap();
        assert!(field.set_raw(vec![0xFFu8, 0xFF, 0x00]).is_err());
        assert!(field.set_raw(Vec::<u8>::new()).is_err());
        assert_eq!(field.size(), 16);
        assert_eq!(field.state(), FieldState::RawOnly);
    }

    #[test]
    fn test_reads_never_change_size() {
        let mut field = EncodedField::from_text("A", 24).unwrap();
        field.raw().unwrap();
        field.text();
        assert_eq!(field.size(), 24);
        assert_eq!(field.raw().unwrap().len(), 24);
    }

    #[test]
    fn test_raw_without_terminator_decodes_whole_buffer() {
        let mut field = EncodedField::from_bytes(&[0x2B, 0x01, 0x2B, 0x01]).unwrap();
        assert_eq!(field.text(), "AA");
    }

    #[test]
    fn test_display_does_not_cache() {
        let field = EncodedField::from_bytes(&PIPLUP).unwrap();
        assert_eq!(field.to_string(), "Piplup");
        assert_eq!(field.state(), FieldState::RawOnly);
    }

    #[test]
    fn test_into_bytes() {
        let field = EncodedField::from_text("A", 6).unwrap();
        assert_eq!(
            field.into_bytes().unwrap(),
            vec![0x2B, 0x01, 0xFF, 0xFF, 0x00, 0x00]
        );
    }

    #[test]
    fn test_serde_text_only_field() {
        let field = EncodedField::from_text("Piplup", 16).unwrap();
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, r#"{"size":16,"text":"Piplup"}"#);

        let mut back: EncodedField = serde_json::from_str(&json).unwrap();
        assert_eq!(back.state(), FieldState::TextOnly);
        assert_eq!(back.raw().unwrap(), &PIPLUP);
    }

    #[test]
    fn test_serde_raw_field_keeps_bytes() {
        let field = EncodedField::from_bytes(&PIPLUP).unwrap();
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(
            json,
            r#"{"size":16,"raw":[58,1,77,1,84,1,80,1,89,1,84,1,255,255,0,0]}"#
        );

        let mut back: EncodedField = serde_json::from_str(&json).unwrap();
        assert_eq!(back.state(), FieldState::RawOnly);
        assert_eq!(back.raw().unwrap(), &PIPLUP);
        assert_eq!(back.text(), "Piplup");
    }

    #[test]
    fn test_serde_unterminated_raw_round_trips() {
        let field = EncodedField::from_bytes(&[0x2B, 0x01, 0x2B, 0x01]).unwrap();
        let json = serde_json::to_string(&field).unwrap();

        let mut back: EncodedField = serde_json::from_str(&json).unwrap();
        assert_eq!(back.size(), 4);
        assert_eq!(back.raw().unwrap(), &[0x2Bu8, 0x01, 0x2B, 0x01]);
        assert_eq!(back.text(), "AA");
    }

    #[test]
    fn test_serde_keeps_duplicate_and_unmapped_codes() {
        // 0x00F5 decodes to the same char as 0x00DF; 0x1234 is unmapped;
        // trailing bytes after the terminator are not padding
        let bytes = [0xF5u8, 0x00, 0x34, 0x12, 0xFF, 0xFF, 0x2B, 0x01];
        let mut field = EncodedField::from_bytes(&bytes).unwrap();
        assert_eq!(field.text(), "ｚ?");

        let json = serde_json::to_string(&field).unwrap();
        let mut back: EncodedField = serde_json::from_str(&json).unwrap();
        assert_eq!(back.raw().unwrap(), &bytes);
    }

    #[test]
    fn test_deserialize_rejects_invalid_fields() {
        assert!(serde_json::from_str::<EncodedField>(r#"{"size":3,"text":""}"#).is_err());
        assert!(
            serde_json::from_str::<EncodedField>(r#"{"size":4,"text":"Piplup"}"#).is_err()
        );
        assert!(serde_json::from_str::<EncodedField>(r#"{"size":4,"raw":[255,255]}"#).is_err());
        assert!(serde_json::from_str::<EncodedField>(r#"{"size":3,"raw":[255,255,0]}"#).is_err());
        assert!(serde_json::from_str::<EncodedField>(r#"{"size":4}"#).is_err());
    }
}
