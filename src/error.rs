use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("invalid length: {len} bytes (must be even, at least 2, and inside a buffer of {available} bytes)")]
    InvalidLength { len: usize, available: usize },
    #[error("invalid field size: {0} bytes (must be even and at least 2)")]
    InvalidSize(usize),
    #[error("text too long: {len} characters, field holds at most {capacity}")]
    TextTooLong { len: usize, capacity: usize },
    #[error("unsupported character {0:?}")]
    UnsupportedCharacter(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_character_message_names_char() {
        let err = EncodingError::UnsupportedCharacter('€');
        assert_eq!(err.to_string(), "unsupported character '€'");
    }

    #[test]
    fn test_text_too_long_message() {
        let err = EncodingError::TextTooLong { len: 9, capacity: 7 };
        assert_eq!(err.to_string(), "text too long: 9 characters, field holds at most 7");
    }
}
