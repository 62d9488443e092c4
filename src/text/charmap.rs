use std::collections::HashMap;
use std::sync::OnceLock;

use super::{table::GEN4_TABLE, PLACEHOLDER};
use crate::error::EncodingError;

/// Both directions of the Generation IV character table.
///
/// Built once per process from [`GEN4_TABLE`] and read-only afterwards.
#[derive(Debug)]
pub struct CharMap {
    forward: HashMap<u16, char>,
    reverse: HashMap<char, u16>,
}

impl CharMap {
    /// The shared process-wide map.
    pub fn get() -> &'static CharMap {
        static MAP: OnceLock<CharMap> = OnceLock::new();
        MAP.get_or_init(|| CharMap::from_entries(GEN4_TABLE))
    }

    /// Index `entries` in order. A character that appears more than once keeps
    /// the code of its first entry in the reverse direction.
    pub fn from_entries(entries: &[(u16, char)]) -> Self {
        let mut forward = HashMap::with_capacity(entries.len());
        let mut reverse = HashMap::with_capacity(entries.len());
        for &(code, ch) in entries {
            forward.insert(code, ch);
            reverse.entry(ch).or_insert(code);
        }
        tracing::debug!(
            forward = forward.len(),
            reverse = reverse.len(),
            "built character map"
        );
        CharMap { forward, reverse }
    }

    /// `None` for unmapped codes; [`CharMap::decode_char`] substitutes `'?'` instead.
    pub fn forward_lookup(&self, code: u16) -> Option<char> {
        self.forward.get(&code).copied()
    }

    pub fn reverse_lookup(&self, ch: char) -> Result<u16, EncodingError> {
        self.reverse
            .get(&ch)
            .copied()
            .ok_or(EncodingError::UnsupportedCharacter(ch))
    }

    /// Forward lookup with the placeholder substituted for unmapped codes.
    pub fn decode_char(&self, code: u16) -> char {
        self.forward_lookup(code).unwrap_or_else(|| {
            tracing::trace!("unmapped game code {code:#06x}");
            PLACEHOLDER
        })
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Character for `code` in the shared map, `None` when unmapped.
/// Decoding goes through [`CharMap::decode_char`], which renders `'?'`.
pub fn forward_lookup(code: u16) -> Option<char> {
    CharMap::get().forward_lookup(code)
}

/// Game code for `ch` in the shared map.
pub fn reverse_lookup(ch: char) -> Result<u16, EncodingError> {
    CharMap::get().reverse_lookup(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(CharMap::get().len(), 2875);
    }

    #[test]
    fn test_forward_uppercase_a_to_z() {
        for (i, expected) in ('A'..='Z').enumerate() {
            let code = 0x012B + i as u16;
            assert_eq!(forward_lookup(code), Some(expected), "code {code:#06x}");
        }
    }

    #[test]
    fn test_forward_lowercase_a_to_z() {
        for (i, expected) in ('a'..='z').enumerate() {
            let code = 0x0145 + i as u16;
            assert_eq!(forward_lookup(code), Some(expected), "code {code:#06x}");
        }
    }

    #[test]
    fn test_forward_digits_0_to_9() {
        for (i, expected) in ('0'..='9').enumerate() {
            let code = 0x0121 + i as u16;
            assert_eq!(forward_lookup(code), Some(expected), "code {code:#06x}");
        }
    }

    #[test]
    fn test_forward_hiragana_and_symbols() {
        assert_eq!(forward_lookup(0x0003), Some('あ'));
        assert_eq!(forward_lookup(0x01BB), Some('♂'));
        assert_eq!(forward_lookup(0x01DE), Some(' '));
    }

    #[test]
    fn test_forward_control_codes() {
        assert_eq!(forward_lookup(0xE000), Some('\n'));
        assert_eq!(forward_lookup(0x25BC), Some('\r'));
        assert_eq!(forward_lookup(0x25BD), Some('\u{c}'));
    }

    #[test]
    fn test_forward_unmapped_is_none() {
        assert_eq!(forward_lookup(0x0D2F), None);
        assert_eq!(forward_lookup(0x1234), None);
        assert_eq!(forward_lookup(0xFFFF), None);
    }

    #[test]
    fn test_decode_char_substitutes_placeholder() {
        assert_eq!(CharMap::get().decode_char(0x1234), '?');
        assert_eq!(CharMap::get().decode_char(0x012B), 'A');
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(reverse_lookup('A'), Ok(0x012B));
        assert_eq!(reverse_lookup('z'), Ok(0x015E));
        assert_eq!(reverse_lookup('\n'), Ok(0xE000));
    }

    #[test]
    fn test_reverse_lookup_unsupported() {
        assert_eq!(
            reverse_lookup('€'),
            Err(EncodingError::UnsupportedCharacter('€'))
        );
        assert_eq!(
            reverse_lookup('🙂'),
            Err(EncodingError::UnsupportedCharacter('🙂'))
        );
    }

    #[test]
    fn test_reverse_duplicate_keeps_first_code() {
        // U+FF5A appears at 0x00DF and again at 0x00F5.
        assert_eq!(forward_lookup(0x00DF), Some('ｚ'));
        assert_eq!(forward_lookup(0x00F5), Some('ｚ'));
        for _ in 0..3 {
            assert_eq!(reverse_lookup('ｚ'), Ok(0x00DF));
        }
    }

    #[test]
    fn test_shared_map_is_built_once_across_threads() {
        let handles: Vec<_> = (0..8).map(|_| std::thread::spawn(CharMap::get)).collect();
        let maps: Vec<&'static CharMap> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(maps.iter().all(|&map| std::ptr::eq(map, maps[0])));
        assert_eq!(reverse_lookup('ｚ'), Ok(0x00DF));
    }

    #[test]
    fn test_from_entries_first_wins() {
        let map = CharMap::from_entries(&[(0x0041, 'A'), (0x0042, 'B'), (0x0099, 'A')]);
        assert_eq!(map.reverse_lookup('A'), Ok(0x0041));
        assert_eq!(map.forward_lookup(0x0099), Some('A'));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_every_mapped_char_round_trips_through_reverse() {
        let map = CharMap::get();
        for &(code, ch) in GEN4_TABLE {
            let back = map.reverse_lookup(ch).expect("mapped char must reverse");
            assert_eq!(map.forward_lookup(back), Some(ch), "code {code:#06x}");
        }
    }
}
