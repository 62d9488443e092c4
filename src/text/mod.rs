pub mod charmap;
pub mod codec;
pub mod field;
mod table;

/// Code unit that ends a string inside its fixed-width slot.
pub const TERMINATOR: u16 = 0xFFFF;

/// Rendered in place of any game code the table does not cover.
pub const PLACEHOLDER: char = '?';

/// Number of characters a field of `size` bytes can hold.
/// The last code unit is always reserved for the terminator.
pub fn capacity(size: usize) -> usize {
    (size / 2).saturating_sub(1)
}

/// A field size is usable when it is even and fits at least the terminator.
pub fn is_valid_size(size: usize) -> bool {
    size >= 2 && size % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_reserves_terminator() {
        assert_eq!(capacity(2), 0);
        assert_eq!(capacity(16), 7);
        assert_eq!(capacity(22), 10);
    }

    #[test]
    fn test_capacity_of_degenerate_sizes() {
        assert_eq!(capacity(0), 0);
        assert_eq!(capacity(1), 0);
    }

    #[test]
    fn test_valid_sizes() {
        assert!(is_valid_size(2));
        assert!(is_valid_size(24));
        assert!(!is_valid_size(0));
        assert!(!is_valid_size(1));
        assert!(!is_valid_size(3));
    }
}
