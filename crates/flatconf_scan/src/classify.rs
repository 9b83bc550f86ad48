//! Byte-classification policy for line scanning.
//!
//! Consulting the global locale for character classes makes parsing
//! results depend on hidden OS state. Here the policy is an explicit
//! capability: scanning code takes a [`Classify`] and the default,
//! [`Ascii`], is a fixed pure-function set.

/// Byte-classification policy used by the scanning primitives.
///
/// Implementations must classify only single bytes; bytes that are part of
/// a multibyte UTF-8 sequence (`0x80..`) must fall in no class, so that
/// scanning never stops inside a character.
pub trait Classify {
    /// Is `byte` horizontal whitespace?
    fn is_space(&self, byte: u8) -> bool;

    /// Is `byte` a letter?
    fn is_alphabetic(&self, byte: u8) -> bool;

    /// Is `byte` a letter or a digit?
    fn is_alphanumeric(&self, byte: u8) -> bool;

    /// Is `byte` valid inside a simple identifier?
    ///
    /// Identifiers *start* with a letter but *continue* with letters,
    /// digits, or underscores. The start rule lives in
    /// [`LineCursor::take_identifier`](crate::LineCursor::take_identifier);
    /// this is the continuation rule.
    fn is_identifier(&self, byte: u8) -> bool {
        self.is_alphanumeric(byte) || byte == b'_'
    }
}

/// ASCII classification rules: space is `' '` or `'\t'`, letters and digits
/// per ASCII. The default policy everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascii;

impl Classify for Ascii {
    fn is_space(&self, byte: u8) -> bool {
        byte == b' ' || byte == b'\t'
    }

    fn is_alphabetic(&self, byte: u8) -> bool {
        byte.is_ascii_alphabetic()
    }

    fn is_alphanumeric(&self, byte: u8) -> bool {
        byte.is_ascii_alphanumeric()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_is_space_or_tab_only() {
        assert!(Ascii.is_space(b' '));
        assert!(Ascii.is_space(b'\t'));
        assert!(!Ascii.is_space(b'\n'));
        assert!(!Ascii.is_space(b'\r'));
        assert!(!Ascii.is_space(b'x'));
    }

    #[test]
    fn alphabetic_is_ascii_letters() {
        assert!(Ascii.is_alphabetic(b'a'));
        assert!(Ascii.is_alphabetic(b'Z'));
        assert!(!Ascii.is_alphabetic(b'0'));
        assert!(!Ascii.is_alphabetic(b'_'));
    }

    #[test]
    fn identifier_continuation_includes_underscore_and_digits() {
        assert!(Ascii.is_identifier(b'a'));
        assert!(Ascii.is_identifier(b'9'));
        assert!(Ascii.is_identifier(b'_'));
        assert!(!Ascii.is_identifier(b'-'));
        assert!(!Ascii.is_identifier(b'='));
    }

    #[test]
    fn multibyte_bytes_fall_in_no_class() {
        // Lead and continuation bytes of UTF-8 sequences classify as nothing.
        for byte in [0xC3u8, 0xA9, 0xE2, 0x82, 0xAC, 0xF0, 0x9F] {
            assert!(!Ascii.is_space(byte));
            assert!(!Ascii.is_alphabetic(byte));
            assert!(!Ascii.is_alphanumeric(byte));
            assert!(!Ascii.is_identifier(byte));
        }
    }
}
