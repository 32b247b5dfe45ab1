use std::fmt;

/// A single character of digit entry: `0`-`9` or the decimal point.
///
/// The inner character is private so no other text can reach the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryKey(char);

impl EntryKey {
    pub const POINT: EntryKey = EntryKey('.');

    /// Digit key for `0..=9`.
    pub fn digit(digit: u8) -> Option<Self> {
        char::from_digit(u32::from(digit), 10).map(Self)
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' | '.' => Some(Self(ch)),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_zero_to_nine() {
        for d in 0..=9u8 {
            let key = EntryKey::digit(d).expect("valid digit");
            assert_eq!(key.as_char().to_digit(10), Some(u32::from(d)));
            assert!(!key.is_point());
        }
        assert_eq!(EntryKey::digit(10), None);
    }

    #[test]
    fn from_char_accepts_only_digits_and_point() {
        assert_eq!(EntryKey::from_char('.'), Some(EntryKey::POINT));
        assert_eq!(EntryKey::from_char('7'), EntryKey::digit(7));
        assert_eq!(EntryKey::from_char('e'), None);
        assert_eq!(EntryKey::from_char('-'), None);
        assert_eq!(EntryKey::from_char(','), None);
    }
}
