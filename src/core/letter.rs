//! Alphabet letters
//!
//! `Letter` can only hold one of the 26 lowercase ASCII letters, so every
//! lookup keyed by a letter is total.

use super::CoreError;
use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// A single lowercase letter `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `CoreError::InvalidLetter` for anything outside `a..=z` / `A..=Z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('3').is_err());
    /// ```
    pub const fn new(ch: char) -> Result<Self, CoreError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_lowercase() as u8))
        } else {
            Err(CoreError::InvalidLetter(ch))
        }
    }

    /// Letter at `index` in alphabet order (0 = 'a')
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self(b'a' + index as u8))
        } else {
            None
        }
    }

    /// Position in alphabet order (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[inline]
    #[must_use]
    pub const fn to_uppercase(self) -> char {
        self.0.to_ascii_uppercase() as char
    }

    /// All 26 letters in alphabet order
    pub fn alphabet() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (b'a'..=b'z').map(Self)
    }
}

impl TryFrom<char> for Letter {
    type Error = CoreError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_normalizes_case() {
        assert_eq!(Letter::new('A').unwrap(), Letter::new('a').unwrap());
        assert_eq!(Letter::new('Z').unwrap().as_char(), 'z');
    }

    #[test]
    fn letter_rejects_non_alphabet() {
        for ch in ['1', ' ', '!', 'é', '*'] {
            assert_eq!(Letter::new(ch), Err(CoreError::InvalidLetter(ch)));
        }
    }

    #[test]
    fn letter_index_roundtrip_covers_alphabet() {
        let letters: Vec<Letter> = Letter::alphabet().collect();
        assert_eq!(letters.len(), ALPHABET_LEN);

        for (i, letter) in letters.iter().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(Letter::from_index(i), Some(*letter));
        }
        assert_eq!(Letter::from_index(ALPHABET_LEN), None);
    }

    #[test]
    fn letter_display_and_uppercase() {
        let letter = Letter::new('k').unwrap();
        assert_eq!(letter.to_string(), "k");
        assert_eq!(letter.to_uppercase(), 'K');
    }
}
