//! Five-letter word representation
//!
//! A Word stores its lowercase text alongside the validated letters used for evaluation.

use super::{CoreError, Letter, WORD_LENGTH};
use std::fmt;

/// A validated 5-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [Letter; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `CoreError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is outside `a..=z` (after lowercasing)
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, CoreError> {
        let text: String = text.into().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(CoreError::InvalidLength(len));
        }

        let letters: Vec<Letter> = text.chars().map(Letter::new).collect::<Result<_, _>>()?;
        let letters: [Letter; WORD_LENGTH] = letters
            .try_into()
            .map_err(|v: Vec<Letter>| CoreError::InvalidLength(v.len()))?;

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check if the word contains a letter at any position
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Occurrences of each letter, indexed by `Letter::index`
    pub(crate) fn letter_counts(&self) -> [u8; super::ALPHABET_LEN] {
        let mut counts = [0u8; super::ALPHABET_LEN];
        for letter in &self.letters {
            counts[letter.index()] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
