//! Answer list plus the set of accepted guesses
//!
//! Validation of raw player input happens here so the game core only ever
//! sees well-formed, recognized words.

use super::{ALLOWED, ANSWERS, loader::words_from_slice};
use crate::core::{CoreError, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Why a raw guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("your guess must be {expected} letters long", expected = WORD_LENGTH)]
    WrongLength(usize),

    #[error("your guess may only use the letters a-z")]
    InvalidCharacters,

    #[error("invalid word")]
    NotInWordList(String),
}

/// Answers that can be drawn and words accepted as guesses
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    allowed: FxHashSet<String>,
}

impl Dictionary {
    /// Embedded word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Only the answers are accepted as guesses
    #[must_use]
    pub fn answers_only() -> Self {
        Self::from_words(words_from_slice(ANSWERS), Vec::new())
    }

    /// Build from explicit lists; answers are always accepted as guesses
    #[must_use]
    pub fn from_words(answers: Vec<Word>, allowed: Vec<Word>) -> Self {
        let allowed = answers
            .iter()
            .chain(&allowed)
            .map(|word| word.text().to_string())
            .collect();
        Self { answers, allowed }
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    #[must_use]
    pub fn is_allowed(&self, word: &str) -> bool {
        self.allowed.contains(word)
    }

    /// Turn raw input into a guess the game can evaluate
    ///
    /// Surrounding whitespace is trimmed and case is ignored.
    ///
    /// # Errors
    /// Returns `GuessError` for the wrong length, non-letters, or a word not in the list.
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::wordlists::{Dictionary, GuessError};
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert_eq!(dictionary.validate_guess(" Crane\n").unwrap().text(), "crane");
    /// assert_eq!(dictionary.validate_guess("cat"), Err(GuessError::WrongLength(3)));
    /// ```
    pub fn validate_guess(&self, raw: &str) -> Result<Word, GuessError> {
        let input = raw.trim().to_lowercase();

        let word = Word::new(input).map_err(|e| match e {
            CoreError::InvalidLength(len) => GuessError::WrongLength(len),
            CoreError::InvalidLetter(_) => GuessError::InvalidCharacters,
        })?;

        if self.is_allowed(word.text()) {
            Ok(word)
        } else {
            Err(GuessError::NotInWordList(word.text().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Dictionary {
        Dictionary::from_words(
            words_from_slice(&["crane", "slate"]),
            words_from_slice(&["eerie", "light"]),
        )
    }

    #[test]
    fn answers_are_always_allowed() {
        let dictionary = small();
        assert!(dictionary.is_allowed("crane"));
        assert!(dictionary.is_allowed("eerie"));
        assert!(!dictionary.is_allowed("zzzzz"));
        assert_eq!(dictionary.allowed_count(), 4);
        assert_eq!(dictionary.answers().len(), 2);
    }

    #[test]
    fn validate_normalizes_input() {
        let word = small().validate_guess("  LiGhT \n").unwrap();
        assert_eq!(word.text(), "light");
    }

    #[test]
    fn validate_rejects_wrong_length() {
        let dictionary = small();
        assert_eq!(dictionary.validate_guess(""), Err(GuessError::WrongLength(0)));
        assert_eq!(dictionary.validate_guess("cranes"), Err(GuessError::WrongLength(6)));
        assert_eq!(
            GuessError::WrongLength(6).to_string(),
            "your guess must be 5 letters long"
        );
    }

    #[test]
    fn validate_rejects_non_letters() {
        assert_eq!(
            small().validate_guess("cr4ne"),
            Err(GuessError::InvalidCharacters)
        );
    }

    #[test]
    fn validate_rejects_unknown_words() {
        let err = small().validate_guess("abcde").unwrap_err();
        assert_eq!(err, GuessError::NotInWordList("abcde".to_string()));
        assert_eq!(err.to_string(), "invalid word");
    }

    #[test]
    fn embedded_dictionary_contains_answers() {
        let dictionary = Dictionary::embedded();
        assert!(dictionary.answers().iter().all(|w| dictionary.is_allowed(w.text())));
        assert!(dictionary.allowed_count() >= dictionary.answers().len());
    }

    #[test]
    fn answers_only_rejects_extra_words() {
        let dictionary = Dictionary::answers_only();
        assert!(dictionary.validate_guess("crane").is_ok());
        assert_eq!(
            dictionary.validate_guess("aahed"),
            Err(GuessError::NotInWordList("aahed".to_string()))
        );
    }

    #[test]
    fn embedded_dictionary_accepts_everyday_words() {
        let dictionary = Dictionary::embedded();
        for word in ["hello", "stare", "their", "arose", "crane", "world", "aahed"] {
            assert!(dictionary.validate_guess(word).is_ok(), "{word} rejected");
        }
        assert!(dictionary.allowed_count() > 12_000);
        assert!(dictionary.answers().len() > 2_000);
    }
}
