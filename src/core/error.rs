//! Invalid-input errors for the core types

use super::WORD_LENGTH;
use thiserror::Error;

/// Raised when raw input cannot become a `Letter` or `Word`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Not exactly `WORD_LENGTH` letters
    #[error("word must be exactly {expected} letters, got {0}", expected = WORD_LENGTH)]
    InvalidLength(usize),

    /// Character outside `a..=z`
    #[error("'{0}' is not a letter a-z")]
    InvalidLetter(char),
}
