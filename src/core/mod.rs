//! Core domain types for Wordle
//!
//! Guess evaluation and keyboard aggregation. Everything here is pure,
//! in-memory and deterministic; I/O lives in the outer layers.

mod error;
mod feedback;
mod keyboard;
mod letter;
mod scoring;
mod status;
mod word;

/// Letters per word
pub const WORD_LENGTH: usize = 5;

pub use error::CoreError;
pub use feedback::{GuessResult, PositionResult, evaluate, evaluate_str};
pub use keyboard::{KEYBOARD_SPLIT, KeyboardState};
pub use letter::{ALPHABET_LEN, Letter};
pub use scoring::Scoring;
pub use status::LetterStatus;
pub use word::Word;
