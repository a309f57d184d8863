//! Word lists for Wordle
//!
//! Provides embedded word lists compiled into the binary, guess validation
//! against them, and answer selection.

mod dictionary;
mod embedded;
pub mod loader;
mod provider;

pub use dictionary::{Dictionary, GuessError};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use provider::{AnswerProvider, FixedAnswer, RandomAnswers};
