//! One-shot evaluation of a guess against a given answer

use crate::core::{CoreError, GuessResult, Scoring, Word};

/// Evaluate `guess` against `answer` without starting a game
///
/// # Errors
///
/// Returns `CoreError` if either word is not 5 letters `a..=z`.
pub fn check_guess(answer: &str, guess: &str, scoring: Scoring) -> Result<GuessResult, CoreError> {
    let answer = Word::new(answer)?;
    let guess = Word::new(guess)?;
    Ok(scoring.evaluate(&answer, &guess))
}
