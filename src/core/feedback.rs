//! Guess evaluation
//!
//! Turns an (answer, guess) pair into per-position feedback. Presence is
//! checked against the whole answer without consuming matched letters, so
//! every repeated guess letter is judged on its own.

use super::{CoreError, Letter, LetterStatus, Scoring, WORD_LENGTH, Word};

/// Feedback for one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionResult {
    pub letter: Letter,
    pub status: LetterStatus,
}

/// Feedback for a whole guess, one cell per letter in guess order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    cells: [PositionResult; WORD_LENGTH],
}

impl GuessResult {
    /// Pair each guessed letter with its status
    pub(crate) fn from_statuses(guess: &Word, statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        let letters = guess.letters();
        Self {
            cells: std::array::from_fn(|i| PositionResult {
                letter: letters[i],
                status: statuses[i],
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PositionResult> {
        self.cells.iter()
    }

    #[must_use]
    pub fn statuses(&self) -> [LetterStatus; WORD_LENGTH] {
        self.cells.map(|cell| cell.status)
    }

    /// The guessed word as lowercase text
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().map(|cell| cell.letter.as_char()).collect()
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.status == LetterStatus::Correct)
    }

    /// Emoji row like "⬜🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.cells.iter().map(|cell| cell.status.to_emoji()).collect()
    }
}

impl<'a> IntoIterator for &'a GuessResult {
    type Item = &'a PositionResult;
    type IntoIter = std::slice::Iter<'a, PositionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Evaluate `guess` against `answer` with containment scoring
///
/// # Examples
/// ```
/// use wordle_cli::core::{LetterStatus, Word, evaluate};
///
/// let answer = Word::new("crane").unwrap();
/// let guess = Word::new("trace").unwrap();
/// let result = evaluate(&answer, &guess);
///
/// assert_eq!(result.statuses()[0], LetterStatus::Absent);
/// assert_eq!(result.statuses()[3], LetterStatus::Present);
/// assert_eq!(result.to_emoji(), "⬜🟩🟩🟨🟩");
/// ```
#[must_use]
pub fn evaluate(answer: &Word, guess: &Word) -> GuessResult {
    Scoring::Containment.evaluate(answer, guess)
}

/// Evaluate raw strings, rejecting anything that is not two 5-letter words
///
/// # Errors
/// Returns `CoreError` if either side has the wrong length or a character outside `a..=z`.
pub fn evaluate_str(answer: &str, guess: &str) -> Result<GuessResult, CoreError> {
    let answer = Word::new(answer)?;
    let guess = Word::new(guess)?;
    Ok(evaluate(&answer, &guess))
}

pub(crate) fn containment_statuses(answer: &Word, guess: &Word) -> [LetterStatus; WORD_LENGTH] {
    std::array::from_fn(|i| {
        let letter = guess.letter_at(i);
        if answer.letter_at(i) == letter {
            LetterStatus::Correct
        } else if answer.contains(letter) {
            LetterStatus::Present
        } else {
            LetterStatus::Absent
        }
    })
}
