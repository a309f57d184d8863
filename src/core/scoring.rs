//! Duplicate-letter scoring policies
//!
//! `Containment` is the classic terminal behaviour: a guess letter is Present
//! whenever the answer contains it anywhere. `Standard` is the official rule
//! where each answer letter satisfies at most one guess letter.

use super::feedback::containment_statuses;
use super::{GuessResult, LetterStatus, WORD_LENGTH, Word};

/// How repeated letters are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scoring {
    /// Presence checked against the whole answer (default)
    #[default]
    Containment,
    /// Greens first, then yellows from the remaining letter pool
    Standard,
}

impl Scoring {
    /// Create scoring from name string
    ///
    /// Supported names: "containment", "simple", "standard", "official".
    /// Defaults to containment if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "standard" | "official" => Self::Standard,
            _ => Self::Containment,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Containment => "containment",
            Self::Standard => "standard",
        }
    }

    /// Evaluate `guess` against `answer` under this policy
    #[must_use]
    pub fn evaluate(self, answer: &Word, guess: &Word) -> GuessResult {
        let statuses = match self {
            Self::Containment => containment_statuses(answer, guess),
            Self::Standard => standard_statuses(answer, guess),
        };
        GuessResult::from_statuses(guess, statuses)
    }
}

fn standard_statuses(answer: &Word, guess: &Word) -> [LetterStatus; WORD_LENGTH] {
    let mut result = [LetterStatus::Absent; WORD_LENGTH];
    let mut available = answer.letter_counts();

    // First pass: exact matches consume their letter
    for (i, status) in result.iter_mut().enumerate() {
        let letter = guess.letter_at(i);
        if answer.letter_at(i) == letter {
            *status = LetterStatus::Correct;
            available[letter.index()] -= 1;
        }
    }

    // Second pass: yellows from whatever is left
    for (i, status) in result.iter_mut().enumerate() {
        if *status == LetterStatus::Correct {
            continue;
        }
        let count = &mut available[guess.letter_at(i).index()];
        if *count > 0 {
            *status = LetterStatus::Present;
            *count -= 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    fn statuses(scoring: Scoring, answer: &str, guess: &str) -> [LetterStatus; WORD_LENGTH] {
        let answer = Word::new(answer).unwrap();
        let guess = Word::new(guess).unwrap();
        scoring.evaluate(&answer, &guess).statuses()
    }

    #[test]
    fn from_name_defaults_to_containment() {
        assert_eq!(Scoring::from_name("standard"), Scoring::Standard);
        assert_eq!(Scoring::from_name("official"), Scoring::Standard);
        assert_eq!(Scoring::from_name("simple"), Scoring::Containment);
        assert_eq!(Scoring::from_name("whatever"), Scoring::Containment);
        assert_eq!(Scoring::default(), Scoring::Containment);
    }

    #[test]
    fn policies_agree_without_duplicates() {
        for (answer, guess) in [("crane", "trace"), ("slate", "crane"), ("crane", "light")] {
            assert_eq!(
                statuses(Scoring::Containment, answer, guess),
                statuses(Scoring::Standard, answer, guess),
                "{answer} vs {guess}"
            );
        }
    }

    #[test]
    fn standard_consumes_answer_letters() {
        // only the final 'e' of "eerie" is matched, the pool is then empty
        assert_eq!(
            statuses(Scoring::Standard, "crane", "eerie"),
            [Absent, Absent, Present, Absent, Correct]
        );
        assert_eq!(
            statuses(Scoring::Containment, "crane", "eerie"),
            [Present, Present, Present, Absent, Correct]
        );
    }

    #[test]
    fn standard_speed_vs_erase() {
        assert_eq!(
            statuses(Scoring::Standard, "erase", "speed"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn standard_green_takes_priority() {
        assert_eq!(
            statuses(Scoring::Standard, "floor", "robot"),
            [Present, Present, Absent, Correct, Absent]
        );
    }
}
