//! Answer selection
//!
//! The game asks an `AnswerProvider` for a fresh secret word at the start of
//! every round.

use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Source of secret answers, one per game
pub trait AnswerProvider {
    /// The answer for the next game, or `None` if there is nothing to draw from
    fn next_answer(&mut self) -> Option<Word>;
}

/// Uniform random choice from an answer list
pub struct RandomAnswers {
    answers: Vec<Word>,
    rng: StdRng,
}

impl RandomAnswers {
    /// Random answers seeded from the OS
    #[must_use]
    pub fn new(answers: Vec<Word>) -> Self {
        Self {
            answers,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible answers for a given seed
    #[must_use]
    pub fn seeded(answers: Vec<Word>, seed: u64) -> Self {
        Self {
            answers,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl AnswerProvider for RandomAnswers {
    fn next_answer(&mut self) -> Option<Word> {
        self.answers.choose(&mut self.rng).cloned()
    }
}

/// Always the same answer
pub struct FixedAnswer(pub Word);

impl AnswerProvider for FixedAnswer {
    fn next_answer(&mut self) -> Option<Word> {
        Some(self.0.clone())
    }
}
