//! Game configuration resolved from the command line

use crate::core::{Scoring, Word};
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{ANSWERS, AnswerProvider, Dictionary, FixedAnswer, RandomAnswers};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

/// Where accepted guesses come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordlistSource {
    /// Embedded answers plus the embedded allowed list
    #[default]
    Embedded,
    /// Only the embedded answers are accepted as guesses
    AnswersOnly,
    /// Embedded answers plus words read from a file
    File(PathBuf),
}

impl WordlistSource {
    /// Parse the `-w` flag: "embedded" / "all", "answers", or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "all" => Self::Embedded,
            "answers" => Self::AnswersOnly,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Options for a run of games
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub scoring: Scoring,
    pub wordlist: WordlistSource,
    /// Play every game against this word instead of a random one
    pub answer: Option<String>,
    /// Seed for reproducible random answers
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Load the dictionary this configuration points at
    ///
    /// # Errors
    /// Returns an error if a custom word list cannot be read.
    pub fn dictionary(&self) -> Result<Dictionary> {
        let dictionary = match &self.wordlist {
            WordlistSource::Embedded => Dictionary::embedded(),
            WordlistSource::AnswersOnly => Dictionary::answers_only(),
            WordlistSource::File(path) => {
                let extra = load_from_file(path)
                    .with_context(|| format!("failed to read word list {}", path.display()))?;
                tracing::info!(path = %path.display(), words = extra.len(), "loaded word list");
                Dictionary::from_words(words_from_slice(ANSWERS), extra)
            }
        };
        Ok(dictionary)
    }

    /// Build the answer provider for this configuration
    ///
    /// # Errors
    /// Returns an error if the fixed answer is not a 5-letter word or the
    /// dictionary has no answers to draw from.
    pub fn answer_provider(&self, dictionary: &Dictionary) -> Result<Box<dyn AnswerProvider>> {
        if let Some(text) = &self.answer {
            let answer = Word::new(text.as_str())
                .with_context(|| format!("invalid answer '{text}'"))?;
            if !dictionary.is_allowed(answer.text()) {
                tracing::warn!(answer = %answer, "fixed answer is not in the word list");
            }
            return Ok(Box::new(FixedAnswer(answer)));
        }

        if dictionary.answers().is_empty() {
            bail!("no answers available to draw from");
        }

        let answers = dictionary.answers().to_vec();
        Ok(match self.seed {
            Some(seed) => Box::new(RandomAnswers::seeded(answers, seed)),
            None => Box::new(RandomAnswers::new(answers)),
        })
    }
}
