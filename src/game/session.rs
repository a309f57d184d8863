//! A single game from first guess to win or loss

use crate::core::{GuessResult, KeyboardState, Scoring, Word};
use thiserror::Error;

/// Guesses allowed per game
pub const TOTAL_GUESSES: usize = 6;

/// Placeholder drawn in grid cells that have not been guessed yet
pub const EMPTY_CELL: char = '*';

/// Errors from driving a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
}

/// Where a session stands after the latest guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { remaining: usize },
    Won { guesses: usize },
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }

    /// Closing line shown once the game is over
    ///
    /// Returns `None` while the game is still running.
    #[must_use]
    pub fn summary(self, answer: &Word) -> Option<String> {
        self.summary_with(answer, str::to_string)
    }

    /// Like [`summary`](Self::summary), with the revealed answer passed
    /// through `highlight` so renderers can colour it
    #[must_use]
    pub fn summary_with(
        self,
        answer: &Word,
        highlight: impl FnOnce(&str) -> String,
    ) -> Option<String> {
        match self {
            Self::InProgress { .. } => None,
            Self::Won { guesses: 1 } => {
                Some("🫨 Woah! You got it right on the first try! Nice!".to_string())
            }
            Self::Won { guesses } => Some(format!("🎉 Correct! You won in {guesses} guesses.")),
            Self::Lost => Some(format!(
                "😓 Sorry, the answer was {}. Try again.",
                highlight(answer.text())
            )),
        }
    }
}

/// State for one game: the answer, the guesses so far and the keyboard
///
/// Built fresh for each game and passed to whatever needs it.
#[derive(Debug, Clone)]
pub struct GameSession {
    answer: Word,
    scoring: Scoring,
    history: Vec<GuessResult>,
    keyboard: KeyboardState,
    status: GameStatus,
}

impl GameSession {
    #[must_use]
    pub fn new(answer: Word, scoring: Scoring) -> Self {
        tracing::debug!(scoring = scoring.name(), "game started");
        Self {
            answer,
            scoring,
            history: Vec::with_capacity(TOTAL_GUESSES),
            keyboard: KeyboardState::new(),
            status: GameStatus::InProgress {
                remaining: TOTAL_GUESSES,
            },
        }
    }

    /// Evaluate a validated guess and fold it into the session
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the game has been won or lost.
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::{Scoring, Word};
    /// use wordle_cli::game::{GameSession, GameStatus};
    ///
    /// let mut session = GameSession::new(Word::new("crane").unwrap(), Scoring::default());
    /// let status = session.submit(&Word::new("crane").unwrap()).unwrap();
    /// assert_eq!(status, GameStatus::Won { guesses: 1 });
    /// ```
    pub fn submit(&mut self, guess: &Word) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let result = self.scoring.evaluate(&self.answer, guess);
        self.keyboard.merge(&result);
        let solved = result.is_solved();
        tracing::debug!(guess = %guess, feedback = %result.to_emoji(), "guess evaluated");
        self.history.push(result);

        let used = self.history.len();
        self.status = if solved {
            GameStatus::Won { guesses: used }
        } else if used >= TOTAL_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress {
                remaining: TOTAL_GUESSES - used,
            }
        };

        if self.status.is_over() {
            tracing::info!(won = solved, guesses = used, "game finished");
        }
        Ok(self.status)
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn scoring(&self) -> Scoring {
        self.scoring
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// All grid rows; rows not guessed yet are `None`
    pub fn grid(&self) -> impl Iterator<Item = Option<&GuessResult>> {
        (0..TOTAL_GUESSES).map(|row| self.history.get(row))
    }

    /// Closing line for a finished game
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.status.summary(&self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, LetterStatus};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn session(answer: &str) -> GameSession {
        GameSession::new(word(answer), Scoring::Containment)
    }

    #[test]
    fn new_session_is_empty() {
        let session = session("crane");
        assert_eq!(session.guesses_used(), 0);
        assert_eq!(
            session.status(),
            GameStatus::InProgress {
                remaining: TOTAL_GUESSES
            }
        );
        assert!(session.grid().all(|row| row.is_none()));
        assert_eq!(session.grid().count(), TOTAL_GUESSES);
        assert_eq!(session.summary(), None);
    }

    #[test]
    fn submit_appends_and_merges() {
        let mut session = session("crane");
        let status = session.submit(&word("light")).unwrap();

        assert_eq!(status, GameStatus::InProgress { remaining: 5 });
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].text(), "light");
        assert_eq!(
            session.keyboard().status_of(Letter::new('l').unwrap()),
            LetterStatus::Absent
        );
        assert_eq!(session.grid().filter(Option::is_some).count(), 1);
    }

    #[test]
    fn winning_on_first_try() {
        let mut session = session("crane");
        assert_eq!(
            session.submit(&word("crane")),
            Ok(GameStatus::Won { guesses: 1 })
        );
        assert!(session.is_over());
        assert_eq!(
            session.summary().unwrap(),
            "🫨 Woah! You got it right on the first try! Nice!"
        );
    }

    #[test]
    fn winning_later() {
        let mut session = session("crane");
        session.submit(&word("light")).unwrap();
        session.submit(&word("trace")).unwrap();
        assert_eq!(
            session.submit(&word("crane")),
            Ok(GameStatus::Won { guesses: 3 })
        );
        assert_eq!(
            session.summary().unwrap(),
            "🎉 Correct! You won in 3 guesses."
        );
    }

    #[test]
    fn losing_after_six_guesses() {
        let mut session = session("crane");
        for _ in 0..TOTAL_GUESSES - 1 {
            assert!(!session.submit(&word("light")).unwrap().is_over());
        }
        assert_eq!(session.submit(&word("moldy")), Ok(GameStatus::Lost));
        assert_eq!(
            session.summary().unwrap(),
            "😓 Sorry, the answer was crane. Try again."
        );
    }

    #[test]
    fn loss_summary_highlights_only_the_answer() {
        let mut session = session("crane");
        for _ in 0..TOTAL_GUESSES {
            session.submit(&word("light")).unwrap();
        }
        let line = session
            .status()
            .summary_with(session.answer(), |answer| format!("<{answer}>"));
        assert_eq!(
            line.unwrap(),
            "😓 Sorry, the answer was <crane>. Try again."
        );
        assert_eq!(
            GameStatus::Won { guesses: 2 }.summary_with(session.answer(), |_| unreachable!()),
            Some("🎉 Correct! You won in 2 guesses.".to_string())
        );
    }

    #[test]
    fn submit_after_game_over_fails() {
        let mut session = session("crane");
        session.submit(&word("crane")).unwrap();
        assert_eq!(session.submit(&word("light")), Err(GameError::GameOver));
        assert_eq!(session.guesses_used(), 1);
    }

    #[test]
    fn standard_scoring_is_used_when_requested() {
        let mut session = GameSession::new(word("crane"), Scoring::Standard);
        session.submit(&word("eerie")).unwrap();
        assert_eq!(
            session.history()[0].statuses()[0],
            LetterStatus::Absent
        );
    }
}
