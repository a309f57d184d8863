//! Win/loss statistics for the games played in one run

use super::{GameStatus, TOTAL_GUESSES};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by guess count (index 0 unused)
    pub guess_distribution: [usize; TOTAL_GUESSES + 1],
}

impl Statistics {
    /// Count a finished game; unfinished games are ignored
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::InProgress { .. } => {}
            GameStatus::Won { guesses } => {
                self.total_games += 1;
                self.games_won += 1;
                if guesses <= TOTAL_GUESSES {
                    self.guess_distribution[guesses] += 1;
                }
            }
            GameStatus::Lost => self.total_games += 1,
        }
    }

    /// Percentage of games won (0-100)
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // game counts stay far below 2^52
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats() {
        let stats = Statistics::default();
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn record_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(GameStatus::Won { guesses: 3 });
        stats.record(GameStatus::Won { guesses: 3 });
        stats.record(GameStatus::Lost);
        stats.record(GameStatus::Won { guesses: 1 });

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[1], 1);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn in_progress_is_not_counted() {
        let mut stats = Statistics::default();
        stats.record(GameStatus::InProgress { remaining: 2 });
        assert_eq!(stats, Statistics::default());
    }
}
