//! In-memory statistics for the games played in one process

use super::GameStatus;

/// Win/loss record and guess distribution
///
/// Nothing is persisted; a new process starts from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n - 1]` counts games won in `n` attempts
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
            guess_distribution: vec![0; max_attempts],
        }
    }

    /// Record a finished game
    ///
    /// `InProgress` is ignored.
    pub fn record(&mut self, status: GameStatus, attempts: usize) {
        match status {
            GameStatus::InProgress => return,
            GameStatus::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = attempts
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            GameStatus::Lost => self.current_streak = 0,
        }
        self.games_played += 1;
    }

    /// Percentage of games won (0 when nothing was played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
