//! Game configuration

use super::GameError;

/// Word length of the classic game
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Attempts allowed in the classic game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Longest word length accepted by [`GameConfig::new`]
pub const MAX_WORD_LENGTH: usize = 15;

/// Fixed parameters of one game: word length (L) and attempt limit (R)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_attempts: usize,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if `word_length` is outside
    /// `1..=MAX_WORD_LENGTH` or `max_attempts` is zero.
    pub fn new(word_length: usize, max_attempts: usize) -> Result<Self, GameError> {
        if !(1..=MAX_WORD_LENGTH).contains(&word_length) {
            return Err(GameError::InvalidConfig(format!(
                "word length must be between 1 and {MAX_WORD_LENGTH}, got {word_length}"
            )));
        }
        if max_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "at least one attempt is required".to_string(),
            ));
        }

        Ok(Self {
            word_length,
            max_attempts,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic() {
        let config = GameConfig::default();
        assert_eq!(config.word_length(), 5);
        assert_eq!(config.max_attempts(), 6);
    }

    #[test]
    fn new_accepts_valid() {
        let config = GameConfig::new(6, 8).unwrap();
        assert_eq!(config.word_length(), 6);
        assert_eq!(config.max_attempts(), 8);
    }

    #[test]
    fn new_rejects_invalid() {
        assert!(matches!(
            GameConfig::new(0, 6),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(MAX_WORD_LENGTH + 1, 6),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(5, 0),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
