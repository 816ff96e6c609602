use crate::core::WordError;
use thiserror::Error;

/// Errors from creating or restarting a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Dictionary is empty; nothing to pick a target from")]
    EmptyDictionary,

    #[error("Dictionary holds {dictionary}-letter words but the game expects {expected}")]
    LengthMismatch { expected: usize, dictionary: usize },

    #[error("Target word '{0}' is not in the dictionary")]
    TargetNotInDictionary(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid target word: {0}")]
    Word(#[from] WordError),
}

/// Reasons a letter is not appended to the current guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LetterRejected {
    #[error("Game over! Start a new game.")]
    GameOver,

    #[error("Row is full")]
    RowFull,

    #[error("'{0}' is not a letter")]
    NotALetter(char),
}
