//! Values reported back to the presentation layer

use crate::core::{GuessResult, Word};
use std::fmt;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost are terminal
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submission was not consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    GameAlreadyOver,
    WrongLength { expected: usize },
    NotInDictionary,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameAlreadyOver => write!(f, "Game over! Start a new game."),
            Self::WrongLength { expected } => write!(f, "Enter {expected} letters"),
            Self::NotInDictionary => write!(f, "Not in word list"),
        }
    }
}

/// Result of [`Session::submit_guess`](super::Session::submit_guess)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was consumed; history and current guess are unchanged
    Rejected(RejectReason),
    /// Guess accepted, attempts remain
    Continue(GuessResult),
    /// Guess matched the target
    Won(GuessResult),
    /// Last attempt used without a match; the target is revealed
    Lost { result: GuessResult, target: Word },
}

impl Outcome {
    /// The evaluation, for every accepted guess
    #[must_use]
    pub fn result(&self) -> Option<&GuessResult> {
        match self {
            Self::Rejected(_) => None,
            Self::Continue(result) | Self::Won(result) | Self::Lost { result, .. } => Some(result),
        }
    }

    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
