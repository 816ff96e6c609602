//! Game session
//!
//! Drives one game at a time: target selection, letter input, submission
//! validation and termination. Results are returned as values; nothing here
//! renders or reads input.

mod config;
mod error;
mod outcome;
mod session;
mod statistics;

pub use config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig, MAX_WORD_LENGTH};
pub use error::{GameError, LetterRejected};
pub use outcome::{GameStatus, Outcome, RejectReason};
pub use session::{GuessRecord, Session};
pub use statistics::Statistics;
