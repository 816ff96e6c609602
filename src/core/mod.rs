//! Core domain types for the game
//!
//! Words, verdicts and the guess evaluator. Everything here is pure: no I/O,
//! no randomness, no session state.

mod evaluator;
mod keyboard;
mod verdict;
mod word;

pub use evaluator::evaluate;
pub use keyboard::KeyboardStatus;
pub use verdict::{GuessResult, LetterVerdict, ParseResultError};
pub use word::{Word, WordError};
