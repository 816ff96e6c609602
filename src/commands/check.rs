//! Guess checking command
//!
//! Evaluates a single guess against a chosen target word.

use crate::core::{GuessResult, Word, WordError, evaluate};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub result: GuessResult,
}

/// Evaluate `guess` against `target`
///
/// Neither word has to be in a dictionary, but both must be valid words of
/// the same length.
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess.trim())?;
    let target = Word::new(target.trim())?;
    let result = evaluate(&guess, &target)?;

    Ok(CheckResult {
        guess,
        target,
        result,
    })
}
