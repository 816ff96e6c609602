//! Guess evaluation
//!
//! Implements the feedback rules, including proper handling of duplicate
//! letters.

use super::{GuessResult, LetterVerdict, Word, WordError};

/// Evaluate `guess` against `target`
///
/// # Algorithm
/// 1. Count every letter of the target
/// 2. First pass: mark exact matches Correct and remove them from the pool
/// 3. Second pass: mark remaining letters Present while the pool still holds
///    that letter, otherwise Absent
///
/// Exact matches are reserved before any Present credit is handed out, so a
/// guess never receives more credits for a letter than the target contains.
///
/// # Errors
/// Returns `WordError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, evaluate};
///
/// let guess = Word::new("trace").unwrap();
/// let target = Word::new("crane").unwrap();
/// let result = evaluate(&guess, &target).unwrap();
///
/// // T(absent) R(correct) A(correct) C(present) E(correct)
/// assert_eq!(result.to_string(), "-GGYG");
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> Result<GuessResult, WordError> {
    if guess.len() != target.len() {
        return Err(WordError::LengthMismatch {
            expected: target.len(),
            actual: guess.len(),
        });
    }

    let mut verdicts = vec![LetterVerdict::Absent; guess.len()];
    let mut remaining = target.letter_counts();

    for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
        if g == t {
            verdicts[i] = LetterVerdict::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, &g) in guess.letters().iter().enumerate() {
        if verdicts[i] == LetterVerdict::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            verdicts[i] = LetterVerdict::Present;
            *count -= 1;
        }
    }

    Ok(GuessResult::from_verdicts(verdicts))
}
