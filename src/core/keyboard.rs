//! Best verdict seen per letter, as shown on the on-screen keyboard

use super::{GuessResult, LetterVerdict, Word};

const ALPHABET_LEN: usize = 26;

/// Best verdict observed for each letter `a..=z`
///
/// A letter only ever moves up the precedence `Absent < Present < Correct`;
/// once Correct it stays Correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardStatus {
    letters: [Option<LetterVerdict>; ALPHABET_LEN],
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Project a guess history onto the keyboard
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{KeyboardStatus, LetterVerdict, Word, evaluate};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let result = evaluate(&guess, &target).unwrap();
    ///
    /// let keyboard = KeyboardStatus::from_history([(&guess, &result)]);
    /// assert_eq!(keyboard.get('r'), Some(LetterVerdict::Correct));
    /// assert_eq!(keyboard.get('c'), Some(LetterVerdict::Present));
    /// assert_eq!(keyboard.get('t'), Some(LetterVerdict::Absent));
    /// assert_eq!(keyboard.get('z'), None);
    /// ```
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a GuessResult)>,
    {
        let mut status = Self::new();
        for (guess, result) in history {
            status.record_guess(guess, result);
        }
        status
    }

    /// Fold every letter of one evaluated guess into the table
    pub fn record_guess(&mut self, guess: &Word, result: &GuessResult) {
        for (&letter, &verdict) in guess.letters().iter().zip(result.verdicts()) {
            self.record(char::from(letter), verdict);
        }
    }

    /// Record a verdict for a letter, keeping the best one seen
    ///
    /// Non-letters are ignored.
    pub fn record(&mut self, letter: char, verdict: LetterVerdict) {
        if let Some(slot) = Self::index(letter).map(|i| &mut self.letters[i]) {
            *slot = Some(slot.map_or(verdict, |seen| seen.max(verdict)));
        }
    }

    /// Best verdict seen for a letter (case-insensitive)
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterVerdict> {
        Self::index(letter).and_then(|i| self.letters[i])
    }

    /// Letters with a recorded verdict, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterVerdict)> + '_ {
        (b'a'..=b'z')
            .zip(self.letters.iter())
            .filter_map(|(letter, verdict)| verdict.map(|v| (char::from(letter), v)))
    }

    fn index(letter: char) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_lowercase() as u8 - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;
    use LetterVerdict::{Absent, Correct, Present};

    fn play(keyboard: &mut KeyboardStatus, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        let result = evaluate(&guess, &target).unwrap();
        keyboard.record_guess(&guess, &result);
    }

    #[test]
    fn empty_keyboard_has_no_verdicts() {
        let keyboard = KeyboardStatus::new();
        assert_eq!(keyboard.iter().count(), 0);
        assert_eq!(keyboard.get('a'), None);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = KeyboardStatus::new();
        keyboard.record('a', Correct);
        keyboard.record('a', Present);
        keyboard.record('a', Absent);
        assert_eq!(keyboard.get('a'), Some(Correct));
    }

    #[test]
    fn present_upgrades_to_correct_only() {
        let mut keyboard = KeyboardStatus::new();
        keyboard.record('b', Absent);
        keyboard.record('b', Present);
        assert_eq!(keyboard.get('b'), Some(Present));
        keyboard.record('b', Absent);
        assert_eq!(keyboard.get('b'), Some(Present));
        keyboard.record('b', Correct);
        assert_eq!(keyboard.get('b'), Some(Correct));
    }

    #[test]
    fn duplicate_letter_in_one_guess_keeps_best() {
        // LOLLY vs ALLOT: the L's are Present, Correct and Absent
        let mut keyboard = KeyboardStatus::new();
        play(&mut keyboard, "lolly", "allot");
        assert_eq!(keyboard.get('l'), Some(Correct));
        assert_eq!(keyboard.get('o'), Some(Present));
        assert_eq!(keyboard.get('y'), Some(Absent));
    }

    #[test]
    fn monotone_across_guesses() {
        let mut keyboard = KeyboardStatus::new();
        play(&mut keyboard, "crane", "crane");
        play(&mut keyboard, "nacre", "crane");
        for letter in ['c', 'r', 'a', 'n', 'e'] {
            assert_eq!(keyboard.get(letter), Some(Correct));
        }
    }

    #[test]
    fn uppercase_and_non_letters() {
        let mut keyboard = KeyboardStatus::new();
        keyboard.record('Q', Present);
        keyboard.record('1', Correct);
        assert_eq!(keyboard.get('q'), Some(Present));
        assert_eq!(keyboard.get('Q'), Some(Present));
        assert_eq!(keyboard.get('1'), None);
        assert_eq!(keyboard.iter().collect::<Vec<_>>(), vec![('q', Present)]);
    }
}
