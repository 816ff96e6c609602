//! Game session state machine
//!
//! A [`Session`] owns the target word, the history of evaluated guesses and
//! the guess currently being typed. It borrows the dictionary it was created
//! from; the caller keeps the dictionary alive for the session's lifetime.

use super::{GameConfig, GameError, GameStatus, LetterRejected, Outcome, RejectReason};
use crate::core::{GuessResult, KeyboardStatus, Word, evaluate};
use crate::dictionary::Dictionary;
use rand::Rng;

/// One accepted guess and its evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub result: GuessResult,
}

/// A single game: `InProgress` until it is `Won` or `Lost`
///
/// # Examples
/// ```
/// use wordle_game::dictionary::Dictionary;
/// use wordle_game::game::{GameConfig, Outcome, Session};
///
/// let dictionary = Dictionary::from_words(["crane", "trace", "slate"], 5);
/// let mut session = Session::with_target(&dictionary, GameConfig::default(), "crane").unwrap();
///
/// for letter in "trace".chars() {
///     session.append_letter(letter).unwrap();
/// }
/// assert!(matches!(session.submit_guess(), Outcome::Continue(_)));
///
/// for letter in "crane".chars() {
///     session.append_letter(letter).unwrap();
/// }
/// assert!(matches!(session.submit_guess(), Outcome::Won(_)));
/// ```
#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    config: GameConfig,
    target: Word,
    history: Vec<GuessRecord>,
    current: String,
    status: GameStatus,
}

impl<'a> Session<'a> {
    /// Start a session with a target drawn from the thread-local RNG
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if there is nothing to sample, or
    /// `GameError::LengthMismatch` if the dictionary's word length differs
    /// from the configuration.
    pub fn new(dictionary: &'a Dictionary, config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(dictionary, config, &mut rand::rng())
    }

    /// Start a session with a target drawn from `rng`
    ///
    /// # Errors
    /// Same as [`Session::new`].
    pub fn with_rng<R: Rng + ?Sized>(
        dictionary: &'a Dictionary,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let target = pick_target(dictionary, config, rng)?;
        Ok(Self::start(dictionary, config, target))
    }

    /// Start a session with a fixed target
    ///
    /// The target must be a dictionary word, otherwise it could never be
    /// submitted.
    ///
    /// # Errors
    /// Returns `GameError::Word` if the target is not a valid word of the
    /// configured length, `GameError::TargetNotInDictionary` if the dictionary
    /// lacks it, or `GameError::LengthMismatch` as for [`Session::new`].
    pub fn with_target(
        dictionary: &'a Dictionary,
        config: GameConfig,
        target: &str,
    ) -> Result<Self, GameError> {
        check_word_length(dictionary, config)?;
        let target = Word::with_length(target, config.word_length())?;
        if !dictionary.contains(&target) {
            return Err(GameError::TargetNotInDictionary(target.text().to_string()));
        }
        Ok(Self::start(dictionary, config, target))
    }

    fn start(dictionary: &'a Dictionary, config: GameConfig, target: Word) -> Self {
        log::debug!("New game started, target: {target}");
        Self {
            dictionary,
            config,
            target,
            history: Vec::with_capacity(config.max_attempts()),
            current: String::with_capacity(config.word_length()),
            status: GameStatus::InProgress,
        }
    }

    /// Replace the game with a fresh one using the thread-local RNG
    ///
    /// # Errors
    /// Same as [`Session::new`]; on error the current game is left untouched.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.new_game_with_rng(&mut rand::rng())
    }

    /// Replace the game with a fresh one, drawing the target from `rng`
    ///
    /// # Errors
    /// Same as [`Session::new`]; on error the current game is left untouched.
    pub fn new_game_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let target = pick_target(self.dictionary, self.config, rng)?;
        *self = Self::start(self.dictionary, self.config, target);
        Ok(())
    }

    /// Append a letter to the current guess
    ///
    /// ASCII letters are accepted in either case and stored lowercase.
    ///
    /// # Errors
    /// Returns `LetterRejected` without touching any state if the game is
    /// over, the input is not an ASCII letter, or the row is already full.
    pub fn append_letter(&mut self, letter: char) -> Result<(), LetterRejected> {
        if self.status.is_over() {
            return Err(LetterRejected::GameOver);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(LetterRejected::NotALetter(letter));
        }
        if self.current.len() >= self.config.word_length() {
            return Err(LetterRejected::RowFull);
        }

        self.current.push(letter.to_ascii_lowercase());
        Ok(())
    }

    /// Remove and return the last letter of the current guess
    ///
    /// Returns `None` if the current guess is empty.
    pub fn remove_letter(&mut self) -> Option<char> {
        self.current.pop()
    }

    /// Submit the current guess
    ///
    /// Checks, in order: the game is still in progress, the guess has the
    /// configured length, the guess is a dictionary word. A rejected
    /// submission consumes nothing.
    pub fn submit_guess(&mut self) -> Outcome {
        if self.status.is_over() {
            return self.reject(RejectReason::GameAlreadyOver);
        }

        let expected = self.config.word_length();
        let Ok(guess) = Word::with_length(self.current.as_str(), expected) else {
            return self.reject(RejectReason::WrongLength { expected });
        };

        if !self.dictionary.contains(&guess) {
            return self.reject(RejectReason::NotInDictionary);
        }

        let Ok(result) = evaluate(&guess, &self.target) else {
            return self.reject(RejectReason::WrongLength { expected });
        };

        self.current.clear();
        self.history.push(GuessRecord {
            guess,
            result: result.clone(),
        });
        let attempt = self.history.len();

        if result.is_perfect() {
            self.status = GameStatus::Won;
            log::debug!("Game won on attempt {attempt}");
            Outcome::Won(result)
        } else if attempt >= self.config.max_attempts() {
            self.status = GameStatus::Lost;
            log::debug!("Game lost, target was {}", self.target);
            Outcome::Lost {
                result,
                target: self.target.clone(),
            }
        } else {
            log::debug!("Attempt {attempt}: {result}");
            Outcome::Continue(result)
        }
    }

    fn reject(&self, reason: RejectReason) -> Outcome {
        log::debug!("Submission of '{}' rejected: {reason}", self.current);
        Outcome::Rejected(reason)
    }

    /// Best verdict per letter over the whole history
    #[must_use]
    pub fn keyboard_status(&self) -> KeyboardStatus {
        KeyboardStatus::from_history(self.history.iter().map(|r| (&r.guess, &r.result)))
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Accepted guesses in attempt order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Letters typed so far for the next guess
    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts().saturating_sub(self.history.len())
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Explicitly reveal the target, whatever the game state
    #[must_use]
    pub const fn reveal_target(&self) -> &Word {
        &self.target
    }
}

fn check_word_length(dictionary: &Dictionary, config: GameConfig) -> Result<(), GameError> {
    if dictionary.word_length() == config.word_length() {
        Ok(())
    } else {
        Err(GameError::LengthMismatch {
            expected: config.word_length(),
            dictionary: dictionary.word_length(),
        })
    }
}

fn pick_target<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: GameConfig,
    rng: &mut R,
) -> Result<Word, GameError> {
    check_word_length(dictionary, config)?;
    dictionary
        .choose(rng)
        .cloned()
        .ok_or(GameError::EmptyDictionary)
}
