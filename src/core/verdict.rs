//! Per-letter verdicts and the result of a single guess
//!
//! A [`GuessResult`] holds one [`LetterVerdict`] per position of the guess:
//! - Absent (letter not in the target, or all its occurrences already credited)
//! - Present (letter in the target, wrong position)
//! - Correct (letter in the correct position)

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Classification of one letter of a submitted guess
///
/// The derived ordering is the keyboard precedence: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterVerdict {
    Absent,
    Present,
    Correct,
}

impl LetterVerdict {
    /// Single-character symbol (`G`, `Y`, `-`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse one feedback character
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for LetterVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing a feedback string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseResultError {
    #[error("Feedback string is empty")]
    Empty,
    #[error("Invalid feedback character '{0}' (use G/Y/- or 🟩🟨⬜)")]
    InvalidChar(char),
}

/// Verdicts for every position of one submitted guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    verdicts: Vec<LetterVerdict>,
}

impl GuessResult {
    /// Wrap an already computed verdict sequence
    #[must_use]
    pub const fn from_verdicts(verdicts: Vec<LetterVerdict>) -> Self {
        Self { verdicts }
    }

    /// All verdicts in position order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.verdicts
    }

    /// Verdict at a position, if in range
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<LetterVerdict> {
        self.verdicts.get(position).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.verdicts.is_empty() && self.verdicts.iter().all(|&v| v == LetterVerdict::Correct)
    }

    /// Number of Correct verdicts
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterVerdict::Correct)
    }

    /// Number of Present verdicts
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterVerdict::Present)
    }

    fn count(&self, verdict: LetterVerdict) -> usize {
        self.verdicts.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert the result to an emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::GuessResult;
    ///
    /// let result: GuessResult = "GY-GY".parse().unwrap();
    /// assert_eq!(result.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.verdicts {
            write!(f, "{}", verdict.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for GuessResult {
    type Err = ParseResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseResultError::Empty);
        }

        let verdicts = s
            .chars()
            .map(|ch| LetterVerdict::from_char(ch).ok_or(ParseResultError::InvalidChar(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { verdicts })
    }
}
