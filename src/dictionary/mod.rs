//! Dictionaries of acceptable words
//!
//! A [`Dictionary`] is normalized once when it is built (trimmed, lowercased,
//! filtered to a single word length, deduplicated), so membership checks are
//! plain set lookups.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Set of words of one fixed length
#[derive(Debug, Clone)]
pub struct Dictionary {
    word_length: usize,
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Each entry is trimmed and lowercased; entries that are not purely
    /// alphabetic or not exactly `word_length` letters are dropped, as are
    /// duplicates. Insertion order of the first occurrence is kept.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words([" Crane", "slate", "toolong", "crane"], 5);
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_words<I, S>(entries: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for entry in entries {
            let Ok(word) = Word::with_length(entry.as_ref().trim(), word_length) else {
                continue;
            };
            if index.insert(word.clone()) {
                words.push(word);
            }
        }

        Self {
            word_length,
            words,
            index,
        }
    }

    /// Build a dictionary from newline-delimited text
    #[must_use]
    pub fn from_text(text: &str, word_length: usize) -> Self {
        Self::from_words(text.lines(), word_length)
    }

    /// The word list compiled into the binary, filtered to `word_length`
    ///
    /// The embedded list only holds five-letter words, so other lengths
    /// yield an empty dictionary.
    #[must_use]
    pub fn embedded(word_length: usize) -> Self {
        Self::from_words(WORDS, word_length)
    }

    /// Direct set-membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Pick a word uniformly at random
    ///
    /// Returns `None` if the dictionary is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in load order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_keeps_every_word() {
        let dictionary = Dictionary::embedded(5);
        assert_eq!(dictionary.len(), WORDS_COUNT);
        assert!(dictionary.contains(&Word::new("crane").unwrap()));
        assert!(Dictionary::embedded(6).is_empty());
    }

    #[test]
    fn from_words_normalizes_and_dedups() {
        let dictionary =
            Dictionary::from_words(["  CRANE ", "crane", "slate", "cr4ne", "abc", ""], 5);

        assert_eq!(dictionary.len(), 2);
        let texts: Vec<&str> = dictionary.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn from_text_splits_lines() {
        let dictionary = Dictionary::from_text("crane\r\nslate\n\nirate", 5);
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains(&Word::new("irate").unwrap()));
        assert!(!dictionary.contains(&Word::new("stone").unwrap()));
    }

    #[test]
    fn choose_returns_member() {
        let dictionary = Dictionary::from_words(["crane", "slate", "irate"], 5);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = dictionary.choose(&mut rng).unwrap();
            assert!(dictionary.contains(word));
        }
    }

    #[test]
    fn choose_is_reproducible_with_seed() {
        let dictionary = Dictionary::embedded(5);
        let a = dictionary.choose(&mut StdRng::seed_from_u64(42)).cloned();
        let b = dictionary.choose(&mut StdRng::seed_from_u64(42)).cloned();
        assert_eq!(a, b);
    }

    #[test]
    fn choose_empty_is_none() {
        let dictionary = Dictionary::from_words(Vec::<String>::new(), 5);
        assert!(dictionary.choose(&mut StdRng::seed_from_u64(1)).is_none());
    }
}
