//! Word dictionary
//!
//! The set of accepted words, which doubles as the pool secrets are drawn from.

use crate::core::Word;
use rand::{Rng, RngCore};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Source of valid words for a session
pub trait Dictionary {
    /// Check whether a guess is an accepted word
    fn contains(&self, word: &Word) -> bool;

    /// Pick a secret word uniformly at random
    fn random_word(&self, rng: &mut dyn RngCore) -> Word;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("Word list is empty")]
    Empty,
}

/// Dictionary backed by an in-memory word list
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a dictionary from a list of words
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no words are given, since a secret
    /// could never be drawn.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// All words in insertion order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    fn random_word(&self, rng: &mut dyn RngCore) -> Word {
        let idx = rng.random_range(0..self.words.len());
        self.words[idx].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> WordList {
        WordList::new(words_from_slice(words)).unwrap()
    }

    #[test]
    fn empty_list_rejected() {
        assert_eq!(WordList::new(Vec::new()).unwrap_err(), DictionaryError::Empty);
    }

    #[test]
    fn contains_is_case_insensitive_through_word() {
        let dict = list(&["garden", "planet"]);
        assert!(dict.contains(&Word::new("GARDEN").unwrap()));
        assert!(!dict.contains(&Word::new("cabelo").unwrap()));
    }

    #[test]
    fn duplicates_dropped() {
        let dict = list(&["garden", "planet", "garden"]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.words()[0].text(), "garden");
    }

    #[test]
    fn random_word_comes_from_list() {
        let dict = list(&["garden", "planet", "cabelo"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = dict.random_word(&mut rng);
            assert!(dict.contains(&word));
        }
    }

    #[test]
    fn random_word_reaches_every_entry() {
        let dict = list(&["garden", "planet", "cabelo"]);
        let mut rng = StdRng::seed_from_u64(42);
        let seen: FxHashSet<Word> = (0..200).map(|_| dict.random_word(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }
}
