//! Guess scoring
//!
//! A classification holds one verdict per letter of a guess, computed against
//! the secret word:
//! - Correct: letter in the right position
//! - Present: letter in the secret word, but elsewhere
//! - Absent: letter not in the secret word (or all its occurrences already used)

use super::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict for a single letter position
///
/// Ordered by strength, so `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterClass {
    Absent,
    Present,
    Correct,
}

impl LetterClass {
    /// Emoji square used in share text and history displays
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Per-position classification of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification([LetterClass; WORD_LENGTH]);

impl Classification {
    /// Every position correct
    pub const PERFECT: Self = Self([LetterClass::Correct; WORD_LENGTH]);

    /// Score `guess` against `secret`
    ///
    /// Exact matches take absolute priority over misplaced letters, so a
    /// duplicated letter is never reported more often than it occurs in the
    /// secret word.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches and remove them from the available pool
    /// 2. Second pass: Mark misplaced letters left to right while the pool lasts
    ///
    /// # Examples
    /// ```
    /// use termo::core::{Classification, LetterClass::*, Word};
    ///
    /// let secret = Word::new("abacab").unwrap();
    /// let guess = Word::new("aabbcc").unwrap();
    ///
    /// assert_eq!(
    ///     Classification::classify(&secret, &guess).classes(),
    ///     &[Correct, Present, Present, Absent, Present, Absent]
    /// );
    /// ```
    #[must_use]
    pub fn classify(secret: &Word, guess: &Word) -> Self {
        let mut result = [LetterClass::Absent; WORD_LENGTH];
        let mut secret_available = secret.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == secret.char_at(i) {
                result[i] = LetterClass::Correct;

                if let Some(count) = secret_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from what is left
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterClass::Correct {
                continue;
            }
            if let Some(count) = secret_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterClass::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Verdicts in position order
    #[inline]
    #[must_use]
    pub const fn classes(&self) -> &[LetterClass; WORD_LENGTH] {
        &self.0
    }

    /// Verdict at a position
    ///
    /// # Panics
    /// Panics if position >= `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterClass {
        self.0[position]
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&c| c == LetterClass::Correct).count()
    }

    /// Count the misplaced letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&c| c == LetterClass::Present).count()
    }

    /// Convert to an emoji row like "🟩🟨⬛⬛🟨⬛"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
