//! Per-letter hints for an on-screen keyboard
//!
//! A letter keeps the strongest verdict it has ever received, so a key that
//! was once correct never fades back to present or absent.

use super::GuessRecord;
use crate::core::LetterClass;
use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyboardHints(FxHashMap<u8, LetterClass>);

impl KeyboardHints {
    #[must_use]
    pub fn from_history(history: &[GuessRecord]) -> Self {
        let mut hints = Self::default();
        for record in history {
            hints.record(record);
        }
        hints
    }

    /// Merge one scored guess into the hints
    pub fn record(&mut self, record: &GuessRecord) {
        let letters = record.word().chars();
        for (&letter, &class) in letters.iter().zip(record.classification().classes()) {
            let entry = self.0.entry(letter).or_insert(class);
            *entry = (*entry).max(class);
        }
    }

    /// Strongest verdict for a letter, `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterClass> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.0.get(&(letter.to_ascii_lowercase() as u8)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn record(secret: &str, guess: &str) -> GuessRecord {
        GuessRecord::score(&Word::new(secret).unwrap(), Word::new(guess).unwrap())
    }

    #[test]
    fn unguessed_letters_have_no_hint() {
        let hints = KeyboardHints::default();
        assert_eq!(hints.get('a'), None);
    }

    #[test]
    fn hints_follow_classification() {
        let hints = KeyboardHints::from_history(&[record("garden", "planet")]);
        assert_eq!(hints.get('e'), Some(LetterClass::Correct));
        assert_eq!(hints.get('A'), Some(LetterClass::Present));
        assert_eq!(hints.get('p'), Some(LetterClass::Absent));
        assert_eq!(hints.get('z'), None);
        assert_eq!(hints.get('1'), None);
    }

    #[test]
    fn hints_never_downgrade() {
        // "garden" vs "garden": everything correct, then "danger" would mark
        // the same letters present; correct must survive.
        let hints =
            KeyboardHints::from_history(&[record("garden", "garden"), record("garden", "danger")]);
        for letter in "garden".chars() {
            assert_eq!(hints.get(letter), Some(LetterClass::Correct), "{letter}");
        }
    }

    #[test]
    fn duplicate_letter_takes_best_position() {
        // second A of "aabbcc" is present, first is correct
        let hints = KeyboardHints::from_history(&[record("abacab", "aabbcc")]);
        assert_eq!(hints.get('a'), Some(LetterClass::Correct));
        // one B present, the other absent
        assert_eq!(hints.get('b'), Some(LetterClass::Present));
    }
}
