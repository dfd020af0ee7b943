//! Score a single guess against a chosen secret

use crate::core::{Classification, Word, WordError};

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub classification: Classification,
}

/// Classify `guess` against `secret`
///
/// Dictionary membership is not checked: any two six-letter words can be
/// scored.
///
/// # Errors
///
/// Returns an error if either word is not six ASCII letters.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let classification = Classification::classify(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        classification,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_normalizes_case() {
        let result = score_guess("ABACAB", "aabbcc").unwrap();
        assert_eq!(result.secret.text(), "abacab");
        assert_eq!(result.classification.to_emoji(), "🟩🟨🟨⬛🟨⬛");
    }

    #[test]
    fn score_rejects_bad_words() {
        assert_eq!(
            score_guess("garden", "plan").err(),
            Some(WordError::InvalidLength(4))
        );
        assert!(score_guess("gard3n", "planet").is_err());
    }
}
