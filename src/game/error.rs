//! Errors reported by session operations
//!
//! All of them are local: the session state is left exactly as it was.

use crate::core::WORD_LENGTH;
use thiserror::Error;

/// A rejected player action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Submitted with fewer than `WORD_LENGTH` letters typed
    #[error("Palavra incompleta ({len}/{WORD_LENGTH} letras)")]
    IncompleteGuess { len: usize },

    /// The typed word is not in the dictionary
    #[error("Palavra não existe: {}", word.to_uppercase())]
    NotInDictionary { word: String },

    #[error("Palavra já tem {WORD_LENGTH} letras")]
    BufferFull,

    #[error("Nada para apagar")]
    BufferEmpty,

    /// Anything but a single ASCII letter
    #[error("Letra inválida: {0:?}")]
    InvalidLetter(char),

    /// The session already ended in a win or a loss
    #[error("O jogo já terminou")]
    GameOver,
}
