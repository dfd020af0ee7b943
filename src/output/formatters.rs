//! Formatting utilities for terminal output

use crate::core::{Classification, LetterClass, Word};
use crate::game::{GameStatus, MAX_ATTEMPTS, SessionState};
use colored::{ColoredString, Colorize};

/// Title line used in share text
pub const SHARE_TITLE: &str = "Termo Clone";

/// Build the spoiler-free share text for a session
///
/// ```text
/// Termo Clone 3/6
///
/// ⬛⬛🟨🟨🟩⬛
/// ...
/// ```
///
/// The attempt count is `X` unless the game was won.
#[must_use]
pub fn share_text(state: &SessionState) -> String {
    let score = if state.status() == GameStatus::Won {
        state.attempts().to_string()
    } else {
        "X".to_string()
    };

    let grid: Vec<String> = state
        .history()
        .iter()
        .map(|record| record.classification().to_emoji())
        .collect();

    format!("{SHARE_TITLE} {score}/{MAX_ATTEMPTS}\n\n{}", grid.join("\n"))
}

/// Render one letter as a coloured tile
#[must_use]
pub fn letter_tile(letter: u8, class: Option<LetterClass>) -> ColoredString {
    let text = format!(" {} ", (letter as char).to_ascii_uppercase());
    match class {
        Some(LetterClass::Correct) => text.black().on_green().bold(),
        Some(LetterClass::Present) => text.black().on_yellow().bold(),
        Some(LetterClass::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render a scored word as coloured tiles
#[must_use]
pub fn colored_guess(word: &Word, classification: &Classification) -> String {
    word.chars()
        .iter()
        .zip(classification.classes())
        .map(|(&letter, &class)| letter_tile(letter, Some(class)).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
