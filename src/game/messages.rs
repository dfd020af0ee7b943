//! Win messages

use super::MAX_ATTEMPTS;

/// Messages for a win on attempt 1, 2, ... `MAX_ATTEMPTS`
pub const WIN_MESSAGES: [&str; MAX_ATTEMPTS] = [
    "Gênio!",
    "Magnífico!",
    "Impressionante!",
    "Esplêndido!",
    "Muito bom!",
    "Ufa!",
];

/// Used for any attempt number outside `WIN_MESSAGES`
pub const FALLBACK_WIN_MESSAGE: &str = "Parabéns!";

/// Pick the message for a win on the given 1-indexed attempt
///
/// # Examples
/// ```
/// use termo::game::win_message;
///
/// assert_eq!(win_message(1), "Gênio!");
/// assert_eq!(win_message(6), "Ufa!");
/// assert_eq!(win_message(9), "Parabéns!");
/// ```
#[must_use]
pub fn win_message(attempt: usize) -> &'static str {
    attempt
        .checked_sub(1)
        .and_then(|idx| WIN_MESSAGES.get(idx))
        .copied()
        .unwrap_or(FALLBACK_WIN_MESSAGE)
}
