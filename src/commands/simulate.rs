//! Simulation command
//!
//! Plays many games with a simple automatic player to exercise the session
//! engine and show what the statistics look like over time.

use crate::core::{Classification, Word};
use crate::game::{GameStatus, Session, Statistics, WordList};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    /// Base seed; game `i` uses `seed + i`. Random when unset.
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize) -> Self {
        Self {
            games,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a simulation run
pub struct SimulationResult {
    pub stats: Statistics,
    /// Mean attempts over won games, `None` without wins
    pub average_attempts: Option<f64>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Outcome of one simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub status: GameStatus,
    pub attempts: usize,
}

/// Play `config.games` games in parallel and aggregate their statistics
///
/// Outcomes are folded in game order, so streaks match a player who played
/// the games one after another.
#[must_use]
pub fn run_simulation(words: &WordList, config: &SimulationConfig) -> SimulationResult {
    let base_seed = config.seed.unwrap_or_else(rand::random);
    info!(games = config.games, base_seed, "Starting simulation");

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let outcomes: Vec<GameOutcome> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let outcome = play_game(words, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_with_message("done");
    let duration = start.elapsed();

    let mut stats = Statistics::default();
    let mut won_attempts = 0usize;
    for outcome in &outcomes {
        stats.record(outcome.status, outcome.attempts);
        if outcome.status == GameStatus::Won {
            won_attempts += outcome.attempts;
        }
    }

    let average_attempts =
        (stats.games_won > 0).then(|| won_attempts as f64 / f64::from(stats.games_won));

    SimulationResult {
        stats,
        average_attempts,
        duration,
        games_per_second: config.games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Play one game, always guessing a word consistent with every clue so far
#[must_use]
pub fn play_game(words: &WordList, rng: &mut StdRng) -> GameOutcome {
    let mut session = Session::new_with(words, rng);
    let mut candidates: Vec<&Word> = words.words().iter().collect();

    while session.status() == GameStatus::InProgress {
        // The secret always stays consistent, so this never runs dry
        let Some(&guess) = candidates.choose(rng) else {
            break;
        };

        for &letter in guess.chars() {
            if session.append_letter(letter as char).is_err() {
                break;
            }
        }
        let Ok(outcome) = session.submit_guess() else {
            break;
        };

        let clue = *outcome.record.classification();
        candidates.retain(|candidate| Classification::classify(candidate, guess) == clue);
    }

    GameOutcome {
        status: session.status(),
        attempts: session.state().attempts(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_ATTEMPTS;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn word_list() -> WordList {
        WordList::new(words_from_slice(WORDS)).unwrap()
    }

    #[test]
    fn play_game_always_finishes() {
        let words = word_list();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = play_game(&words, &mut rng);
            assert!(outcome.status.is_over());
            assert!((1..=MAX_ATTEMPTS).contains(&outcome.attempts));
            if outcome.status == GameStatus::Lost {
                assert_eq!(outcome.attempts, MAX_ATTEMPTS);
            }
        }
    }

    #[test]
    fn single_word_dictionary_wins_first_try() {
        let words = WordList::new(words_from_slice(&["garden"])).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = play_game(&words, &mut rng);
        assert_eq!(
            outcome,
            GameOutcome {
                status: GameStatus::Won,
                attempts: 1
            }
        );
    }

    #[test]
    fn simulation_counts_every_game() {
        let words = word_list();
        let config = SimulationConfig {
            games: 40,
            seed: Some(7),
            show_progress: false,
        };
        let result = run_simulation(&words, &config);

        assert_eq!(result.stats.games_played, 40);
        let wins: u32 = result.stats.distribution.iter().sum();
        assert_eq!(wins, result.stats.games_won);
        assert!(result.stats.longest_streak <= result.stats.games_won);
    }

    #[test]
    fn simulation_is_reproducible_with_seed() {
        let words = word_list();
        let config = SimulationConfig {
            games: 25,
            seed: Some(99),
            show_progress: false,
        };
        let a = run_simulation(&words, &config);
        let b = run_simulation(&words, &config);
        assert_eq!(a.stats, b.stats);
    }
}
