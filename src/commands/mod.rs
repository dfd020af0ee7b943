//! Command implementations

pub mod score;
pub mod simple;
pub mod simulate;

pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
pub use simulate::{GameOutcome, SimulationConfig, SimulationResult, play_game, run_simulation};
