//! Aggregate statistics across games

use super::{GameStatus, MAX_ATTEMPTS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Saved counters that contradict each other
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    #[error("{won} games won out of {played} played")]
    MoreWinsThanGames { won: u32, played: u32 },
    #[error("streaks inconsistent: current {current}, longest {longest}, won {won}")]
    StreakOutOfRange { current: u32, longest: u32, won: u32 },
    #[error("distribution totals {total} wins, expected {won}")]
    DistributionMismatch { total: u64, won: u32 },
}

/// Counters kept across sessions
///
/// Updated exactly once per finished game, never reset implicitly. Saved
/// counters are checked on load; see [`Statistics::validate`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StatisticsRecord")]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// `distribution[i]` counts wins on attempt `i + 1`
    pub distribution: [u32; MAX_ATTEMPTS],
}

/// Wire form of [`Statistics`], validated before use
#[derive(Deserialize)]
struct StatisticsRecord {
    games_played: u32,
    games_won: u32,
    current_streak: u32,
    longest_streak: u32,
    distribution: [u32; MAX_ATTEMPTS],
}

impl TryFrom<StatisticsRecord> for Statistics {
    type Error = StatisticsError;

    fn try_from(record: StatisticsRecord) -> Result<Self, Self::Error> {
        let stats = Self {
            games_played: record.games_played,
            games_won: record.games_won,
            current_streak: record.current_streak,
            longest_streak: record.longest_streak,
            distribution: record.distribution,
        };
        stats.validate()?;
        Ok(stats)
    }
}

impl Statistics {
    /// Check that the counters agree with each other
    ///
    /// `current_streak <= longest_streak <= games_won <= games_played`, and
    /// the distribution sums to `games_won`.
    ///
    /// # Errors
    /// Returns the first `StatisticsError` found.
    pub fn validate(&self) -> Result<(), StatisticsError> {
        if self.games_won > self.games_played {
            return Err(StatisticsError::MoreWinsThanGames {
                won: self.games_won,
                played: self.games_played,
            });
        }
        if self.current_streak > self.longest_streak || self.longest_streak > self.games_won {
            return Err(StatisticsError::StreakOutOfRange {
                current: self.current_streak,
                longest: self.longest_streak,
                won: self.games_won,
            });
        }
        let total: u64 = self.distribution.iter().copied().map(u64::from).sum();
        if total != u64::from(self.games_won) {
            return Err(StatisticsError::DistributionMismatch {
                total,
                won: self.games_won,
            });
        }
        Ok(())
    }

    /// Record a win on the given 1-indexed attempt
    ///
    /// Returns false (and changes nothing) for an attempt outside
    /// `1..=MAX_ATTEMPTS`. Counters saturate instead of overflowing.
    pub fn record_win(&mut self, attempt: usize) -> bool {
        let Some(bucket) = attempt
            .checked_sub(1)
            .and_then(|idx| self.distribution.get_mut(idx))
        else {
            return false;
        };
        *bucket = bucket.saturating_add(1);

        self.games_played = self.games_played.saturating_add(1);
        self.games_won = self.games_won.saturating_add(1);
        self.current_streak = self.current_streak.saturating_add(1);
        self.longest_streak = self.longest_streak.max(self.current_streak);
        true
    }

    pub fn record_loss(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
        self.current_streak = 0;
    }

    /// Apply the transition for a finished game
    ///
    /// Returns false (and changes nothing) for `GameStatus::InProgress` or a
    /// win on an impossible attempt.
    pub fn record(&mut self, status: GameStatus, attempts: usize) -> bool {
        match status {
            GameStatus::Won => self.record_win(attempts),
            GameStatus::Lost => {
                self.record_loss();
                true
            }
            GameStatus::InProgress => false,
        }
    }

    /// Rounded percentage of games won, 0 with no games played
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.games_won) / f64::from(self.games_played) * 100.0).round() as u32
    }

    /// Number of wins on the given 1-indexed attempt
    #[must_use]
    pub fn wins_on(&self, attempt: usize) -> u32 {
        attempt
            .checked_sub(1)
            .and_then(|idx| self.distribution.get(idx))
            .copied()
            .unwrap_or(0)
    }

    /// Largest distribution bucket, for scaling bars
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.distribution.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_updates_all_counters() {
        let mut stats = Statistics::default();
        stats.record_win(3);

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 1);
        assert_eq!(stats.distribution, [0, 0, 1, 0, 0, 0]);
        assert_eq!(stats.wins_on(3), 1);
    }

    #[test]
    fn loss_resets_streak_but_keeps_longest() {
        let mut stats = Statistics::default();
        stats.record_win(1);
        stats.record_win(2);
        stats.record_loss();
        stats.record_win(6);

        assert_eq!(stats.max_bucket(), 1);
        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.distribution, [1, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn out_of_range_attempt_is_ignored() {
        let mut stats = Statistics::default();
        assert!(!stats.record_win(0));
        assert!(!stats.record(GameStatus::Won, MAX_ATTEMPTS + 1));

        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn counters_saturate_at_max() {
        let mut stats = Statistics {
            games_played: u32::MAX,
            games_won: u32::MAX,
            current_streak: u32::MAX,
            longest_streak: u32::MAX,
            distribution: [0, 0, u32::MAX, 0, 0, 0],
        };
        assert!(stats.record_win(3));
        stats.record_loss();

        assert_eq!(stats.games_played, u32::MAX);
        assert_eq!(stats.games_won, u32::MAX);
        assert_eq!(stats.longest_streak, u32::MAX);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.wins_on(3), u32::MAX);
    }

    #[test]
    fn recorded_statistics_validate() {
        let mut stats = Statistics::default();
        assert_eq!(stats.validate(), Ok(()));
        for attempt in [1, 4, 4, 6] {
            stats.record_win(attempt);
        }
        stats.record_loss();
        stats.record_win(2);
        assert_eq!(stats.validate(), Ok(()));
    }

    #[test]
    fn inconsistent_counters_rejected() {
        let json = r#"{"games_played":1,"games_won":5,"current_streak":9,"longest_streak":2,"distribution":[5,0,0,0,0,0]}"#;
        assert!(serde_json::from_str::<Statistics>(json).is_err());

        let mut stats = Statistics::default();
        stats.record_win(1);
        stats.record_win(2);

        let mut bad = stats.clone();
        bad.games_played = 1;
        assert!(matches!(
            bad.validate(),
            Err(StatisticsError::MoreWinsThanGames { .. })
        ));

        let mut bad = stats.clone();
        bad.current_streak = 3;
        assert!(matches!(
            bad.validate(),
            Err(StatisticsError::StreakOutOfRange { .. })
        ));

        let mut bad = stats;
        bad.distribution[5] = 1;
        assert_eq!(
            bad.validate(),
            Err(StatisticsError::DistributionMismatch { total: 3, won: 2 })
        );
    }

    #[test]
    fn record_ignores_in_progress() {
        let mut stats = Statistics::default();
        assert!(!stats.record(GameStatus::InProgress, 2));
        assert_eq!(stats, Statistics::default());

        assert!(stats.record(GameStatus::Lost, MAX_ATTEMPTS));
        assert_eq!(stats.games_played, 1);
    }

    #[test]
    fn win_percentage_rounds() {
        let mut stats = Statistics::default();
        assert_eq!(stats.win_percentage(), 0);

        stats.record_win(2);
        stats.record_win(2);
        stats.record_loss();
        // 2/3 = 66.67%
        assert_eq!(stats.win_percentage(), 67);
    }

    #[test]
    fn serde_round_trip() {
        let mut stats = Statistics::default();
        stats.record_win(5);
        stats.record_loss();

        let json = serde_json::to_string(&stats).unwrap();
        let back: Statistics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn malformed_distribution_rejected() {
        let json = r#"{"games_played":1,"games_won":1,"current_streak":1,"longest_streak":1,"distribution":[1,0]}"#;
        assert!(serde_json::from_str::<Statistics>(json).is_err());
    }
}
