//! Win/loss statistics across rounds

use super::MAX_TURNS;
use thiserror::Error;

/// Aggregated outcomes of every finished round
///
/// Mutated only by round completion; restored from save files as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsTracker {
    played: u32,
    wins: u32,
    current_streak: u32,
    best_streak: u32,
    /// Wins by attempt count; index 0 = solved on the first guess
    distribution: [u32; MAX_TURNS],
}

/// Counters that contradict each other
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("{wins} wins recorded out of {played} games played")]
    WinsExceedPlayed { wins: u32, played: u32 },
    #[error("current streak {current} exceeds best streak {best}")]
    StreakExceedsBest { current: u32, best: u32 },
    #[error("best streak {best} exceeds {wins} wins")]
    BestExceedsWins { best: u32, wins: u32 },
    #[error("guess distribution totals {total}, more than {wins} wins")]
    DistributionExceedsWins { total: u64, wins: u32 },
}

impl StatsTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a tracker from persisted counters
    ///
    /// # Errors
    /// Returns `StatsError` when the counters cannot come from real play.
    pub fn from_counters(
        played: u32,
        wins: u32,
        current_streak: u32,
        best_streak: u32,
        distribution: [u32; MAX_TURNS],
    ) -> Result<Self, StatsError> {
        let stats = Self {
            played,
            wins,
            current_streak,
            best_streak,
            distribution,
        };
        stats.validate()?;
        Ok(stats)
    }

    /// Record a round won on attempt `attempt_count` (1-based)
    ///
    /// A count outside `1..=MAX_TURNS` still counts as a win but fills no
    /// distribution bucket.
    pub fn record_win(&mut self, attempt_count: usize) {
        self.played = self.played.saturating_add(1);
        self.wins = self.wins.saturating_add(1);
        self.current_streak = self.current_streak.saturating_add(1);
        self.best_streak = self.best_streak.max(self.current_streak);
        if let Some(bucket) = attempt_count
            .checked_sub(1)
            .and_then(|i| self.distribution.get_mut(i))
        {
            *bucket = bucket.saturating_add(1);
        }
    }

    /// Record a lost round; resets the current streak
    pub fn record_loss(&mut self) {
        self.played = self.played.saturating_add(1);
        self.current_streak = 0;
    }

    /// Wins as a percentage of games played (0 when nothing was played)
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::rules::StatsTracker;
    ///
    /// let mut stats = StatsTracker::new();
    /// assert_eq!(stats.win_percentage(), 0.0);
    ///
    /// stats.record_win(3);
    /// stats.record_loss();
    /// assert!((stats.win_percentage() - 50.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.played == 0 {
            return 0.0;
        }
        f64::from(self.wins) * 100.0 / f64::from(self.played)
    }

    #[must_use]
    pub const fn played(&self) -> u32 {
        self.played
    }

    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.played.saturating_sub(self.wins)
    }

    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub const fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[must_use]
    pub const fn distribution(&self) -> &[u32; MAX_TURNS] {
        &self.distribution
    }

    /// Average attempts over won rounds, if any were won
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        let total = self.distribution_total();
        if total == 0 {
            return None;
        }
        let weighted: u64 = self
            .distribution
            .iter()
            .zip(1u64..)
            .map(|(&count, attempts)| u64::from(count) * attempts)
            .sum();
        Some(weighted as f64 / total as f64)
    }

    /// Check the counters are mutually consistent
    ///
    /// # Errors
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.wins > self.played {
            return Err(StatsError::WinsExceedPlayed {
                wins: self.wins,
                played: self.played,
            });
        }
        if self.current_streak > self.best_streak {
            return Err(StatsError::StreakExceedsBest {
                current: self.current_streak,
                best: self.best_streak,
            });
        }
        if self.best_streak > self.wins {
            return Err(StatsError::BestExceedsWins {
                best: self.best_streak,
                wins: self.wins,
            });
        }
        let total = self.distribution_total();
        if total > u64::from(self.wins) {
            return Err(StatsError::DistributionExceedsWins {
                total,
                wins: self.wins,
            });
        }
        Ok(())
    }

    fn distribution_total(&self) -> u64 {
        self.distribution.iter().map(|&count| u64::from(count)).sum()
    }
}
