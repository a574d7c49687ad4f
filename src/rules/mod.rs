//! Game rules: round transitions, hard mode and statistics

mod error;
pub mod hard_mode;
mod round;
mod stats;

pub use error::{GameError, InvalidGuess, RestoreError};
pub use hard_mode::HardModeViolation;
pub use round::{MAX_TURNS, Round, RoundState, RoundStatus};
pub use stats::{StatsError, StatsTracker};
