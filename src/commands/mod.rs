//! Command implementations

pub mod autoplay;
pub mod hint;
pub mod play;
pub mod stats;

pub use autoplay::{AutoplayOptions, AutoplaySummary, RoundOutcome, play_round, run_autoplay};
pub use hint::{HintArgError, HintReport, parse_attempt, suggest};
pub use play::{Intent, run_play};
pub use stats::load_stats;
