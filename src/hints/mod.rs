//! Hint subsystem
//!
//! Narrows the candidate words to those compatible with a round's feedback
//! and suggests the most promising one.

mod engine;
pub mod filter;
pub mod ranker;

pub use engine::{Hint, HintEngine, NO_HINT};
pub use filter::{filter_candidates, is_compatible};
pub use ranker::{PositionalFrequency, best_hint};
