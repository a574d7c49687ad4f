//! Core domain types for Wordle
//!
//! Words, feedback marks and recorded attempts. Everything here is pure and
//! has no knowledge of rounds, dictionaries or persistence.

mod attempt;
mod feedback;
mod word;

pub use attempt::{Attempt, letter_marks};
pub use feedback::{Feedback, FeedbackParseError, LetterMark, evaluate};
pub use word::{WORD_LEN, Word, WordError};
