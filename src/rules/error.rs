//! Errors raised while playing or restoring a round
//!
//! Guess errors are recoverable: the rejected guess leaves no trace in the
//! round and the caller simply asks for another word.

use super::{HardModeViolation, RoundStatus};
use crate::core::{Word, WordError};
use thiserror::Error;

/// A guess the round refused to record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] InvalidGuess),
    #[error("hard mode: {0}")]
    HardModeViolation(#[from] HardModeViolation),
}

/// Reasons a guess is not a legal move at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGuess {
    #[error(transparent)]
    Malformed(#[from] WordError),
    #[error("{0} is not in the word list")]
    NotInWordList(Word),
    #[error("the round is already over ({0})")]
    RoundOver(RoundStatus),
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        Self::InvalidGuess(InvalidGuess::Malformed(err))
    }
}

/// Persisted history that cannot form a legal round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("{count} attempts exceed the turn limit")]
    TooManyAttempts { count: usize },
    #[error("attempt {index} was recorded after the round was already won")]
    AttemptAfterWin { index: usize },
    #[error("recorded feedback for attempt {index} ({guess}) does not match the secret")]
    FeedbackMismatch { index: usize, guess: Word },
}
