//! A recorded guess together with its feedback

use super::{Feedback, LetterMark, Word, evaluate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One guess plus the feedback it received
///
/// Immutable once built; rounds only ever append attempts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attempt {
    guess: Word,
    feedback: Feedback,
}

impl Attempt {
    /// Pair a guess with feedback that was computed elsewhere
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Score `guess` against `secret` and record the result
    #[must_use]
    pub fn scored(guess: Word, secret: &Word) -> Self {
        let feedback = evaluate(&guess, secret);
        Self { guess, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// True when every letter was an exact match
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_perfect()
    }
}

/// Best mark each guessed letter has received across `history`
///
/// A letter only ever moves up from Absent to Present to Exact; later
/// weaker marks for the same letter are ignored. Letters never guessed are
/// absent from the map.
///
/// # Examples
/// ```
/// use wordle_engine::core::{Attempt, LetterMark, Word, letter_marks};
///
/// let secret = Word::new("crane").unwrap();
/// let history = [Attempt::scored(Word::new("llama").unwrap(), &secret)];
/// let marks = letter_marks(&history);
///
/// assert_eq!(marks[&b'A'], LetterMark::Exact);
/// assert_eq!(marks[&b'L'], LetterMark::Absent);
/// assert!(!marks.contains_key(&b'C'));
/// ```
#[must_use]
pub fn letter_marks(history: &[Attempt]) -> BTreeMap<u8, LetterMark> {
    let mut best = BTreeMap::new();
    for attempt in history {
        for (&letter, &mark) in attempt.guess.chars().iter().zip(attempt.feedback.marks()) {
            best.entry(letter)
                .and_modify(|seen: &mut LetterMark| *seen = seen.stronger(mark))
                .or_insert(mark);
        }
    }
    best
}
