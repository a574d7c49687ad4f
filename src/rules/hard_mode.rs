//! Hard mode admissibility
//!
//! In hard mode every revealed hint must be honoured by later guesses:
//! green letters stay in place and every green or yellow letter is reused.

use crate::core::{Attempt, LetterMark, WORD_LEN, Word};
use std::collections::BTreeMap;
use thiserror::Error;

/// Why a guess breaks hard mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HardModeViolation {
    /// A letter previously marked exact was moved or dropped
    #[error("letter {} must stay in position {}", letter_char(.letter), .position + 1)]
    FixedLetter { position: usize, letter: u8 },
    /// A revealed letter is not reused often enough
    #[error("guess must contain {} at least {required} time(s), found {found}", letter_char(.letter))]
    MissingLetter {
        letter: u8,
        required: usize,
        found: usize,
    },
}

fn letter_char(letter: &u8) -> char {
    char::from(*letter)
}

/// Check `candidate` against the accumulated `history`
///
/// Two rules, both required:
/// - every position marked exact in any prior attempt keeps its letter
/// - every letter marked exact or present is reused at least as many times
///   as the most demanding single attempt showed it (max across attempts,
///   not the sum)
///
/// Fixed positions are checked first, lowest position first; missing letters
/// are reported alphabetically. An empty history admits everything.
///
/// # Errors
/// Returns the first `HardModeViolation` found.
///
/// # Examples
/// ```
/// use wordle_engine::core::{Attempt, Word};
/// use wordle_engine::rules::hard_mode;
///
/// let secret = Word::new("crane").unwrap();
/// let history = [Attempt::scored(Word::new("crown").unwrap(), &secret)];
///
/// assert!(hard_mode::check(&Word::new("crane").unwrap(), &history).is_ok());
/// assert!(hard_mode::check(&Word::new("about").unwrap(), &history).is_err());
/// ```
pub fn check(candidate: &Word, history: &[Attempt]) -> Result<(), HardModeViolation> {
    for position in 0..WORD_LEN {
        for attempt in history {
            if attempt.feedback().mark_at(position) != LetterMark::Exact {
                continue;
            }
            let letter = attempt.guess().char_at(position);
            if candidate.char_at(position) != letter {
                return Err(HardModeViolation::FixedLetter { position, letter });
            }
        }
    }

    for (letter, required) in required_letters(history) {
        let found = candidate.count_of(letter);
        if found < required {
            return Err(HardModeViolation::MissingLetter {
                letter,
                required,
                found,
            });
        }
    }

    Ok(())
}

/// Boolean form of [`check`]
#[must_use]
pub fn is_admissible(candidate: &Word, history: &[Attempt]) -> bool {
    check(candidate, history).is_ok()
}

/// Minimum count of each revealed letter a hard-mode guess must contain
///
/// Per attempt, count the exact+present marks for each letter; then keep the
/// maximum of those per-attempt counts across the history.
#[must_use]
pub fn required_letters(history: &[Attempt]) -> BTreeMap<u8, usize> {
    let mut needed: BTreeMap<u8, usize> = BTreeMap::new();

    for attempt in history {
        let mut row: BTreeMap<u8, usize> = BTreeMap::new();
        for (&letter, mark) in attempt.guess().chars().iter().zip(attempt.feedback().marks()) {
            if mark.is_hit() {
                *row.entry(letter).or_insert(0) += 1;
            }
        }
        for (letter, count) in row {
            let entry = needed.entry(letter).or_insert(0);
            *entry = (*entry).max(count);
        }
    }

    needed
}
