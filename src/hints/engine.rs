//! Hint engine: filter then rank

use super::{best_hint, filter_candidates};
use crate::core::{Attempt, Word};
use crate::dictionary::Dictionary;
use std::fmt;

/// Text shown when no candidate is left
pub const NO_HINT: &str = "(no hint)";

/// Result of a hint request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// Best remaining candidate and how many candidates are left
    Suggestion { word: Word, remaining: usize },
    /// No candidate is compatible with the feedback so far
    Unavailable,
}

impl Hint {
    #[must_use]
    pub const fn word(&self) -> Option<&Word> {
        match self {
            Self::Suggestion { word, .. } => Some(word),
            Self::Unavailable => None,
        }
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        match self {
            Self::Suggestion { remaining, .. } => *remaining,
            Self::Unavailable => 0,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suggestion { word, .. } => write!(f, "{word}"),
            Self::Unavailable => f.write_str(NO_HINT),
        }
    }
}

/// Suggests guesses from a fixed candidate list
///
/// Candidate order is the tie-break order for ranking.
pub struct HintEngine<'a> {
    candidates: &'a [Word],
}

impl<'a> HintEngine<'a> {
    #[must_use]
    pub const fn new(candidates: &'a [Word]) -> Self {
        Self { candidates }
    }

    /// Engine over a dictionary's candidate words
    #[must_use]
    pub fn from_dictionary<D: Dictionary + ?Sized>(dictionary: &'a D) -> Self {
        Self::new(dictionary.all_candidate_words())
    }

    /// Candidates still compatible with `history`, in candidate order
    #[must_use]
    pub fn remaining(&self, history: &[Attempt]) -> Vec<&'a Word> {
        filter_candidates(self.candidates, history)
    }

    /// Best next guess given `history`
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Attempt, Word};
    /// use wordle_engine::dictionary::WordList;
    /// use wordle_engine::hints::{Hint, HintEngine};
    ///
    /// let words = WordList::from_texts(&["crane", "crank", "crown", "about"]);
    /// let engine = HintEngine::from_dictionary(&words);
    ///
    /// let secret = Word::new("crank").unwrap();
    /// let history = [Attempt::scored(Word::new("crown").unwrap(), &secret)];
    ///
    /// let hint = engine.hint(&history);
    /// assert_eq!(hint.remaining(), 2);
    /// assert_eq!(hint.to_string(), "CRANE");
    /// ```
    #[must_use]
    pub fn hint(&self, history: &[Attempt]) -> Hint {
        let remaining = self.remaining(history);
        best_hint(&remaining).map_or(Hint::Unavailable, |word| Hint::Suggestion {
            word: word.clone(),
            remaining: remaining.len(),
        })
    }
}
