//! Wordle feedback calculation and representation
//!
//! Each guessed letter gets one of three marks:
//! - Exact (green): right letter, right position
//! - Present (yellow): letter occurs elsewhere in the secret
//! - Absent (gray): no unmatched occurrence of the letter remains in the secret

use super::{WORD_LEN, Word};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Outcome for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterMark {
    Exact,
    Present,
    Absent,
}

impl LetterMark {
    /// Exact or Present: the letter is confirmed to be in the secret
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Exact | Self::Present)
    }

    /// The more informative of two marks: Exact, then Present, then Absent
    #[must_use]
    pub const fn stronger(self, other: Self) -> Self {
        match (self, other) {
            (Self::Exact, _) | (_, Self::Exact) => Self::Exact,
            (Self::Present, _) | (_, Self::Present) => Self::Present,
            (Self::Absent, Self::Absent) => Self::Absent,
        }
    }

    /// Emoji tile for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess: one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback([LetterMark; WORD_LEN]);

/// Error returned when a feedback string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("feedback must have exactly 5 marks, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback mark '{0}' (use G/Y/- or 🟩🟨⬜)")]
    InvalidMark(char),
}

/// Score `guess` against `secret`
///
/// Implements Wordle's exact feedback rules, including duplicate letters:
/// a guessed letter is never credited more often than it occurs in the secret.
///
/// # Algorithm
/// 1. First pass: mark exact matches; every other secret letter goes into the
///    unmatched pool
/// 2. Second pass: for each non-exact position, take the letter from the pool
///    if available (Present), otherwise Absent
///
/// # Examples
/// ```
/// use wordle_engine::core::{LetterMark, Word, evaluate};
///
/// let guess = Word::new("crane").unwrap();
/// let secret = Word::new("slate").unwrap();
/// let feedback = evaluate(&guess, &secret);
///
/// assert_eq!(feedback.mark_at(2), LetterMark::Exact); // A
/// assert_eq!(feedback.mark_at(4), LetterMark::Exact); // E
/// assert_eq!(feedback.count_exact(), 2);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, secret: &Word) -> Feedback {
    let mut marks = [LetterMark::Absent; WORD_LEN];
    let mut unmatched: FxHashMap<u8, u8> = FxHashMap::default();

    // Allow: Index needed to access guess[i], secret[i], and set marks[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess.char_at(i) == secret.char_at(i) {
            marks[i] = LetterMark::Exact;
        } else {
            *unmatched.entry(secret.char_at(i)).or_insert(0) += 1;
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if marks[i] == LetterMark::Exact {
            continue;
        }
        if let Some(count) = unmatched.get_mut(&guess.char_at(i))
            && *count > 0
        {
            marks[i] = LetterMark::Present;
            *count -= 1;
        }
    }

    Feedback(marks)
}

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterMark::Exact; WORD_LEN]);

    /// Create feedback from explicit marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [LetterMark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// All marks in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[LetterMark; WORD_LEN] {
        &self.0
    }

    /// Mark at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> LetterMark {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&m| m == LetterMark::Exact).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == LetterMark::Present).count()
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Feedback;
    ///
    /// let f: Feedback = "GY-GY".parse().unwrap();
    /// assert_eq!(f.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            let ch = match mark {
                LetterMark::Exact => 'G',
                LetterMark::Present => 'Y',
                LetterMark::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for exact
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/⬜ for absent
impl FromStr for Feedback {
    type Err = FeedbackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != WORD_LEN {
            return Err(FeedbackParseError::InvalidLength(chars.len()));
        }

        let mut marks = [LetterMark::Absent; WORD_LEN];
        for (slot, ch) in marks.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterMark::Exact,
                'Y' | 'y' | '🟨' => LetterMark::Present,
                '-' | '_' | '⬜' => LetterMark::Absent,
                other => return Err(FeedbackParseError::InvalidMark(other)),
            };
        }

        Ok(Self(marks))
    }
}
