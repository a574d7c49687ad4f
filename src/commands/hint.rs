//! One-shot hints from recorded feedback
//!
//! Takes the guesses already played elsewhere, each as `WORD:FEEDBACK`
//! (for example `CRANE:--Y-G`), and suggests the next word.

use crate::core::{Attempt, Feedback, FeedbackParseError, Word, WordError};
use crate::dictionary::Dictionary;
use crate::hints::{Hint, HintEngine};
use thiserror::Error;

/// How many remaining candidates a report lists
pub const SAMPLE_SIZE: usize = 10;

/// A guess/feedback argument that cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintArgError {
    #[error("expected WORD:FEEDBACK, got '{0}'")]
    MissingSeparator(String),
    #[error("bad word in '{arg}': {source}")]
    Word { arg: String, source: WordError },
    #[error("bad feedback in '{arg}': {source}")]
    Feedback {
        arg: String,
        source: FeedbackParseError,
    },
}

/// Result of the `hint` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintReport {
    pub history: Vec<Attempt>,
    pub hint: Hint,
    /// First few remaining candidates, in dictionary order
    pub sample: Vec<Word>,
}

/// Parse one `WORD:FEEDBACK` argument
///
/// # Errors
/// Returns `HintArgError` if the separator is missing or either side is
/// malformed.
///
/// # Examples
/// ```
/// use wordle_engine::commands::parse_attempt;
///
/// let attempt = parse_attempt("crane:--Y-G").unwrap();
/// assert_eq!(attempt.guess().text(), "CRANE");
/// assert_eq!(attempt.feedback().to_string(), "--Y-G");
/// ```
pub fn parse_attempt(arg: &str) -> Result<Attempt, HintArgError> {
    let (word, feedback) = arg
        .split_once(':')
        .ok_or_else(|| HintArgError::MissingSeparator(arg.to_string()))?;

    let word = Word::new(word.trim()).map_err(|source| HintArgError::Word {
        arg: arg.to_string(),
        source,
    })?;
    let feedback = feedback
        .parse::<Feedback>()
        .map_err(|source| HintArgError::Feedback {
            arg: arg.to_string(),
            source,
        })?;

    Ok(Attempt::new(word, feedback))
}

/// Suggest a word given recorded feedback
///
/// # Errors
/// Returns the first argument that cannot be parsed.
pub fn suggest<D: Dictionary + ?Sized>(
    dictionary: &D,
    args: &[String],
) -> Result<HintReport, HintArgError> {
    let history = args
        .iter()
        .map(|arg| parse_attempt(arg))
        .collect::<Result<Vec<_>, _>>()?;

    let engine = HintEngine::from_dictionary(dictionary);
    let remaining = engine.remaining(&history);
    let hint = engine.hint(&history);
    let sample = remaining.into_iter().take(SAMPLE_SIZE).cloned().collect();

    Ok(HintReport {
        history,
        hint,
        sample,
    })
}
