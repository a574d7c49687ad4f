//! Candidate filtering by accumulated feedback

use crate::core::{Attempt, LetterMark, WORD_LEN, Word};
use rayon::prelude::*;

/// Whether `candidate` is compatible with the feedback of one attempt
///
/// - Exact: the candidate has the guessed letter at that position
/// - Present: the candidate has a different letter there, and contains the
///   letter at least as often as it is marked present in this attempt
/// - Absent: the candidate lacks the letter entirely, unless the same letter
///   is marked exact or present elsewhere in this attempt
///
/// # Examples
/// ```
/// use wordle_engine::core::{Attempt, Word};
/// use wordle_engine::hints::is_compatible;
///
/// let secret = Word::new("crane").unwrap();
/// let attempt = Attempt::scored(Word::new("crown").unwrap(), &secret);
///
/// assert!(is_compatible(&Word::new("crank").unwrap(), &attempt));
/// assert!(!is_compatible(&Word::new("about").unwrap(), &attempt));
/// ```
#[must_use]
pub fn is_compatible(candidate: &Word, attempt: &Attempt) -> bool {
    let guess = attempt.guess();
    let marks = attempt.feedback().marks();

    for (position, mark) in marks.iter().enumerate() {
        if *mark == LetterMark::Exact && candidate.char_at(position) != guess.char_at(position) {
            return false;
        }
    }

    for (position, mark) in marks.iter().enumerate() {
        if *mark != LetterMark::Present {
            continue;
        }
        let letter = guess.char_at(position);
        if candidate.char_at(position) == letter {
            return false;
        }
        let marked = guess
            .chars()
            .iter()
            .zip(marks)
            .filter(|&(&ch, &m)| ch == letter && m == LetterMark::Present)
            .count();
        if candidate.count_of(letter) < marked {
            return false;
        }
    }

    for (position, mark) in marks.iter().enumerate() {
        if *mark != LetterMark::Absent {
            continue;
        }
        let letter = guess.char_at(position);
        let confirmed_elsewhere = (0..WORD_LEN)
            .any(|other| other != position && guess.char_at(other) == letter && marks[other].is_hit());
        if !confirmed_elsewhere && candidate.has_letter(letter) {
            return false;
        }
    }

    true
}

/// Keep the candidates compatible with every attempt in `history`
///
/// The result preserves the order of `candidates`. With no history every
/// candidate survives.
///
/// # Examples
/// ```
/// use wordle_engine::core::{Attempt, Word};
/// use wordle_engine::hints::filter_candidates;
///
/// let words: Vec<Word> = ["crane", "crank", "crown", "about"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let secret = Word::new("crane").unwrap();
/// let history = [Attempt::scored(Word::new("crown").unwrap(), &secret)];
///
/// let remaining = filter_candidates(&words, &history);
/// let texts: Vec<&str> = remaining.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["CRANE", "CRANK"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(candidates: &'a [Word], history: &[Attempt]) -> Vec<&'a Word> {
    candidates
        .par_iter()
        .filter(|candidate| history.iter().all(|attempt| is_compatible(candidate, attempt)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, evaluate};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    fn attempt(guess: &str, feedback: &str) -> Attempt {
        Attempt::new(word(guess), feedback.parse::<Feedback>().unwrap())
    }

    #[test]
    fn empty_history_is_identity() {
        let candidates = words(&["slate", "crane", "about"]);
        let remaining = filter_candidates(&candidates, &[]);
        assert_eq!(texts(&remaining), ["SLATE", "CRANE", "ABOUT"]);
    }

    #[test]
    fn empty_candidates_give_empty_result() {
        let history = [attempt("crane", "GGGGG")];
        assert!(filter_candidates(&[], &history).is_empty());
    }

    #[test]
    fn exact_marks_pin_letters() {
        let candidates = words(&["crane", "crate", "slate", "trace"]);
        // C and R green, rest gray
        let history = [attempt("crown", "GG---")];
        assert_eq!(texts(&filter_candidates(&candidates, &history)), ["CRATE"]);
    }

    #[test]
    fn present_marks_exclude_that_position() {
        let candidates = words(&["crane", "crown", "crank"]);
        let history = [attempt("crown", "GG--Y")];
        assert_eq!(
            texts(&filter_candidates(&candidates, &history)),
            ["CRANE", "CRANK"]
        );
    }

    #[test]
    fn present_marks_require_enough_copies() {
        // Two E's marked present: candidates need at least two E's
        let history = [attempt("eerie", "YY---")];
        assert!(!is_compatible(&word("abide"), &history[0]));
        // E at position 1 was marked present there, so it cannot be exact
        assert!(!is_compatible(&word("geese"), &history[0]));
        assert!(is_compatible(&word("sheep"), &history[0]));
    }

    #[test]
    fn absent_letter_excluded_unless_hit_elsewhere() {
        // SPEED vs ABIDE: first E present, second E absent, D present
        let abide = word("abide");
        let history = [Attempt::scored(word("speed"), &abide)];
        assert_eq!(history[0].feedback().to_string(), "--Y-Y");
        // The gray E does not rule out words with E because E is yellow too
        assert!(is_compatible(&abide, &history[0]));

        // A lone gray letter rules out every word containing it
        let history = [attempt("slate", "----G")];
        assert!(!is_compatible(&word("crane"), &history[0]));
        assert!(is_compatible(&word("prude"), &history[0]));
    }

    #[test]
    fn secret_always_survives_its_own_feedback() {
        let pool = words(&[
            "crane", "slate", "llama", "hello", "speed", "abide", "robot", "floor", "eerie",
            "geese", "trace", "crate",
        ]);
        for secret in &pool {
            let history: Vec<Attempt> = pool
                .iter()
                .take(4)
                .map(|g| Attempt::new(g.clone(), evaluate(g, secret)))
                .collect();
            let remaining = filter_candidates(&pool, &history);
            assert!(remaining.contains(&secret), "{secret} was filtered out");
        }
    }

    #[test]
    fn duplicated_evidence_is_idempotent() {
        let candidates = words(&["crane", "crank", "crown", "about", "slate"]);
        let once = [attempt("crown", "GG--Y")];
        let twice = [attempt("crown", "GG--Y"), attempt("crown", "GG--Y")];
        assert_eq!(
            filter_candidates(&candidates, &once),
            filter_candidates(&candidates, &twice)
        );
    }

    #[test]
    fn order_follows_input_on_large_lists() {
        let candidates: Vec<Word> = crate::dictionary::loader::words_from_slice(
            crate::dictionary::ANSWERS,
        );
        let remaining = filter_candidates(&candidates, &[attempt("slate", "-----")]);
        assert!(!remaining.is_empty());
        let positions: Vec<usize> = remaining
            .iter()
            .map(|w| candidates.iter().position(|c| c == *w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
