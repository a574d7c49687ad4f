//! Hint ranking by positional letter frequency

use crate::core::{WORD_LEN, Word};

/// Bonus added per distinct letter in a candidate
pub const DISTINCT_LETTER_BONUS: usize = 2;

/// How often each letter appears at each position across a candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalFrequency {
    counts: [[usize; 26]; WORD_LEN],
}

impl PositionalFrequency {
    /// Tally letters per position across `candidates`
    #[must_use]
    pub fn from_candidates(candidates: &[&Word]) -> Self {
        let mut counts = [[0; 26]; WORD_LEN];
        for candidate in candidates {
            for (position, &letter) in candidate.chars().iter().enumerate() {
                if let Some(index) = letter_index(letter) {
                    counts[position][index] += 1;
                }
            }
        }
        Self { counts }
    }

    /// Number of candidates with `letter` at `position`
    ///
    /// Anything other than an uppercase letter, or a position past the end
    /// of a word, counts as zero.
    #[must_use]
    pub fn count(&self, position: usize, letter: u8) -> usize {
        letter_index(letter)
            .and_then(|index| self.counts.get(position)?.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Score a word: summed positional frequency plus a bonus per distinct letter
    #[must_use]
    pub fn score(&self, word: &Word) -> usize {
        let positional: usize = word
            .chars()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.count(position, letter))
            .sum();
        positional + DISTINCT_LETTER_BONUS * word.distinct_letters()
    }
}

fn letter_index(letter: u8) -> Option<usize> {
    letter.is_ascii_uppercase().then(|| usize::from(letter - b'A'))
}

/// Pick the highest-scoring candidate
///
/// Ties go to the candidate that comes first in `candidates`. Returns `None`
/// when there is nothing to rank.
///
/// # Examples
/// ```
/// use wordle_engine::core::Word;
/// use wordle_engine::hints::best_hint;
///
/// let words: Vec<Word> = ["slate", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// assert_eq!(best_hint(&refs).unwrap().text(), "CRATE");
/// assert!(best_hint(&[]).is_none());
/// ```
#[must_use]
pub fn best_hint<'a>(candidates: &[&'a Word]) -> Option<&'a Word> {
    let frequency = PositionalFrequency::from_candidates(candidates);
    let mut best: Option<(&'a Word, usize)> = None;

    for &candidate in candidates {
        let score = frequency.score(candidate);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    best.map(|(word, _)| word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn empty_input_has_no_hint() {
        assert_eq!(best_hint(&[]), None);
    }

    #[test]
    fn single_candidate_is_the_hint() {
        let pool = words(&["llama"]);
        let refs: Vec<&Word> = pool.iter().collect();
        assert_eq!(best_hint(&refs), Some(&pool[0]));
    }

    #[test]
    fn positional_frequency_counts_per_position() {
        let pool = words(&["slate", "crate", "grate"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let frequency = PositionalFrequency::from_candidates(&refs);

        assert_eq!(frequency.count(1, b'R'), 2);
        assert_eq!(frequency.count(2, b'A'), 3);
        assert_eq!(frequency.count(0, b'Z'), 0);
        // 1+1+3+3+3 positional, 5 distinct letters
        assert_eq!(frequency.score(&pool[0]), 21);
        assert_eq!(frequency.score(&pool[1]), 22);
    }

    #[test]
    fn count_outside_the_alphabet_is_zero() {
        let pool = words(&["crane"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let frequency = PositionalFrequency::from_candidates(&refs);

        assert_eq!(frequency.count(0, b'C'), 1);
        assert_eq!(frequency.count(0, b'c'), 0);
        assert_eq!(frequency.count(0, b'@'), 0);
        assert_eq!(frequency.count(0, b'['), 0);
        assert_eq!(frequency.count(WORD_LEN, b'C'), 0);
    }

    #[test]
    fn distinct_letters_earn_a_bonus() {
        let pool = words(&["aaaaa", "abcde"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let frequency = PositionalFrequency::from_candidates(&refs);

        assert_eq!(frequency.score(&pool[0]), 6 + 2);
        assert_eq!(frequency.score(&pool[1]), 6 + 10);
        assert_eq!(best_hint(&refs).unwrap().text(), "ABCDE");
    }

    #[test]
    fn ties_go_to_earliest_candidate() {
        let pool = words(&["crane", "slate"]);
        let forward: Vec<&Word> = pool.iter().collect();
        let backward: Vec<&Word> = pool.iter().rev().collect();

        assert_eq!(best_hint(&forward).unwrap().text(), "CRANE");
        assert_eq!(best_hint(&backward).unwrap().text(), "SLATE");
    }

    #[test]
    fn hint_is_always_a_candidate() {
        let pool = words(&["eerie", "geese", "speed", "abide", "crane"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let hint = best_hint(&refs).unwrap();
        assert!(pool.contains(hint));
    }
}
