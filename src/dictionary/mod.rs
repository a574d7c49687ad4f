//! Word dictionaries
//!
//! The rules only ever talk to a [`Dictionary`]; [`WordList`] is the
//! in-memory implementation backed by the embedded lists or by files on disk.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use loader::load_word_list;

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Secret used when a dictionary has no answers at all
pub const FALLBACK_SECRET: &str = "CRANE";

/// Source of legal guesses and secret words
pub trait Dictionary {
    /// Whether `word` may be played as a guess
    fn is_valid_guess(&self, word: &Word) -> bool;

    /// Pick a secret for a new round
    fn random_secret(&self) -> Word;

    /// Words that can be the secret, in canonical order
    ///
    /// Hint ranking breaks ties by this order.
    fn all_candidate_words(&self) -> &[Word];
}

/// Dictionary held entirely in memory
///
/// Answers are kept in first-seen order without duplicates and are always
/// valid guesses. In permissive mode any well-formed word is accepted.
#[derive(Debug, Clone)]
pub struct WordList {
    valid: FxHashSet<Word>,
    answers: Vec<Word>,
    fallback: Vec<Word>,
    permissive: bool,
}

impl WordList {
    /// Build a strict word list from extra guessable words and answers
    #[must_use]
    pub fn new(
        valid: impl IntoIterator<Item = Word>,
        answers: impl IntoIterator<Item = Word>,
    ) -> Self {
        let mut valid: FxHashSet<Word> = valid.into_iter().collect();
        let mut seen = FxHashSet::default();
        let mut unique = Vec::new();
        for word in answers {
            if seen.insert(word.clone()) {
                valid.insert(word.clone());
                unique.push(word);
            }
        }

        Self {
            valid,
            answers: unique,
            fallback: vec![fallback_secret()],
            permissive: false,
        }
    }

    /// Word list where every text is both an answer and a valid guess
    ///
    /// Texts that are not well-formed words are skipped.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::dictionary::{Dictionary, WordList};
    ///
    /// let words = WordList::from_texts(&["crane", "slate", "bad"]);
    /// assert_eq!(words.len(), 2);
    /// assert_eq!(words.all_candidate_words()[0].text(), "CRANE");
    /// ```
    #[must_use]
    pub fn from_texts(texts: &[&str]) -> Self {
        Self::new(Vec::new(), loader::words_from_slice(texts))
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(ALLOWED),
            loader::words_from_slice(ANSWERS),
        )
    }

    /// Accept any well-formed word as a guess, not only listed ones
    #[must_use]
    pub const fn permissive(mut self, permissive: bool) -> Self {
        self.permissive = permissive;
        self
    }

    #[must_use]
    pub const fn is_permissive(&self) -> bool {
        self.permissive
    }

    /// Number of answers
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Number of distinct valid guesses, answers included
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    /// Pick a secret using the given RNG
    ///
    /// Falls back to [`FALLBACK_SECRET`] when there are no answers.
    #[must_use]
    pub fn random_secret_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.answers
            .choose(rng)
            .cloned()
            .unwrap_or_else(fallback_secret)
    }
}

impl Dictionary for WordList {
    fn is_valid_guess(&self, word: &Word) -> bool {
        self.permissive || self.valid.contains(word)
    }

    fn random_secret(&self) -> Word {
        self.random_secret_with(&mut rand::rng())
    }

    fn all_candidate_words(&self) -> &[Word] {
        if self.answers.is_empty() {
            &self.fallback
        } else {
            &self.answers
        }
    }
}

fn fallback_secret() -> Word {
    let mut chars = [0u8; crate::core::WORD_LEN];
    chars.copy_from_slice(FALLBACK_SECRET.as_bytes());
    Word::from_uppercase(chars)
}
