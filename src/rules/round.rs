//! Round state and turn transitions
//!
//! A [`Round`] is the read-only view of one game: secret, hard-mode flag,
//! the append-only attempt history and the derived status. [`RoundState`]
//! owns the round and is the only thing allowed to advance it.

use super::error::{GameError, InvalidGuess, RestoreError};
use super::{StatsTracker, hard_mode};
use crate::core::{Attempt, LetterMark, Word, evaluate, letter_marks};
use crate::dictionary::Dictionary;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

/// Maximum number of guesses per round
pub const MAX_TURNS: usize = 6;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    /// Won and Lost are terminal
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Status implied by a history of attempts against `secret`
    ///
    /// Won iff the latest guess is the secret; Lost iff the turns are used
    /// up without winning; otherwise still in progress.
    #[must_use]
    pub fn derive(secret: &Word, attempts: &[Attempt]) -> Self {
        match attempts.last() {
            Some(last) if last.guess() == secret => Self::Won,
            _ if attempts.len() >= MAX_TURNS => Self::Lost,
            _ => Self::InProgress,
        }
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// One round of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    secret: Word,
    hard_mode: bool,
    attempts: Vec<Attempt>,
    status: RoundStatus,
}

impl Round {
    fn fresh(secret: Word, hard_mode: bool) -> Self {
        Self {
            secret,
            hard_mode,
            attempts: Vec::with_capacity(MAX_TURNS),
            status: RoundStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// Attempts in the order they were made
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Number of guesses recorded so far
    #[must_use]
    pub fn turn(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn remaining_turns(&self) -> usize {
        MAX_TURNS.saturating_sub(self.attempts.len())
    }

    #[must_use]
    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    /// Keyboard state: the best mark each guessed letter has earned
    #[must_use]
    pub fn letter_marks(&self) -> BTreeMap<u8, LetterMark> {
        letter_marks(&self.attempts)
    }
}

/// Owner of the current round
///
/// All mutation goes through `&mut self`, so one session advances its round
/// one guess at a time.
#[derive(Debug, Clone)]
pub struct RoundState {
    round: Round,
}

impl RoundState {
    /// Start a round with hard mode off
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self::with_hard_mode(secret, false)
    }

    #[must_use]
    pub fn with_hard_mode(secret: Word, hard_mode: bool) -> Self {
        Self {
            round: Round::fresh(secret, hard_mode),
        }
    }

    /// Read-only snapshot of the round
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Discard the current round and start over with `secret`
    ///
    /// The hard-mode flag carries over.
    pub fn start_new(&mut self, secret: Word) {
        info!(turns_played = self.round.turn(), "starting new round");
        self.round = Round::fresh(secret, self.round.hard_mode);
    }

    /// Turn hard mode on or off; takes effect from the next guess
    pub fn set_hard_mode(&mut self, enabled: bool) {
        if self.round.hard_mode != enabled {
            debug!(enabled, "hard mode toggled");
        }
        self.round.hard_mode = enabled;
    }

    /// Play `guess` in the current round
    ///
    /// Checks, in order: the round is still in progress, the text is a
    /// well-formed word, the dictionary accepts it, and (in hard mode) it
    /// honours every revealed hint. On success the attempt is scored and
    /// appended, the status is recomputed, and a finished round is reported
    /// to `stats` exactly once.
    ///
    /// # Errors
    /// - `GameError::InvalidGuess` if the round is over, the word is
    ///   malformed, or the dictionary rejects it
    /// - `GameError::HardModeViolation` if hard mode rejects it
    ///
    /// A rejected guess changes nothing.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    /// use wordle_engine::dictionary::WordList;
    /// use wordle_engine::rules::{RoundState, RoundStatus, StatsTracker};
    ///
    /// let words = WordList::from_texts(&["crane", "crown", "slate"]);
    /// let mut state = RoundState::new(Word::new("crane").unwrap());
    /// let mut stats = StatsTracker::new();
    ///
    /// let attempt = state.submit_guess("crown", &words, &mut stats).unwrap();
    /// assert_eq!(attempt.feedback().to_string(), "GG--Y");
    ///
    /// state.submit_guess("crane", &words, &mut stats).unwrap();
    /// assert_eq!(state.round().status(), RoundStatus::Won);
    /// assert_eq!(stats.distribution()[1], 1);
    /// ```
    pub fn submit_guess<D: Dictionary + ?Sized>(
        &mut self,
        guess: &str,
        dictionary: &D,
        stats: &mut StatsTracker,
    ) -> Result<&Attempt, GameError> {
        if self.round.status.is_terminal() {
            return Err(InvalidGuess::RoundOver(self.round.status).into());
        }

        let guess = Word::new(guess.trim())?;
        if !dictionary.is_valid_guess(&guess) {
            return Err(InvalidGuess::NotInWordList(guess).into());
        }

        if self.round.hard_mode {
            hard_mode::check(&guess, &self.round.attempts)?;
        }

        let attempt = Attempt::scored(guess, &self.round.secret);
        debug!(
            guess = %attempt.guess(),
            feedback = %attempt.feedback(),
            turn = self.round.turn() + 1,
            "guess accepted"
        );
        self.round.attempts.push(attempt);

        let status = RoundStatus::derive(&self.round.secret, &self.round.attempts);
        self.round.status = status;
        match status {
            RoundStatus::Won => {
                info!(attempts = self.round.turn(), "round won");
                stats.record_win(self.round.turn());
            }
            RoundStatus::Lost => {
                info!(secret = %self.round.secret, "round lost");
                stats.record_loss();
            }
            RoundStatus::InProgress => {}
        }

        let index = self.round.attempts.len() - 1;
        Ok(&self.round.attempts[index])
    }

    /// Rebuild a round from persisted data
    ///
    /// The history must be one that real play could have produced: at most
    /// `MAX_TURNS` attempts, nothing after a winning guess, and every
    /// recorded feedback equal to what the secret actually yields. Stats are
    /// untouched; the outcome was counted when the round was first played.
    ///
    /// # Errors
    /// Returns `RestoreError` describing the first problem found.
    pub fn restore(
        secret: Word,
        hard_mode: bool,
        attempts: Vec<Attempt>,
    ) -> Result<Self, RestoreError> {
        if attempts.len() > MAX_TURNS {
            return Err(RestoreError::TooManyAttempts {
                count: attempts.len(),
            });
        }

        for (index, attempt) in attempts.iter().enumerate() {
            if evaluate(attempt.guess(), &secret) != *attempt.feedback() {
                return Err(RestoreError::FeedbackMismatch {
                    index,
                    guess: attempt.guess().clone(),
                });
            }
            if attempt.is_solved() && index + 1 < attempts.len() {
                return Err(RestoreError::AttemptAfterWin { index: index + 1 });
            }
        }

        let mut state = Self {
            round: Round {
                secret,
                hard_mode,
                attempts,
                status: RoundStatus::InProgress,
            },
        };
        state.recompute_status_after_restore();
        Ok(state)
    }

    /// Re-derive the status from the attempt history
    ///
    /// Used after loading saved state. Never touches statistics.
    pub fn recompute_status_after_restore(&mut self) {
        self.round.status = RoundStatus::derive(&self.round.secret, &self.round.attempts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, WordError};
    use crate::dictionary::WordList;
    use crate::rules::HardModeViolation;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words() -> WordList {
        WordList::from_texts(&[
            "crane", "crown", "about", "crank", "slate", "irate", "trace", "crate", "grate",
            "plumb", "fight", "allay", "llama",
        ])
    }

    fn play(state: &mut RoundState, stats: &mut StatsTracker, guesses: &[&str]) {
        let dictionary = words();
        for guess in guesses {
            state.submit_guess(guess, &dictionary, stats).unwrap();
        }
    }

    #[test]
    fn new_round_is_in_progress() {
        let state = RoundState::new(word("crane"));
        let round = state.round();
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.turn(), 0);
        assert_eq!(round.remaining_turns(), MAX_TURNS);
        assert!(round.attempts().is_empty());
        assert!(!round.hard_mode());
    }

    #[test]
    fn correct_guess_wins_and_records_once() {
        let mut state = RoundState::new(word("crane"));
        let mut stats = StatsTracker::new();

        play(&mut state, &mut stats, &["slate", "crane"]);

        assert_eq!(state.round().status(), RoundStatus::Won);
        assert_eq!(stats.played(), 1);
        assert_eq!(stats.wins(), 1);
        assert_eq!(stats.distribution()[1], 1);

        // Further guesses are refused and do not touch stats
        let err = state
            .submit_guess("crown", &words(), &mut stats)
            .unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidGuess(InvalidGuess::RoundOver(RoundStatus::Won))
        );
        assert_eq!(state.round().turn(), 2);
        assert_eq!(stats.played(), 1);
    }

    #[test]
    fn six_misses_lose_and_record_loss() {
        let mut state = RoundState::new(word("crane"));
        let mut stats = StatsTracker::new();

        play(
            &mut state,
            &mut stats,
            &["slate", "irate", "trace", "crate", "grate"],
        );
        assert_eq!(state.round().status(), RoundStatus::InProgress);
        assert_eq!(stats.played(), 0);

        play(&mut state, &mut stats, &["about"]);
        assert_eq!(state.round().status(), RoundStatus::Lost);
        assert_eq!(state.round().remaining_turns(), 0);
        assert_eq!(stats.played(), 1);
        assert_eq!(stats.wins(), 0);

        let err = state.submit_guess("crane", &words(), &mut stats).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidGuess(InvalidGuess::RoundOver(RoundStatus::Lost))
        );
        assert_eq!(stats.played(), 1);
    }

    #[test]
    fn winning_on_last_turn_is_a_win() {
        let mut state = RoundState::new(word("crane"));
        let mut stats = StatsTracker::new();

        play(
            &mut state,
            &mut stats,
            &["slate", "irate", "trace", "crate", "grate", "crane"],
        );
        assert_eq!(state.round().status(), RoundStatus::Won);
        assert_eq!(stats.distribution()[5], 1);
        assert_eq!(stats.losses(), 0);
    }

    #[test]
    fn malformed_and_unknown_words_are_rejected_without_state_change() {
        let mut state = RoundState::new(word("crane"));
        let mut stats = StatsTracker::new();
        let dictionary = words();

        assert_eq!(
            state.submit_guess("cran", &dictionary, &mut stats),
            Err(GameError::InvalidGuess(InvalidGuess::Malformed(
                WordError::InvalidLength(4)
            )))
        );
        assert_eq!(
            state.submit_guess("zzzzz", &dictionary, &mut stats),
            Err(GameError::InvalidGuess(InvalidGuess::NotInWordList(word(
                "zzzzz"
            ))))
        );
        assert_eq!(state.round().turn(), 0);
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let mut state = RoundState::new(word("crane"));
        let mut stats = StatsTracker::new();
        let attempt = state
            .submit_guess(" CrOwN ", &words(), &mut stats)
            .unwrap();
        assert_eq!(attempt.guess().text(), "CROWN");
    }

    #[test]
    fn hard_mode_rejects_dropping_fixed_letter() {
        let mut state = RoundState::new(word("crane"));
        let mut stats = StatsTracker::new();
        let dictionary = words();

        state.submit_guess("crown", &dictionary, &mut stats).unwrap();
        state.set_hard_mode(true);

        let err = state
            .submit_guess("about", &dictionary, &mut stats)
            .unwrap_err();
        assert_eq!(
            err,
            GameError::HardModeViolation(HardModeViolation::FixedLetter {
                position: 0,
                letter: b'C'
            })
        );
        assert_eq!(state.round().turn(), 1);

        // Honouring the hints is fine
        state.submit_guess("crank", &dictionary, &mut stats).unwrap();
        assert_eq!(state.round().turn(), 2);
    }

    #[test]
    fn hard_mode_off_allows_anything_in_dictionary() {
        let mut state = RoundState::new(word("crane"));
        let mut stats = StatsTracker::new();
        play(&mut state, &mut stats, &["crown", "about"]);
        assert_eq!(state.round().turn(), 2);
    }

    #[test]
    fn start_new_keeps_hard_mode_and_clears_history() {
        let mut state = RoundState::with_hard_mode(word("crane"), true);
        let mut stats = StatsTracker::new();
        play(&mut state, &mut stats, &["crane"]);

        state.start_new(word("slate"));
        let round = state.round();
        assert!(round.hard_mode());
        assert_eq!(round.secret().text(), "SLATE");
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert!(round.attempts().is_empty());
    }

    #[test]
    fn restore_rederives_status_without_stats() {
        let secret = word("crane");
        let attempts = vec![
            Attempt::scored(word("crown"), &secret),
            Attempt::scored(word("crane"), &secret),
        ];
        let state = RoundState::restore(secret, true, attempts.clone()).unwrap();

        assert_eq!(state.round().status(), RoundStatus::Won);
        assert_eq!(state.round().attempts(), attempts.as_slice());
        assert!(state.round().hard_mode());
    }

    #[test]
    fn restore_full_history_without_win_is_lost() {
        let secret = word("crane");
        let attempts: Vec<Attempt> = ["slate", "irate", "trace", "crate", "grate", "about"]
            .iter()
            .map(|g| Attempt::scored(word(g), &secret))
            .collect();
        let state = RoundState::restore(secret, false, attempts).unwrap();
        assert_eq!(state.round().status(), RoundStatus::Lost);
    }

    #[test]
    fn restore_rejects_impossible_histories() {
        let secret = word("crane");

        let too_many: Vec<Attempt> = (0..=MAX_TURNS)
            .map(|_| Attempt::scored(word("slate"), &secret))
            .collect();
        assert_eq!(
            RoundState::restore(secret.clone(), false, too_many).unwrap_err(),
            RestoreError::TooManyAttempts { count: 7 }
        );

        let after_win = vec![
            Attempt::scored(word("crane"), &secret),
            Attempt::scored(word("slate"), &secret),
        ];
        assert_eq!(
            RoundState::restore(secret.clone(), false, after_win).unwrap_err(),
            RestoreError::AttemptAfterWin { index: 1 }
        );

        let forged = vec![Attempt::new(word("slate"), Feedback::PERFECT)];
        assert_eq!(
            RoundState::restore(secret, false, forged).unwrap_err(),
            RestoreError::FeedbackMismatch {
                index: 0,
                guess: word("slate")
            }
        );
    }

    #[test]
    fn keyboard_marks_never_drop_back() {
        let mut state = RoundState::new(word("crane"));
        let mut stats = StatsTracker::new();
        assert!(state.round().letter_marks().is_empty());

        // Second A in ALLAY is Absent, first is Present
        play(&mut state, &mut stats, &["allay"]);
        assert_eq!(state.round().letter_marks()[&b'A'], LetterMark::Present);

        play(&mut state, &mut stats, &["llama"]);
        assert_eq!(state.round().letter_marks()[&b'A'], LetterMark::Exact);

        play(&mut state, &mut stats, &["about"]);
        let marks = state.round().letter_marks();
        assert_eq!(marks[&b'A'], LetterMark::Exact);
        assert_eq!(marks[&b'L'], LetterMark::Absent);
        assert_eq!(marks[&b'B'], LetterMark::Absent);
        assert!(!marks.contains_key(&b'C'));
    }

    #[test]
    fn derive_status_matches_invariant() {
        let secret = word("crane");
        assert_eq!(RoundStatus::derive(&secret, &[]), RoundStatus::InProgress);

        let miss = Attempt::scored(word("slate"), &secret);
        assert_eq!(
            RoundStatus::derive(&secret, std::slice::from_ref(&miss)),
            RoundStatus::InProgress
        );

        let hit = Attempt::scored(secret.clone(), &secret);
        assert_eq!(
            RoundStatus::derive(&secret, &[miss, hit]),
            RoundStatus::Won
        );
    }
}
