//! A playing session
//!
//! [`Game`] ties one dictionary, the current round and the running
//! statistics together. Front ends drive it through intents (guess, hint,
//! new game, hard-mode toggle, save, load) and render the snapshots it
//! returns.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::hints::{Hint, HintEngine};
use crate::persistence::{PersistenceError, SaveData};
use crate::rules::{GameError, Round, RoundState, StatsTracker};
use std::path::Path;
use tracing::info;

/// One player's session
pub struct Game<D: Dictionary> {
    dictionary: D,
    state: RoundState,
    stats: StatsTracker,
}

impl<D: Dictionary> Game<D> {
    /// Start a session with a random secret
    #[must_use]
    pub fn new(dictionary: D, hard_mode: bool) -> Self {
        let secret = dictionary.random_secret();
        Self::with_secret(dictionary, secret, hard_mode)
    }

    /// Start a session with a known secret
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    /// use wordle_engine::dictionary::WordList;
    /// use wordle_engine::game::Game;
    /// use wordle_engine::rules::RoundStatus;
    ///
    /// let words = WordList::from_texts(&["crane", "slate"]);
    /// let mut game = Game::with_secret(words, Word::new("crane").unwrap(), false);
    ///
    /// let round = game.submit_guess("crane").unwrap();
    /// assert_eq!(round.status(), RoundStatus::Won);
    /// assert_eq!(game.stats().wins(), 1);
    /// ```
    #[must_use]
    pub fn with_secret(dictionary: D, secret: Word, hard_mode: bool) -> Self {
        Self {
            dictionary,
            state: RoundState::with_hard_mode(secret, hard_mode),
            stats: StatsTracker::new(),
        }
    }

    /// Abandon the current round and start another with a random secret
    ///
    /// An unfinished round is dropped without touching statistics.
    pub fn new_game(&mut self) -> &Round {
        let secret = self.dictionary.random_secret();
        self.state.start_new(secret);
        self.state.round()
    }

    pub fn set_hard_mode(&mut self, enabled: bool) -> &Round {
        self.state.set_hard_mode(enabled);
        self.state.round()
    }

    /// Play a guess and return the updated round
    ///
    /// # Errors
    /// Returns `GameError` if the guess is rejected; the round is unchanged.
    pub fn submit_guess(&mut self, guess: &str) -> Result<&Round, GameError> {
        self.state
            .submit_guess(guess, &self.dictionary, &mut self.stats)?;
        Ok(self.state.round())
    }

    /// Suggest a guess consistent with the feedback so far
    #[must_use]
    pub fn hint(&self) -> Hint {
        HintEngine::from_dictionary(&self.dictionary).hint(self.state.round().attempts())
    }

    /// Write the session to `path`
    ///
    /// # Errors
    /// Returns `PersistenceError` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        SaveData::capture(self.state.round(), &self.stats).save(path)
    }

    /// Replace the round and statistics with those saved at `path`
    ///
    /// On any error the session is left as it was.
    ///
    /// # Errors
    /// Returns `PersistenceError` if the file is missing, malformed or
    /// describes an impossible game.
    pub fn load(&mut self, path: &Path) -> Result<&Round, PersistenceError> {
        let (state, stats) = SaveData::load(path)?.restore()?;
        info!(path = %path.display(), turn = state.round().turn(), "game loaded");
        self.state = state;
        self.stats = stats;
        Ok(self.state.round())
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        self.state.round()
    }

    #[must_use]
    pub const fn stats(&self) -> &StatsTracker {
        &self.stats
    }
}
